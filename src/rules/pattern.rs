use regex::Regex;

/// Compile a rule match expression for prefix matching.
///
/// The compiled regex is anchored at the start of the value but does not
/// have to consume all of it: `^10\.` matches `10.1.2.3`, not `110.1.2.3`,
/// and `/tmp/` matches any value starting with that prefix.
pub fn compile_prefix(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_anchoring() {
        let re = compile_prefix(r"^10\.").unwrap();
        assert!(re.is_match("10.1.2.3"));
        assert!(!re.is_match("110.1.2.3"));
    }

    #[test]
    fn test_unanchored_pattern_still_matches_from_start_only() {
        let re = compile_prefix(r"/tmp/").unwrap();
        assert!(re.is_match("/tmp/staged"));
        assert!(!re.is_match("/var/tmp/staged"));
    }

    #[test]
    fn test_partial_prefix_match_suffices() {
        let re = compile_prefix("10.0.0.1").unwrap();
        // `.` matches any character and the tail is ignored
        assert!(re.is_match("10.0.0.123"));
        assert!(re.is_match("10a0b0c1"));
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let re = compile_prefix(".*").unwrap();
        assert!(re.is_match(""));
        assert!(re.is_match("10.0.0.1"));
        assert!(re.is_match("/tmp/staged"));
    }

    #[test]
    fn test_alternation_is_grouped() {
        let re = compile_prefix("foo|bar").unwrap();
        assert!(re.is_match("barbecue"));
        assert!(!re.is_match("rebar"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(compile_prefix("([unclosed").is_err());
    }
}
