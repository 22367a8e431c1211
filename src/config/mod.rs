use std::path::PathBuf;

use clap::Parser;

/// Fact filter configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "factgate")]
#[command(about = "Rule-based allow/deny filter for collected facts")]
pub struct Config {
    /// Path to the rule policy YAML file
    #[arg(long, default_value = "rules.yaml", env = "FACTGATE_RULES_PATH")]
    pub rules_path: PathBuf,

    /// Path to the facts input (JSON lines); stdin when omitted
    #[arg(long, env = "FACTGATE_FACTS_PATH")]
    pub facts_path: Option<PathBuf>,

    /// Path for allowed facts output (JSON lines); stdout when omitted
    #[arg(long, env = "FACTGATE_OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rules_path: PathBuf::from("rules.yaml"),
            facts_path: None,
            output_path: None,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.rules_path, PathBuf::from("rules.yaml"));
        assert!(config.facts_path.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_from_args() {
        let config = Config::parse_from([
            "factgate",
            "--rules-path",
            "/etc/factgate/rules.yaml",
            "--facts-path",
            "facts.jsonl",
        ]);

        assert_eq!(config.rules_path, PathBuf::from("/etc/factgate/rules.yaml"));
        assert_eq!(config.facts_path, Some(PathBuf::from("facts.jsonl")));
        assert!(config.output_path.is_none());
    }
}
