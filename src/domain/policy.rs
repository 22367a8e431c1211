use serde::{Deserialize, Serialize};

use super::RuleAction;

/// Policy document defining the configured rule list.
///
/// Rule order in the document is significant: for a given fact, the last
/// applicable rule that matches determines the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Optional label for logs
    #[serde(default)]
    pub name: String,

    /// Ordered rule definitions
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

impl Policy {
    /// Create a policy with no rules.
    pub fn empty() -> Self {
        Policy {
            name: String::new(),
            rules: Vec::new(),
        }
    }
}

/// Definition of a single rule as it appears in configuration.
///
/// `trait` and `match` are reserved words in Rust, hence the serde renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// Verdict applied when the rule matches
    pub action: RuleAction,

    /// Fact category this rule governs
    #[serde(rename = "trait")]
    pub trait_name: String,

    /// IPv4 address literal, IPv4 CIDR literal, or regular expression,
    /// interpreted contextually at evaluation time
    #[serde(rename = "match")]
    pub match_expr: String,
}
