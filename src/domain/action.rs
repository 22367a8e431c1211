use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict a rule applies to facts it matches.
///
/// A matching `Allow` rule admits the fact, a matching `Deny` rule
/// rejects it. Facts with no matching rule are allowed by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Matching facts pass the filter
    Allow,
    /// Matching facts are dropped
    Deny,
}

impl RuleAction {
    /// Returns true if this action admits the fact.
    #[inline]
    pub fn is_allow(&self) -> bool {
        *self == RuleAction::Allow
    }
}

impl Default for RuleAction {
    fn default() -> Self {
        RuleAction::Allow
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleAction::Allow => write!(f, "allow"),
            RuleAction::Deny => write!(f, "deny"),
        }
    }
}
