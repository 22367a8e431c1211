use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::Policy;
use crate::rules::{RuleCompileError, RuleSet};

/// Errors that can occur during policy loading.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Rule(#[from] RuleCompileError),
}

/// Load a policy from a YAML file.
pub fn load_policy(path: impl AsRef<Path>) -> Result<Policy, PolicyError> {
    let content = fs::read_to_string(path)?;
    let policy: Policy = serde_yaml::from_str(&content)?;
    Ok(policy)
}

/// Policy loader that reads a rule file and compiles it into a ruleset.
///
/// Compilation validates every match expression up front, so a malformed
/// rule fails the load instead of surfacing mid-evaluation.
pub struct PolicyLoader {
    policy_path: String,
}

impl PolicyLoader {
    /// Create a new policy loader.
    pub fn new(policy_path: impl Into<String>) -> Self {
        PolicyLoader {
            policy_path: policy_path.into(),
        }
    }

    /// Load the policy and compile it, returning both.
    pub fn load(&self) -> Result<(Policy, RuleSet), PolicyError> {
        let policy = load_policy(&self.policy_path)?;
        let ruleset = RuleSet::from_policy(&policy)?;
        Ok((policy, ruleset))
    }

    /// Load only the policy document (without compiling rules).
    pub fn load_policy(&self) -> Result<Policy, PolicyError> {
        load_policy(&self.policy_path)
    }

    /// Get the policy file path.
    pub fn policy_path(&self) -> &str {
        &self.policy_path
    }
}
