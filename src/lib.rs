pub mod config;
pub mod domain;
pub mod observability;
pub mod policy;
pub mod rules;

pub use config::Config;
pub use domain::{Fact, Policy, RuleAction, RuleDef};
pub use rules::{Rule, RuleSet};
