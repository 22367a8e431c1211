pub mod action;
pub mod fact;
pub mod policy;

pub use action::RuleAction;
pub use fact::Fact;
pub use policy::{Policy, RuleDef};
