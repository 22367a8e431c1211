pub mod ip;
pub mod pattern;

pub use ip::IpClass;

use ahash::AHashMap;
use regex::Regex;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::domain::{Fact, Policy, RuleAction, RuleDef};

/// Match expression that matches every value. Rules written this way are
/// handled by the pattern matcher even for IP-shaped values, so a single
/// allow/deny-all rule works uniformly across traits.
pub const WILDCARD: &str = ".*";

/// A rule definition whose match expression failed to compile.
///
/// Raised at ruleset construction, never per fact: a malformed rule is a
/// deployment defect, not a runtime condition.
#[derive(Error, Debug)]
#[error("rule for trait `{trait_name}` has invalid match expression `{match_expr}`: {source}")]
pub struct RuleCompileError {
    pub trait_name: String,
    pub match_expr: String,
    #[source]
    pub source: regex::Error,
}

/// A compiled rule: the configured triple plus everything precomputed at
/// load time (IP classification of the match expression, anchored regex).
#[derive(Debug)]
pub struct Rule {
    action: RuleAction,
    trait_name: String,
    match_expr: String,
    ip_class: IpClass,
    regex: Regex,
}

impl Rule {
    /// Compile a rule definition, validating its match expression.
    pub fn compile(def: &RuleDef) -> Result<Self, RuleCompileError> {
        let regex =
            pattern::compile_prefix(&def.match_expr).map_err(|source| RuleCompileError {
                trait_name: def.trait_name.clone(),
                match_expr: def.match_expr.clone(),
                source,
            })?;

        Ok(Rule {
            action: def.action,
            trait_name: def.trait_name.clone(),
            ip_class: IpClass::classify(&def.match_expr),
            match_expr: def.match_expr.clone(),
            regex,
        })
    }

    /// Verdict this rule applies when it matches.
    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Fact category this rule governs.
    pub fn trait_name(&self) -> &str {
        &self.trait_name
    }

    /// Original match expression text.
    pub fn match_expr(&self) -> &str {
        &self.match_expr
    }

    fn is_ip_match(&self, value: &str) -> bool {
        ip::is_ip_match(&self.match_expr, &self.ip_class, value)
    }

    fn is_pattern_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Ordered collection of compiled rules.
///
/// Rule order defines precedence: for a given fact, the last applicable
/// rule that matches determines the verdict. The set is immutable once
/// built and holds no interior state, so one shared reference can serve
/// any number of threads without locking.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
    // trait -> indices into `rules`, ascending, so per-trait iteration
    // preserves configured order
    by_trait: AHashMap<String, SmallVec<[usize; 4]>>,
}

impl RuleSet {
    /// Build a ruleset from compiled rules, preserving their order.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut by_trait: AHashMap<String, SmallVec<[usize; 4]>> = AHashMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            by_trait.entry(rule.trait_name.clone()).or_default().push(idx);
        }
        RuleSet { rules, by_trait }
    }

    /// Compile every rule definition in a policy into a ruleset.
    pub fn from_policy(policy: &Policy) -> Result<Self, RuleCompileError> {
        let rules = policy
            .rules
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet::new(rules))
    }

    /// Create a ruleset with no rules.
    pub fn empty() -> Self {
        RuleSet::new(Vec::new())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules governing the given trait, in configured order.
    fn applicable_rules<'a>(&'a self, trait_name: &str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.by_trait
            .get(trait_name)
            .into_iter()
            .flatten()
            .map(|&idx| &self.rules[idx])
    }

    /// Decide whether a single fact passes the filter.
    ///
    /// The verdict starts at allow and every applicable rule is consulted
    /// in order; each rule is tested under IP semantics first and under
    /// pattern semantics only when the IP test did not match. There is no
    /// early exit: the last matching rule wins.
    pub fn is_fact_allowed(&self, fact: &Fact) -> bool {
        let mut allowed = true;
        for rule in self.applicable_rules(&fact.trait_name) {
            if rule.is_ip_match(&fact.value) {
                allowed = rule.action.is_allow();
                continue;
            }
            if rule.is_pattern_match(&fact.value) {
                allowed = rule.action.is_allow();
            }
        }
        trace!(
            fact_trait = %fact.trait_name,
            value = %fact.value,
            allowed,
            "fact evaluated"
        );
        allowed
    }

    /// Filter a batch of facts, preserving their relative order.
    ///
    /// With no rules configured this is the identity. Pure function of
    /// (ruleset, facts); facts are never mutated.
    pub fn apply_rules(&self, facts: Vec<Fact>) -> Vec<Fact> {
        if self.rules.is_empty() {
            return facts;
        }
        facts
            .into_iter()
            .filter(|fact| self.is_fact_allowed(fact))
            .collect()
    }
}
