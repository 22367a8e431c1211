use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::WILDCARD;

/// Classification of a rule match expression or fact value as an IPv4
/// address, an IPv4 CIDR network, or neither.
///
/// Classification is a deterministic format check, not an error path: a
/// string that parses as nothing IP-shaped is simply `Neither` and the
/// rule falls through to pattern matching. Only IPv4 is recognized; IPv6
/// literals classify as `Neither` (known limitation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpClass {
    /// A single IPv4 address literal
    Address(Ipv4Addr),
    /// An IPv4 network in CIDR notation, host bits zero
    Network(Ipv4Net),
    /// Not IP-shaped; handled by the pattern matcher
    Neither,
}

impl IpClass {
    /// Classify a string, trying address before network so a bare address
    /// is never treated as a degenerate network.
    pub fn classify(value: &str) -> Self {
        if let Ok(addr) = Ipv4Addr::from_str(value) {
            return IpClass::Address(addr);
        }
        if let Ok(net) = Ipv4Net::from_str(value) {
            // A CIDR with host bits set (10.0.0.1/24) is not a network
            if net.addr() == net.network() {
                return IpClass::Network(net);
            }
        }
        IpClass::Neither
    }

    /// Returns true if this is `Neither`.
    #[inline]
    pub fn is_neither(&self) -> bool {
        matches!(self, IpClass::Neither)
    }
}

/// Decide whether a rule matches a fact value under IP semantics.
///
/// `rule_expr` is the rule's original match text, `rule_class` its
/// precomputed classification. The fact value is classified here, per
/// evaluation.
///
/// Address-vs-address and network-vs-network comparisons are on the raw
/// strings, so equivalent but non-identical notations do not match.
/// Network-vs-network containment is deliberately excluded: a fact
/// supernet that merely overlaps a denied rule subnet must not inherit
/// the denial, so only textually identical networks compare equal. A
/// network fact is never judged against a single-address rule.
pub fn is_ip_match(rule_expr: &str, rule_class: &IpClass, fact_value: &str) -> bool {
    // Allow/deny-all rules stay with the pattern matcher so they behave
    // uniformly across IP and non-IP traits.
    if rule_expr == WILDCARD {
        return false;
    }

    match (IpClass::classify(fact_value), rule_class) {
        (IpClass::Address(_), IpClass::Address(_)) => fact_value == rule_expr,
        (IpClass::Network(_), IpClass::Address(_)) => false,
        (IpClass::Address(addr), IpClass::Network(net)) => net.contains(&addr),
        (IpClass::Network(_), IpClass::Network(_)) => fact_value == rule_expr,
        _ => false,
    }
}
