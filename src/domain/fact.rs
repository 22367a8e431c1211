use serde::{Deserialize, Serialize};

/// An observed datum produced by the collection pipeline.
///
/// The trait names the semantic category (e.g. `remote.host.ip`,
/// `host.file.path`) and the value carries the payload. Facts are
/// read-only as far as the evaluator is concerned; it filters them,
/// it never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Semantic category; selects which rules apply
    #[serde(rename = "trait")]
    pub trait_name: String,

    /// String payload: an IP literal, a CIDR literal, a path, ...
    pub value: String,
}

impl Fact {
    /// Create a fact from a trait/value pair.
    pub fn new(trait_name: impl Into<String>, value: impl Into<String>) -> Self {
        Fact {
            trait_name: trait_name.into(),
            value: value.into(),
        }
    }
}
