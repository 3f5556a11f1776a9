use serde::{Deserialize, Serialize};

/// The host language whose raw strings get an embedded language injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSpec {
    /// Short identifier used as the last component of generated scope names, eg. `go`.
    pub vsname: String,
    /// Scope name of the generated injection grammar itself.
    pub embedded_scope: String,
}

/// A language that can be embedded in a host raw string.
///
/// The order in which these are passed to a builder is the order of the generated match rules,
/// and the consuming highlighter picks the first rule that matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddedSpec {
    /// Human-readable name, only used in comments of the generated grammar.
    pub name: String,
    /// Regex alternation of the tags accepted in the marker comment, eg. `sql|postgres`.
    /// Matched case-insensitively and inserted into the generated pattern as-is.
    pub id_choice_re: String,
    pub vsname: String,
    /// Scope name of the grammar that highlights this language, eg. `source.sql`.
    pub root_scope: String,
}
