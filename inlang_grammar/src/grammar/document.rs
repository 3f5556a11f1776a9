use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Repository key of the rule that holds the per-language raw string rules.
pub const REPO_KEY_RAW_STRINGS: &str = "raw_strings";

/// A TextMate injection grammar, in the shape of `tmlanguage.json`.
///
/// Field order matches the order in which the fields are written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GrammarDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub injection_selector: String,
    pub scope_name: String,
    pub comment: String,
    pub patterns: Vec<Include>,
    pub repository: IndexMap<String, RepositoryRule>,
}

impl GrammarDocument {
    pub fn raw_strings(&self) -> Option<&RepositoryRule> {
        self.repository.get(REPO_KEY_RAW_STRINGS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Include {
    pub include: String,
}

impl Include {
    pub fn new(include: impl Into<String>) -> Self {
        Include {
            include: include.into(),
        }
    }

    pub fn repository(key: &str) -> Self {
        Include::new(format!("#{key}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryRule {
    pub comment: String,
    pub patterns: Vec<BeginEndRule>,
}

/// A rule that opens a region at `begin` and closes it at `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BeginEndRule {
    pub comment: String,
    pub begin: String,
    /// Keyed by capture group index.
    pub begin_captures: IndexMap<String, Capture>,
    pub content_name: String,
    pub patterns: Vec<Include>,
    pub end: String,
    // Not keyed by group index, existing grammars have always been generated with this flat shape.
    pub end_captures: Capture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capture {
    pub name: String,
}

impl Capture {
    pub fn new(name: impl Into<String>) -> Self {
        Capture { name: name.into() }
    }
}
