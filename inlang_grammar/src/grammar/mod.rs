use crate::grammar::document::GrammarDocument;
use crate::spec::{EmbeddedSpec, HostSpec};
use serde::Deserialize;

pub mod document;
pub mod go;

/// Host languages for which an injection grammar can be built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HostKind {
    Go,
}

impl HostKind {
    /// Scope name of the grammar that highlights the host language itself.
    pub fn source_scope(self) -> &'static str {
        match self {
            HostKind::Go => "source.go",
        }
    }
}

pub fn build_syntax(kind: HostKind, host: &HostSpec, embedded: &[EmbeddedSpec]) -> GrammarDocument {
    match kind {
        HostKind::Go => go::build_go_syntax(host, embedded),
    }
}

/// Scope given to the contents of a raw string that holds `embedded` code, without the root scope suffix.
pub fn embedded_block_scope(host: &HostSpec, embedded: &EmbeddedSpec) -> String {
    format!("meta.embedded.block.{}.{}", embedded.vsname, host.vsname)
}

/// Serialize a grammar the way it is written to disk: pretty-printed with a trailing newline.
pub fn to_json_string(document: &GrammarDocument) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(document)?;
    s.push('\n');
    Ok(s)
}
