//! The `contributes.grammars` fragment an editor extension needs to load the generated injections.

use crate::grammar::embedded_block_scope;
use crate::manifest::{Manifest, ManifestHost};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contributes {
    pub grammars: Vec<GrammarContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GrammarContribution {
    pub scope_name: String,
    /// Grammar file relative to the extension root, which is the manifest directory.
    pub path: String,
    pub inject_to: Vec<String>,
    /// Maps the content scope of each embedded block to the language id used inside it.
    pub embedded_languages: IndexMap<String, String>,
}

pub fn build_contributes(manifest: &Manifest) -> Contributes {
    Contributes {
        grammars: manifest
            .hosts
            .iter()
            .map(|host| host_contribution(manifest, host))
            .collect_vec(),
    }
}

pub fn contributes_json(manifest: &Manifest) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(&build_contributes(manifest))?;
    s.push('\n');
    Ok(s)
}

fn host_contribution(manifest: &Manifest, host: &ManifestHost) -> GrammarContribution {
    let spec = host.spec();
    let embedded_languages = manifest
        .embedded
        .iter()
        .map(|lang| (embedded_block_scope(&spec, lang), lang.vsname.clone()))
        .collect();

    GrammarContribution {
        scope_name: host.embedded_scope.clone(),
        path: extension_relative_path(&host.output),
        inject_to: host.inject_to(),
        embedded_languages,
    }
}

/// Extension manifests use `./`-prefixed paths with forward slashes on every platform.
fn extension_relative_path(path: &Path) -> String {
    let joined = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/");
    format!("./{joined}")
}
