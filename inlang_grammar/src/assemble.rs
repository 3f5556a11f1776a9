use crate::contribute::contributes_json;
use crate::grammar::document::GrammarDocument;
use crate::grammar::{build_syntax, to_json_string};
use crate::manifest::{Manifest, ManifestHost};
use inlang_util::io::{IoErrorWithPath, read_to_string_if_exists, write_creating_dirs};
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// A file produced from a manifest, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative to the manifest directory.
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMismatch {
    Missing(PathBuf),
    Stale(PathBuf),
}

impl CheckMismatch {
    pub fn path(&self) -> &Path {
        match self {
            CheckMismatch::Missing(path) | CheckMismatch::Stale(path) => path,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub unchanged: usize,
}

pub fn generate_host(manifest: &Manifest, host: &ManifestHost) -> GrammarDocument {
    if manifest.embedded.is_empty() {
        tracing::warn!(
            "No embedded languages configured, grammar for host `{}` will not match anything",
            host.vsname
        );
    }
    tracing::debug!(
        "Building {} grammar for host `{}` with {} embedded languages",
        host.kind,
        host.vsname,
        manifest.embedded.len()
    );

    build_syntax(host.kind, &host.spec(), &manifest.embedded)
}

/// Build every file described by the manifest, in manifest order.
/// The contribution fragment, if configured, comes last.
pub fn assemble(manifest: &Manifest) -> serde_json::Result<Vec<GeneratedFile>> {
    let mut files = vec![];

    for host in &manifest.hosts {
        let document = generate_host(manifest, host);
        files.push(GeneratedFile {
            path: host.output.clean(),
            content: to_json_string(&document)?,
        });
    }

    if let Some(contributes) = &manifest.contributes {
        files.push(GeneratedFile {
            path: contributes.clean(),
            content: contributes_json(manifest)?,
        });
    }

    Ok(files)
}

/// Write the generated files below `root`, skipping files that are already up to date.
pub fn write_generated(root: &Path, files: &[GeneratedFile]) -> Result<WriteSummary, IoErrorWithPath> {
    let mut summary = WriteSummary::default();

    for file in files {
        let path = root.join(&file.path);
        let existing = read_to_string_if_exists(&path)?;

        if existing.as_deref() == Some(file.content.as_str()) {
            tracing::debug!("Unchanged {}", path.display());
            summary.unchanged += 1;
        } else {
            write_creating_dirs(&path, &file.content)?;
            tracing::info!("Wrote {}", path.display());
            summary.written += 1;
        }
    }

    Ok(summary)
}

/// Compare the generated files with what is on disk below `root`.
/// A missing file is reported as a mismatch, not as an error.
pub fn check_generated(root: &Path, files: &[GeneratedFile]) -> Result<Vec<CheckMismatch>, IoErrorWithPath> {
    let mut mismatches = vec![];

    for file in files {
        let path = root.join(&file.path);
        match read_to_string_if_exists(&path)? {
            None => mismatches.push(CheckMismatch::Missing(file.path.clone())),
            Some(existing) if existing != file.content => mismatches.push(CheckMismatch::Stale(file.path.clone())),
            Some(_) => {}
        }
    }

    Ok(mismatches)
}
