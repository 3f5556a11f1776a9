use inlang_grammar::assemble::{GeneratedFile, assemble};
use inlang_grammar::manifest::Manifest;
use inlang_util::constants::INLANG_MANIFEST_FILE_NAME;
use inlang_util::io::{IoErrorExt, read_to_string_if_exists};
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Marker that the error has already been reported, the caller should just exit with a failure code.
#[derive(Debug)]
pub struct ErrorExit;

#[derive(Debug)]
pub struct FoundManifest {
    pub manifest_path: PathBuf,
    pub manifest_parent: PathBuf,
    pub manifest_source: String,
}

pub struct LoadedManifest {
    pub path_parent: PathBuf,
    pub parsed: Manifest,
}

#[derive(Debug)]
pub struct FindManifestError(pub String);

pub fn find_and_read_manifest(manifest_path: Option<PathBuf>) -> Result<FoundManifest, FindManifestError> {
    let cwd = std::env::current_dir()
        .map_err(|e| FindManifestError(format!("Failed to get current working directory: {e}")))?;
    let cwd = std::path::absolute(&cwd).map_err(|e| {
        FindManifestError(format!(
            "Failed to convert working dir to absolute path: {}",
            e.with_path(cwd)
        ))
    })?;

    find_manifest_from(&cwd, manifest_path)
}

/// Read the explicitly given manifest, or the first manifest found in `cwd` or one of its ancestors.
fn find_manifest_from(cwd: &Path, manifest_path: Option<PathBuf>) -> Result<FoundManifest, FindManifestError> {
    let candidates = match &manifest_path {
        Some(manifest_path) => vec![cwd.join(manifest_path).clean()],
        None => cwd
            .ancestors()
            .map(|dir| dir.join(INLANG_MANIFEST_FILE_NAME))
            .collect(),
    };

    for candidate in candidates {
        let source = read_to_string_if_exists(&candidate)
            .map_err(|e| FindManifestError(format!("Failed to read manifest file: {e}")))?;
        let Some(manifest_source) = source else {
            continue;
        };

        let manifest_parent = candidate
            .parent()
            .ok_or_else(|| {
                FindManifestError(format!("Manifest path {candidate:?} does not have a parent directory"))
            })?
            .to_owned();
        return Ok(FoundManifest {
            manifest_path: candidate,
            manifest_parent,
            manifest_source,
        });
    }

    Err(match manifest_path {
        Some(manifest_path) => FindManifestError(format!("Manifest file {manifest_path:?} does not exist")),
        None => FindManifestError(format!(
            "No manifest file `{INLANG_MANIFEST_FILE_NAME}` found in any parent directory of the current working directory {cwd:?}"
        )),
    })
}

pub fn manifest_find_read_parse(manifest_path: Option<PathBuf>) -> Result<LoadedManifest, ErrorExit> {
    let found = find_and_read_manifest(manifest_path).map_err(|FindManifestError(msg)| {
        tracing::error!("{msg}");
        ErrorExit
    })?;
    tracing::debug!("Using manifest {}", found.manifest_path.display());

    let parsed = Manifest::from_toml(&found.manifest_source).map_err(|e| {
        tracing::error!("{}: {e}", found.manifest_path.display());
        ErrorExit
    })?;

    Ok(LoadedManifest {
        path_parent: found.manifest_parent,
        parsed,
    })
}

pub fn assemble_or_report(manifest: &Manifest) -> Result<Vec<GeneratedFile>, ErrorExit> {
    assemble(manifest).map_err(|e| {
        tracing::error!("Failed to serialize generated grammar: {e}");
        ErrorExit
    })
}
