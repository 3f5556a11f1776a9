use crate::util::{ErrorExit, assemble_or_report, manifest_find_read_parse};
use inlang_grammar::assemble::{CheckMismatch, check_generated};
use std::path::PathBuf;
use std::process::ExitCode;

pub fn main_check(manifest: Option<PathBuf>) -> ExitCode {
    let manifest = match manifest_find_read_parse(manifest) {
        Ok(m) => m,
        Err(ErrorExit) => return ExitCode::FAILURE,
    };
    let files = match assemble_or_report(&manifest.parsed) {
        Ok(files) => files,
        Err(ErrorExit) => return ExitCode::FAILURE,
    };

    let mismatches = match check_generated(&manifest.path_parent, &files) {
        Ok(mismatches) => mismatches,
        Err(e) => {
            tracing::error!("Failed to read generated file: {e}");
            return ExitCode::FAILURE;
        }
    };

    for mismatch in &mismatches {
        let msg = match mismatch {
            CheckMismatch::Missing(_) => "missing",
            CheckMismatch::Stale(_) => "out of date",
        };
        tracing::error!("{}: {msg}", mismatch.path().display());
    }

    if mismatches.is_empty() {
        tracing::info!("Check passed, all {} generated files are up to date", files.len());
        ExitCode::SUCCESS
    } else {
        tracing::error!("Check failed, run `build` to regenerate");
        ExitCode::FAILURE
    }
}
