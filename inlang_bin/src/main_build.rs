use crate::util::{ErrorExit, assemble_or_report, manifest_find_read_parse};
use inlang_grammar::assemble::{WriteSummary, write_generated};
use std::path::PathBuf;
use std::process::ExitCode;

pub fn main_build(manifest: Option<PathBuf>) -> ExitCode {
    let manifest = match manifest_find_read_parse(manifest) {
        Ok(m) => m,
        Err(ErrorExit) => return ExitCode::FAILURE,
    };
    let files = match assemble_or_report(&manifest.parsed) {
        Ok(files) => files,
        Err(ErrorExit) => return ExitCode::FAILURE,
    };

    match write_generated(&manifest.path_parent, &files) {
        Ok(WriteSummary { written, unchanged }) => {
            tracing::info!(
                "Generated {} file{}: {written} written, {unchanged} unchanged",
                files.len(),
                if files.len() == 1 { "" } else { "s" },
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to write generated file: {e}");
            ExitCode::FAILURE
        }
    }
}
