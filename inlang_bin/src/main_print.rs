use crate::args::ArgsPrint;
use crate::util::{ErrorExit, manifest_find_read_parse};
use inlang_grammar::assemble::generate_host;
use inlang_grammar::grammar::to_json_string;
use std::path::PathBuf;
use std::process::ExitCode;

pub fn main_print(manifest: Option<PathBuf>, args: ArgsPrint) -> ExitCode {
    let ArgsPrint { host } = args;

    let manifest = match manifest_find_read_parse(manifest) {
        Ok(m) => m.parsed,
        Err(ErrorExit) => return ExitCode::FAILURE,
    };

    let hosts = manifest
        .hosts
        .iter()
        .filter(|h| host.as_ref().is_none_or(|name| &h.vsname == name))
        .collect::<Vec<_>>();
    if hosts.is_empty() {
        tracing::error!("No host named {host:?} in manifest");
        return ExitCode::FAILURE;
    }

    for (i, h) in hosts.into_iter().enumerate() {
        match to_json_string(&generate_host(&manifest, h)) {
            Ok(s) => {
                if i > 0 {
                    println!();
                }
                print!("{s}");
            }
            Err(e) => {
                tracing::error!("Failed to serialize grammar for host `{}`: {e}", h.vsname);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
