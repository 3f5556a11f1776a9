use clap::{Parser, Subcommand};
use inlang_util::constants::{INLANG_TOOL_NAME, INLANG_VERSION};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = INLANG_TOOL_NAME, version = INLANG_VERSION)]
pub struct Args {
    /// Manifest file, by default the first `inlang.toml` found in the working directory or its parents.
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Log every generated and unchanged file.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ArgsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ArgsCommand {
    /// Generate all grammars and write them next to the manifest.
    Build,
    /// Check that the grammars on disk match what would be generated.
    Check,
    /// Print generated grammars to stdout.
    Print(ArgsPrint),
}

#[derive(Parser, Debug)]
pub struct ArgsPrint {
    /// Only print the grammar of the host with this vsname.
    #[arg(long)]
    pub host: Option<String>,
}
