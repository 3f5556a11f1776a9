use crate::args::{Args, ArgsCommand};
use crate::main_build::main_build;
use crate::main_check::main_check;
use crate::main_print::main_print;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod args;
mod main_build;
mod main_check;
mod main_print;
mod util;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Args {
        manifest,
        verbose: _,
        command,
    } = args;

    match command {
        ArgsCommand::Build => main_build(manifest),
        ArgsCommand::Check => main_check(manifest),
        ArgsCommand::Print(args) => main_print(manifest, args),
    }
}

/// Log to stderr, stdout is reserved for `print` output.
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let logger_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(logger_layer)
        .init();
}
