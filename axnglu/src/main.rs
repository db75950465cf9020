mod application;
mod presentation;

use std::process::ExitCode;

use axnglu_core::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::presentation::cli::Cli;

const LOG_ENV: &str = "AXNGLU_LOG";

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("axnglu={level},axnglu_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::InvalidArgument => 64,
        ErrorKind::NotFound => 66,
        ErrorKind::Conflict => 73,
        ErrorKind::Io => 74,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match application::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("axnglu: {e}");
            ExitCode::from(exit_code(e.kind()))
        }
    }
}
