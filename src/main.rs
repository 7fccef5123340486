//! fcpx-markers CLI binary.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use fcpx_markers::cli::Cli;
use tracing_subscriber::EnvFilter;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries nothing but marker lines.
    // RUST_LOG takes precedence over -v.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match commands::extract::handle_extract(&cli.file, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}
