//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definition the binary parses.

use std::path::PathBuf;

use clap::Parser;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("FCPX_MARKERS_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FCPX_MARKERS_BUILD_DATE"),
    ")"
);

/// Extract chapter markers from a Final Cut Pro X project.
#[derive(Parser, Debug)]
#[command(name = "fcpx-markers")]
#[command(version = VERSION, about, long_about = None)]
#[command(after_help = "Each marker is printed as `HH:MM:SS name`, one per line, \
sorted and without duplicates.\nSet RUST_LOG to override the log level.")]
pub struct Cli {
    /// FCPXML project file to read markers from
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Verbose logging on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
