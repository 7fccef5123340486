//! fcpx-markers - chapter marker extraction for Final Cut Pro X projects.
//!
//! Reads an `.fcpxml` document, resolves every chapter marker to its absolute
//! position on the master timeline and renders the result as a sorted list of
//! `HH:MM:SS name` lines.
//!
//! ```no_run
//! let lines = fcpx_markers::extract_lines("project.fcpxml")?;
//! for line in lines {
//!     println!("{line}");
//! }
//! # Ok::<(), fcpx_markers::ExtractError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fcpxml;
pub mod markers;
pub mod timecode;

use std::path::Path;

pub use config::ScanConfig;
pub use error::ExtractError;
pub use fcpxml::{DocumentError, ProjectFile};
pub use markers::{present, Marker, ScanError, Scanner, Timestamp};
pub use timecode::{parse_time_code, TimeCodeError};

/// Scan a loaded project with the given scanner, in discovery order.
pub fn scan_project(
    project: &ProjectFile,
    scanner: &Scanner,
) -> Result<Vec<Marker>, ExtractError> {
    let doc = project.parse()?;
    Ok(scanner.scan_document(&doc)?)
}

/// Read a project file and return its markers in discovery order.
pub fn extract_markers<P: AsRef<Path>>(path: P) -> Result<Vec<Marker>, ExtractError> {
    let project = ProjectFile::read(path)?;
    scan_project(&project, &Scanner::default())
}

/// Read a project file and return its sorted, deduplicated display lines.
pub fn extract_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ExtractError> {
    Ok(present(extract_markers(path)?))
}
