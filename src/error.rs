//! Top-level extraction errors.

use crate::fcpxml::DocumentError;
use crate::markers::ScanError;

/// Errors that can occur while extracting markers from a project.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Invalid marker: {0}")]
    Scan(#[from] ScanError),
}
