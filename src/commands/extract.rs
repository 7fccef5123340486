//! Marker extraction command handler

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Extract the markers of `path` and write one display line per marker.
pub fn handle_extract<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let lines = fcpx_markers::extract_lines(path)
        .with_context(|| format!("Failed to extract markers from {}", path.display()))?;

    tracing::info!(count = lines.len(), path = %path.display(), "Extracted markers");

    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
