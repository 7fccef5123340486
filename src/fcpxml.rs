//! FCPXML project document loading.
//!
//! The whole document is read into memory and parsed into a DOM before any
//! scanning begins. Well-formedness is the only thing checked here; the
//! FCPXML schema itself is never validated.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, ParsingOptions};

/// Errors raised while loading a project document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// The raw text of an FCPXML project, ready to be parsed.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: Option<PathBuf>,
    text: String,
}

impl ProjectFile {
    /// Read a project file from disk.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "Read project file");

        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    /// Wrap an in-memory document.
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    /// Path the document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Parse the text into an XML tree.
    ///
    /// FCPXML exports start with `<!DOCTYPE fcpxml>`, so DTDs are allowed.
    pub fn parse(&self) -> Result<Document<'_>, DocumentError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Ok(Document::parse_with_options(&self.text, options)?)
    }
}
