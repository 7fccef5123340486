//! Recursive marker scan.
//!
//! Each container node translates the coordinate system of its children by
//! `offset - start`. A marker's absolute time is its own `start` plus the sum
//! of every ancestor's translation. The translations travel down the call
//! stack as an immutable slice; each container builds a fresh sequence for
//! its children, so sibling subtrees never see each other's contributions.

use roxmltree::{Document, Node};

use super::Marker;
use crate::config::ScanConfig;
use crate::timecode::parse_time_code_or_zero;

/// Errors that abort a scan.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("<{tag}> at line {line}, column {column} has no name attribute")]
    MissingMarkerName { tag: String, line: u32, column: u32 },
}

/// Walks an FCPXML tree and collects markers in document pre-order.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan a whole document starting at its root element.
    pub fn scan_document(&self, doc: &Document<'_>) -> Result<Vec<Marker>, ScanError> {
        let markers = self.scan(doc.root_element(), &[])?;
        tracing::debug!(count = markers.len(), "Scanned document");
        Ok(markers)
    }

    /// Scan the subtree rooted at `node`.
    ///
    /// `ancestor_offsets` holds the `offset - start` translation of every
    /// container above `node`, outermost first.
    pub fn scan(
        &self,
        node: Node<'_, '_>,
        ancestor_offsets: &[f64],
    ) -> Result<Vec<Marker>, ScanError> {
        let start = parse_time_code_or_zero(node.attribute(self.config.start_attr.as_str()));
        let offset = parse_time_code_or_zero(node.attribute(self.config.offset_attr.as_str()));

        let tag = node.tag_name().name();
        if self.config.is_marker_tag(tag) {
            let name = node
                .attribute(self.config.name_attr.as_str())
                .ok_or_else(|| missing_name(node))?;
            let start_time = start + ancestor_offsets.iter().sum::<f64>();
            tracing::trace!(name, start_time, "Found marker");
            return Ok(vec![Marker::new(name, start_time)]);
        }

        let mut nested = Vec::with_capacity(ancestor_offsets.len() + 1);
        nested.extend_from_slice(ancestor_offsets);
        nested.push(offset - start);

        let mut markers = Vec::new();
        for child in node.children().filter(Node::is_element) {
            markers.extend(self.scan(child, &nested)?);
        }
        Ok(markers)
    }
}

/// Scan `node` with the default configuration.
pub fn scan(node: Node<'_, '_>, ancestor_offsets: &[f64]) -> Result<Vec<Marker>, ScanError> {
    Scanner::default().scan(node, ancestor_offsets)
}

/// Scan a whole document with the default configuration.
pub fn scan_document(doc: &Document<'_>) -> Result<Vec<Marker>, ScanError> {
    Scanner::default().scan_document(doc)
}

fn missing_name(node: Node<'_, '_>) -> ScanError {
    let pos = node.document().text_pos_at(node.range().start);
    ScanError::MissingMarkerName {
        tag: node.tag_name().name().to_string(),
        line: pos.row,
        column: pos.col,
    }
}
