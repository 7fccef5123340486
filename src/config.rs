//! Configuration for the marker scanner.

/// Tag name of the FCPXML element carrying a chapter marker.
pub const CHAPTER_MARKER_TAG: &str = "chapter-marker";

/// Configuration for [`Scanner`](crate::markers::Scanner).
///
/// The defaults match the FCPXML 1.x schema; nothing is read from disk or
/// the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Element tags treated as marker leaves
    pub marker_tags: Vec<String>,
    /// Attribute holding a node's local start time
    pub start_attr: String,
    /// Attribute holding a node's offset within its parent
    pub offset_attr: String,
    /// Attribute holding a marker's display name
    pub name_attr: String,
}

impl ScanConfig {
    /// Whether `tag` names a marker node.
    pub fn is_marker_tag(&self, tag: &str) -> bool {
        self.marker_tags.iter().any(|t| t == tag)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker_tags: vec![CHAPTER_MARKER_TAG.to_string()],
            start_attr: "start".to_string(),
            offset_attr: "offset".to_string(),
            name_attr: "value".to_string(),
        }
    }
}
