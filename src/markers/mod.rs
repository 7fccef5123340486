//! Marker extraction from FCPXML project trees.
//!
//! Markers live deep inside nested clips and sequences, each of which defines
//! its own local time origin. The scanner resolves every marker to an
//! absolute position on the master timeline, and the presentation step turns
//! the result into sorted, deduplicated display lines.
//!
//! # Module Structure
//!
//! - `scan` - Recursive offset-accumulating tree walk
//! - `present` - Sorting, deduplication and `HH:MM:SS` formatting

mod present;
mod scan;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use present::{dedup_markers, present, sort_by_start, Timestamp};
pub use scan::{scan, scan_document, ScanError, Scanner};

/// A named point on the master timeline.
///
/// `start_time` is absolute: every ancestor offset has already been applied.
#[derive(Debug, Clone)]
pub struct Marker {
    name: String,
    start_time: f64,
}

impl Marker {
    pub fn new(name: impl Into<String>, start_time: f64) -> Self {
        Self {
            name: name.into(),
            start_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute offset from the timeline origin, in seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Timestamp of this marker, truncated to whole seconds.
    pub fn timestamp(&self) -> Timestamp {
        Timestamp::from_seconds(self.start_time)
    }

    /// Render as `"HH:MM:SS name"`.
    pub fn display_line(&self) -> String {
        self.to_string()
    }
}

// Structural equality. Times compare by bit pattern so equal markers always
// hash alike.
impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.start_time.to_bits() == other.start_time.to_bits()
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.start_time.to_bits().hash(state);
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp(), self.name)
    }
}
