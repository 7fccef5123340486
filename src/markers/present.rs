//! Ordering, deduplication and formatting of scanned markers.

use std::collections::HashSet;
use std::fmt;

use super::Marker;

const SECS_PER_DAY: i64 = 86_400;
const MICROS_PER_SEC: i64 = 1_000_000;

/// Whole-second timestamp split into days and a time of day.
///
/// Only `HH:MM:SS` is rendered; `days` is kept so callers can detect
/// markers that wrapped past midnight (or fell before zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Timestamp {
    /// Build a timestamp from fractional seconds.
    ///
    /// The value is first rounded to microseconds, then floored to whole
    /// seconds, so `-0.5` lands on day `-1` at `23:59:59`.
    pub fn from_seconds(seconds: f64) -> Self {
        let micros = (seconds * MICROS_PER_SEC as f64).round() as i64;
        let whole = micros.div_euclid(MICROS_PER_SEC);
        let days = whole.div_euclid(SECS_PER_DAY);
        let of_day = whole.rem_euclid(SECS_PER_DAY) as u32;

        Self {
            days,
            hours: of_day / 3600,
            minutes: of_day % 3600 / 60,
            seconds: of_day % 60,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Stable sort by absolute start time.
pub fn sort_by_start(markers: &mut [Marker]) {
    markers.sort_by(|a, b| a.start_time().total_cmp(&b.start_time()));
}

/// Drop structurally equal markers, keeping the first occurrence.
pub fn dedup_markers(markers: Vec<Marker>) -> Vec<Marker> {
    let mut seen = HashSet::with_capacity(markers.len());
    markers
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

/// Turn scanned markers into the final display lines.
///
/// Markers are sorted by time and deduplicated, then rendered. Distinct
/// markers that render identically collapse to one line, and the lines are
/// sorted lexically.
pub fn present(mut markers: Vec<Marker>) -> Vec<String> {
    sort_by_start(&mut markers);
    let markers = dedup_markers(markers);

    let mut lines: Vec<String> = markers
        .iter()
        .map(|m| {
            let timestamp = m.timestamp();
            if timestamp.days != 0 {
                tracing::warn!(
                    name = m.name(),
                    start_time = m.start_time(),
                    days = timestamp.days,
                    "Marker lies outside the first 24 hours; day count is not shown"
                );
            }
            m.display_line()
        })
        .collect();

    lines.sort();
    lines.dedup();
    lines
}
