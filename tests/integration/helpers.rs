//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the checked-in `.fcpxml` fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture into a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    write_temp(name, &load_fixture(name))
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
