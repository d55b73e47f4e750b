//! Shared test utilities for the photo-album test suite.
//!
//! Record builders keep unit tests focused on the behavior under test
//! instead of on struct literals. The JPEG builders live in
//! `tests/common/mod.rs` so the integration tests share them, and are
//! re-exported here for backend tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let dated = image("a.jpg", Some("2020-01-05T10:00:00Z"));
//! let undated = image("b.jpg", None);
//! let sub = album("sub", 1, Some("2020-01-01T00:00:00Z"), Some("2020-01-01T00:00:00Z"));
//! ```

use crate::naming::thumbnail_name;
use crate::types::{Album, CaptureTime, Image, Thumbnail};
use std::fs;
use std::path::Path;

#[path = "../tests/common/mod.rs"]
mod jpeg_fixtures;
pub use jpeg_fixtures::*;

// =========================================================================
// Records
// =========================================================================

/// Parse an RFC 3339 timestamp. Panics on malformed input.
pub fn time(rfc3339: &str) -> CaptureTime {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .unwrap_or_else(|e| panic!("bad test timestamp {rfc3339:?}: {e}"))
}

/// An image record as the processor would report it for a 4:3 source.
pub fn image(name: &str, capture_time: Option<&str>) -> Image {
    Image {
        name: name.to_string(),
        thumbnail: Thumbnail {
            name: thumbnail_name(name).unwrap_or_else(|| panic!("{name} has no extension")),
            width: 300,
            height: 225,
        },
        capture_time: capture_time.map(time),
    }
}

pub fn album(name: &str, num_images: usize, min: Option<&str>, max: Option<&str>) -> Album {
    Album {
        name: name.to_string(),
        num_images,
        min_time: min.map(time),
        max_time: max.map(time),
    }
}

// =========================================================================
// Files
// =========================================================================

/// Write `(relative path, content)` pairs under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}
