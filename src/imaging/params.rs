//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what to create and where) and the [`backend`](super::backend)
//! (which does the pixel work). Tests swap in a mock backend without touching
//! operation logic.
//!
//! ## Types
//!
//! - [`Quality`]: lossy JPEG quality (1-100, default 75). Clamped on construction.
//! - [`ThumbnailParams`]: everything a thumbnail needs. Source bytes,
//!   output path, bounding box, quality.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Parameters for a bounded-box thumbnail (resize only, never crops).
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams<'a> {
    /// Encoded source image, already read into memory.
    pub source: &'a [u8],
    pub output: PathBuf,
    pub max_width: u32,
    pub max_height: u32,
    pub quality: Quality,
}
