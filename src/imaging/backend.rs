//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two primitives the album build
//! needs from an imaging library: reading a capture time out of embedded
//! metadata and writing a bounded-box thumbnail. Both work on bytes already
//! in memory, so each source file is read from disk exactly once.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use super::params::ThumbnailParams;
use crate::types::CaptureTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata error: {0}")]
    Metadata(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of a decoded or generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// `Sync` because one backend is shared by every worker of a directory's
/// fan-out.
pub trait ImageBackend: Sync {
    /// Capture time from embedded metadata.
    ///
    /// `Ok(None)` means the metadata was readable but carried no date;
    /// `Err` means the metadata could not be decoded at all.
    fn read_capture_time(&self, source: &[u8]) -> Result<Option<CaptureTime>, BackendError>;

    /// Decode, resize into the bounding box, encode and write the thumbnail.
    /// Returns the dimensions of the written file.
    fn thumbnail(&self, params: &ThumbnailParams<'_>) -> Result<Dimensions, BackendError>;
}
