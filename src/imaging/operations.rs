//! High-level image operations.
//!
//! These functions combine file naming and the fixed thumbnail bounds with
//! backend execution, turning backend results into album data.

use super::backend::{BackendError, ImageBackend};
use super::params::{Quality, ThumbnailParams};
use crate::types::Thumbnail;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Widest thumbnail generated, in pixels.
pub const MAX_THUMBNAIL_WIDTH: u32 = 300;

/// Tallest thumbnail generated, in pixels.
pub const MAX_THUMBNAIL_HEIGHT: u32 = 400;

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: Quality,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_THUMBNAIL_WIDTH,
            max_height: MAX_THUMBNAIL_HEIGHT,
            quality: Quality::default(),
        }
    }
}

/// Plan a thumbnail operation without executing it.
pub fn plan_thumbnail<'a>(
    source: &'a [u8],
    output_path: &Path,
    config: &ThumbnailConfig,
) -> ThumbnailParams<'a> {
    ThumbnailParams {
        source,
        output: output_path.to_path_buf(),
        max_width: config.max_width,
        max_height: config.max_height,
        quality: config.quality,
    }
}

/// Create `thumbnail_name` inside `output_dir` from the encoded source bytes.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &[u8],
    output_dir: &Path,
    thumbnail_name: &str,
    config: &ThumbnailConfig,
) -> Result<Thumbnail> {
    let params = plan_thumbnail(source, &output_dir.join(thumbnail_name), config);
    let dims = backend.thumbnail(&params)?;

    Ok(Thumbnail {
        name: thumbnail_name.to_string(),
        width: dims.width,
        height: dims.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    #[test]
    fn default_config_uses_fixed_bounds() {
        let config = ThumbnailConfig::default();
        assert_eq!(config.max_width, 300);
        assert_eq!(config.max_height, 400);
        assert_eq!(config.quality, Quality::new(75));
    }

    #[test]
    fn plan_thumbnail_targets_output_path() {
        let params = plan_thumbnail(
            b"bytes",
            Path::new("/out/a_thumbnail.jpg"),
            &ThumbnailConfig::default(),
        );

        assert_eq!(params.output, Path::new("/out/a_thumbnail.jpg"));
        assert_eq!(params.source, b"bytes");
        assert_eq!((params.max_width, params.max_height), (300, 400));
    }

    #[test]
    fn create_thumbnail_reports_backend_dimensions() {
        let backend = MockBackend::with_dimensions(4000, 3000);

        let thumb = create_thumbnail(
            &backend,
            b"",
            Path::new("/output"),
            "dawn_thumbnail.jpg",
            &ThumbnailConfig::default(),
        )
        .unwrap();

        assert_eq!(
            thumb,
            Thumbnail {
                name: "dawn_thumbnail.jpg".into(),
                width: 300,
                height: 225,
            }
        );

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Thumbnail { output, quality: 75, .. } if output.ends_with("dawn_thumbnail.jpg")
        ));
    }

    #[test]
    fn create_thumbnail_propagates_backend_failure() {
        let backend = MockBackend::failing_thumbnails();

        let result = create_thumbnail(
            &backend,
            b"",
            Path::new("/output"),
            "x_thumbnail.jpg",
            &ThumbnailConfig::default(),
        );

        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }
}
