//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Capture time | `kamadak-exif` reader over the in-memory JPEG |
//! | Decode | `image::load_from_memory` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::calculate_bounded_dimensions;
use super::params::ThumbnailParams;
use crate::types::CaptureTime;
use chrono::{FixedOffset, NaiveDate};
use exif::{In, Reader, Tag, Value};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Date tags in order of preference, each with the tag holding its UTC offset.
const DATE_TAGS: &[(Tag, Tag)] = &[
    (Tag::DateTimeOriginal, Tag::OffsetTimeOriginal),
    (Tag::DateTimeDigitized, Tag::OffsetTimeDigitized),
    (Tag::DateTime, Tag::OffsetTime),
];

/// Pure Rust backend using the `image` and `kamadak-exif` crates.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn ascii_value(exif: &exif::Exif, tag: Tag) -> Option<&[u8]> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(values) => values.first().map(Vec::as_slice),
        _ => None,
    }
}

/// Convert an EXIF date-time into a chrono timestamp.
///
/// EXIF stores wall-clock time; a missing offset is read as UTC so results
/// do not depend on the time zone of the machine running the build.
fn to_capture_time(dt: &exif::DateTime) -> Option<CaptureTime> {
    let naive = NaiveDate::from_ymd_opt(i32::from(dt.year), u32::from(dt.month), u32::from(dt.day))?
        .and_hms_nano_opt(
            u32::from(dt.hour),
            u32::from(dt.minute),
            u32::from(dt.second),
            dt.nanosecond.unwrap_or(0),
        )?;
    let offset = FixedOffset::east_opt(i32::from(dt.offset.unwrap_or(0)) * 60)?;
    naive.and_local_timezone(offset).single()
}

fn capture_time_from_exif(exif: &exif::Exif) -> Option<CaptureTime> {
    DATE_TAGS.iter().find_map(|&(date_tag, offset_tag)| {
        let mut dt = exif::DateTime::from_ascii(ascii_value(exif, date_tag)?).ok()?;
        if let Some(offset) = ascii_value(exif, offset_tag) {
            // A malformed offset leaves the time in UTC
            let _ = dt.parse_offset(offset);
        }
        to_capture_time(&dt)
    })
}

/// Encode as JPEG and write to `path`.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100) as u8);
    DynamicImage::ImageRgb8(img.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {e}")))?;
    writer.flush()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn read_capture_time(&self, source: &[u8]) -> Result<Option<CaptureTime>, BackendError> {
        let exif = Reader::new()
            .read_from_container(&mut Cursor::new(source))
            .map_err(|e| BackendError::Metadata(e.to_string()))?;
        Ok(capture_time_from_exif(&exif))
    }

    fn thumbnail(&self, params: &ThumbnailParams<'_>) -> Result<Dimensions, BackendError> {
        let img = image::load_from_memory(params.source)
            .map_err(|e| BackendError::ProcessingFailed(format!("Failed to decode: {e}")))?;

        let (width, height) = calculate_bounded_dimensions(
            (img.width(), img.height()),
            (params.max_width, params.max_height),
        );
        let thumb = if (width, height) == (img.width(), img.height()) {
            img
        } else {
            img.resize_exact(width, height, FilterType::Lanczos3)
        };

        save_jpeg(&thumb, &params.output, params.quality.value())?;
        Ok(Dimensions { width, height })
    }
}
