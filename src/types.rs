//! Data model shared by every stage of an album build.
//!
//! Records are created bottom-up: the image processor emits [`Image`]s, the
//! aggregator folds them (and the summaries of non-empty subdirectories) into
//! one [`Album`] per directory. Nothing is mutated once the directory that
//! owns it has been rendered.
//!
//! Capture times are always an explicit `Option<CaptureTime>`. "No date" is
//! never encoded as a magic timestamp, so it cannot be confused with a real
//! calendar date during merging or sorting.

use serde::Serialize;

/// Timestamp a photo was taken, with the UTC offset it was recorded in.
pub type CaptureTime = chrono::DateTime<chrono::FixedOffset>;

/// A generated, scaled-down copy of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    /// File name inside the album's output directory.
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// One processed image file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    /// Original file name; the full-size copy keeps it unchanged.
    pub name: String,
    pub thumbnail: Thumbnail,
    /// Absent when the file carried no readable capture time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_time: Option<CaptureTime>,
}

/// Summary of one directory and everything below it.
///
/// `num_images` counts direct images plus the images of every non-empty
/// subalbum. An album with zero images always has both bounds absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    pub name: String,
    pub num_images: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time: Option<CaptureTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<CaptureTime>,
}

impl Album {
    /// An album with no images and no time bounds yet.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_images: 0,
            min_time: None,
            max_time: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_images == 0
    }

    /// Fold a finished subalbum into this running summary.
    pub fn merge_subalbum(&mut self, sub: &Album) {
        self.num_images += sub.num_images;
        self.min_time = earlier(self.min_time, sub.min_time);
        self.max_time = later(self.max_time, sub.max_time);
    }

    /// Fold one direct image into this running summary.
    pub fn merge_image(&mut self, image: &Image) {
        self.num_images += 1;
        self.min_time = earlier(self.min_time, image.capture_time);
        self.max_time = later(self.max_time, image.capture_time);
    }
}

/// The earlier of two optional bounds. An absent side never narrows a present one.
pub fn earlier(a: Option<CaptureTime>, b: Option<CaptureTime>) -> Option<CaptureTime> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// The later of two optional bounds. An absent side never narrows a present one.
pub fn later(a: Option<CaptureTime>, b: Option<CaptureTime>) -> Option<CaptureTime> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}
