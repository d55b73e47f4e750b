//! File-name conventions for album inputs and outputs.
//!
//! ## Image Recognition
//!
//! A regular file is an image when its name ends in one of
//! [`IMAGE_SUFFIXES`]. The match is a plain, case-sensitive suffix test:
//! `DSC_0001.jpg` and `scan.jpeg` qualify, `IMG.JPG` does not.
//!
//! ## Thumbnail Names
//!
//! Thumbnails sit next to the full-size copy with a `_thumbnail` marker
//! inserted before the extension:
//! - `dawn.jpg` → `dawn_thumbnail.jpg`
//! - `2020.01.05.jpeg` → `2020.01.05_thumbnail.jpeg` (last dot wins)

/// Suffixes that mark a file as an image.
pub const IMAGE_SUFFIXES: &[&str] = &["jpeg", "jpg"];

/// Marker inserted between stem and extension of a thumbnail file.
pub const THUMBNAIL_MARKER: &str = "_thumbnail";

/// Whether a file name is picked up as an album image.
pub fn is_image_file(name: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Split a file name at its last dot into `(stem, ".ext")`.
///
/// Returns `None` for names without a dot.
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rfind('.').map(|dot| name.split_at(dot))
}

/// Thumbnail file name for an image, or `None` if the name has no extension.
pub fn thumbnail_name(image_name: &str) -> Option<String> {
    split_extension(image_name).map(|(stem, ext)| format!("{stem}{THUMBNAIL_MARKER}{ext}"))
}
