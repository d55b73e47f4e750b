//! # Photo Album
//!
//! Turns a directory tree of JPEG photos into a browsable static HTML album.
//! The filesystem is the data source: every directory holding images, directly
//! or further down, becomes an album page, and the output tree mirrors the
//! input tree minus the branches without images.
//!
//! # Architecture: One Recursive Pass
//!
//! ```text
//! build_album(dir)
//!   ├── build_album(sub) for every subdirectory, in name order
//!   ├── process images of dir concurrently   (thumbnail + EXIF date + copy)
//!   ├── fold subalbums and images into one Album summary
//!   └── render dir/index.html                (only when the tree is non-empty)
//! ```
//!
//! Directories are processed one after the other; only the images of a single
//! directory are worked on in parallel, on the global rayon pool. A summary
//! flows upward only once its directory is finished, so a parent's page never
//! describes a half-built subalbum.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`album`] | Recursive traversal, aggregation and pruning of empty directories |
//! | [`process`] | Per-image work and the per-directory concurrent fan-out |
//! | [`imaging`] | EXIF capture time and thumbnail primitives behind [`imaging::ImageBackend`] |
//! | [`order`] | Deterministic display order and date grouping |
//! | [`generate`] | `index.html` rendering with Maud |
//! | [`datetime`] | Display strings for optional capture times |
//! | [`naming`] | Image-file recognition and thumbnail file names |
//! | [`types`] | `Image`, `Thumbnail`, `Album` and bound merging |
//! | [`config`] | Run configuration and worker-count resolution |
//! | [`output`] | Final summary line and JSON |
//!
//! # Design Decisions
//!
//! ## Absent Dates Are Explicit
//!
//! Capture times are `Option<CaptureTime>` throughout. An image without EXIF
//! data never gets a sentinel date, so min/max bounds and sort order are
//! never skewed by a fake timestamp. Undated entries sort after dated ones.
//!
//! ## Deterministic Output
//!
//! Workers finish in arbitrary order, so images and subalbums are sorted
//! (time, then name) before rendering. Two builds of the same input produce
//! byte-identical pages.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling, JPEG
//! encoding) and `kamadak-exif`. No system libraries are required.

pub mod album;
pub mod config;
pub mod datetime;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod order;
pub mod output;
pub mod process;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
