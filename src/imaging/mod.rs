//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Capture time** | `kamadak-exif` (EXIF `DateTimeOriginal` → `DateTime`) |
//! | **Thumbnail** | `image` decode + Lanczos3 `resize_exact` + JPEG encode |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining naming, bounds and backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::calculate_bounded_dimensions;
pub use operations::{
    MAX_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_WIDTH, ThumbnailConfig, create_thumbnail,
};
pub use params::{Quality, ThumbnailParams};
pub use rust_backend::RustBackend;
