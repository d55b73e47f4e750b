//! Per-image processing and the per-directory fan-out.
//!
//! ## Single Image
//!
//! [`process_image`] handles one source file:
//!
//! 1. Read the whole file into memory (fatal on failure).
//! 2. Extract the capture time. Failure only logs a warning; the image keeps
//!    an absent capture time and still appears in the album.
//! 3. Write `<stem>_thumbnail.<ext>`, bounded to 300x400 (fatal on failure).
//! 4. Copy the original bytes verbatim under the same name (fatal on failure).
//!
//! ## Fan-Out / Fan-In
//!
//! [`process_all`] runs one unit of work per image on the rayon pool and
//! blocks until every unit has reported. Units share nothing but the backend
//! and write disjoint files, so no locking is involved. The first fatal error
//! stops collection and becomes the error of the whole directory; results
//! come back in no particular order and callers sort them afterwards.
//!
//! ```text
//! input/trip/                     output/trip/
//! ├── dawn.jpg        ──────►     ├── dawn.jpg             (verbatim copy)
//! └── dusk.jpeg                   ├── dawn_thumbnail.jpg
//!                                 ├── dusk.jpeg
//!                                 └── dusk_thumbnail.jpeg
//! ```

use crate::imaging::{BackendError, ImageBackend, ThumbnailConfig, create_thumbnail};
use crate::naming::thumbnail_name;
use crate::types::Image;
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Couldn't read image {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't create thumbnail for image {}: {source}", .path.display())]
    Thumbnail { path: PathBuf, source: BackendError },
    #[error("Couldn't create copy {}: {source}", .path.display())]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Internal error: image name missing extension: {0}")]
    MissingExtension(String),
}

/// Generate a thumbnail, extract the capture time and copy one image.
pub fn process_image(
    backend: &impl ImageBackend,
    input_dir: &Path,
    image_name: &str,
    output_dir: &Path,
) -> Result<Image, ProcessError> {
    let image_path = input_dir.join(image_name);
    debug!("Processing {}", image_path.display());

    let bytes = fs::read(&image_path).map_err(|source| ProcessError::Read {
        path: image_path.clone(),
        source,
    })?;

    let capture_time = match backend.read_capture_time(&bytes) {
        Ok(Some(t)) => Some(t),
        Ok(None) => {
            warn!("No capture time in metadata of {}", image_path.display());
            None
        }
        Err(e) => {
            warn!(
                "Problem reading capture time for {}: {e}",
                image_path.display()
            );
            None
        }
    };

    // Callers only pass names ending in an image suffix, so a missing dot is a bug
    let thumb_name = thumbnail_name(image_name)
        .ok_or_else(|| ProcessError::MissingExtension(image_name.to_string()))?;
    let thumbnail = create_thumbnail(
        backend,
        &bytes,
        output_dir,
        &thumb_name,
        &ThumbnailConfig::default(),
    )
    .map_err(|source| ProcessError::Thumbnail {
        path: image_path.clone(),
        source,
    })?;

    let copy_path = output_dir.join(image_name);
    fs::write(&copy_path, &bytes).map_err(|source| ProcessError::Copy {
        path: copy_path,
        source,
    })?;

    Ok(Image {
        name: image_name.to_string(),
        thumbnail,
        capture_time,
    })
}

/// Process every named image of one directory concurrently.
///
/// Returns exactly one [`Image`] per name, in unspecified order.
pub fn process_all(
    backend: &impl ImageBackend,
    input_dir: &Path,
    image_names: &[String],
    output_dir: &Path,
) -> Result<Vec<Image>, ProcessError> {
    image_names
        .par_iter()
        .map(|name| process_image(backend, input_dir, name, output_dir))
        .collect()
}
