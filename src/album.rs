//! Recursive album building.
//!
//! Walks the input tree depth-first and mirrors it into the output tree,
//! pruned of every branch that holds no images:
//!
//! ```text
//! photos/                          album/
//! ├── a.jpg                        ├── index.html      (root: 3 images)
//! ├── b.jpg                        ├── a.jpg, a_thumbnail.jpg
//! ├── notes.txt        ──────►     ├── b.jpg, b_thumbnail.jpg
//! ├── empty/                       └── sub/
//! │   └── readme.txt                   ├── index.html  (sub: 1 image)
//! └── sub/                             └── c.jpg, c_thumbnail.jpg
//!     └── c.jpg
//! ```
//!
//! For every directory, subdirectories are built first. A subalbum with no
//! images is dropped entirely; every other one is appended to the subalbum
//! list and folded into the running [`Album`] summary. The directory's own
//! images are then processed concurrently (see [`crate::process`]) and
//! folded in as well. Both lists are put into display order and the index
//! page is written last, so a page only ever describes finished subalbums.
//!
//! Directories are handled strictly one at a time; the only concurrency is
//! among the images of the directory currently being built.
//!
//! Every I/O failure aborts the build and is returned with the offending
//! path. There is no partial-output recovery: a failed build is simply
//! re-run from scratch.

use crate::generate::{self, GenerateError};
use crate::imaging::ImageBackend;
use crate::naming::is_image_file;
use crate::order::{sort_albums, sort_images};
use crate::process::{ProcessError, process_all};
use crate::types::Album;
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("Couldn't read dir {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't make output dir {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Entries of one input directory that take part in the build.
#[derive(Debug, Default)]
struct DirEntries {
    subdirs: Vec<OsString>,
    images: Vec<String>,
}

/// Build the album for `input_dir` into `output_dir`, recursively.
///
/// Returns the summary of the whole subtree. An empty summary means nothing
/// was written for this directory.
pub fn build_album(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Album, AlbumError> {
    let mut album = Album::empty(album_name(input_dir));
    let entries = collect_entries(input_dir)?;

    let mut sub_albums = Vec::new();
    for name in &entries.subdirs {
        let sub = build_album(backend, &input_dir.join(name), &output_dir.join(name))?;
        if sub.is_empty() {
            debug!("Skipping empty directory {}", input_dir.join(name).display());
            continue;
        }
        album.merge_subalbum(&sub);
        sub_albums.push(sub);
    }

    if !entries.images.is_empty() {
        info!(
            "Processing {} ({} images)",
            input_dir.display(),
            entries.images.len()
        );
        create_output_dir(output_dir)?;
    }

    let mut images = process_all(backend, input_dir, &entries.images, output_dir)?;
    for image in &images {
        album.merge_image(image);
    }

    if album.is_empty() {
        return Ok(album);
    }

    sort_images(&mut images);
    sort_albums(&mut sub_albums);

    // Subalbums already created their own directories, so this only matters
    // when the directory has no images of its own
    create_output_dir(output_dir)?;
    let index = generate::render(&album, &sub_albums, &images, output_dir)?;
    info!("Wrote {} ({} images)", index.display(), album.num_images);

    Ok(album)
}

/// Display name of the album built from `dir`: its last path component.
pub fn album_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}

fn create_output_dir(path: &Path) -> Result<(), AlbumError> {
    fs::create_dir_all(path).map_err(|source| AlbumError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// List subdirectories and image files of `dir`, both sorted by name.
fn collect_entries(dir: &Path) -> Result<DirEntries, AlbumError> {
    let read_err = |source: std::io::Error| AlbumError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = DirEntries::default();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        let name = entry.file_name();

        if file_type.is_dir() {
            entries.subdirs.push(name);
            continue;
        }
        match name.into_string() {
            Ok(name) if is_image_file(&name) => entries.images.push(name),
            Ok(_) => {}
            Err(name) => warn!(
                "Skipping file with non-UTF-8 name {}",
                dir.join(name).display()
            ),
        }
    }

    entries.subdirs.sort();
    entries.images.sort();
    Ok(entries)
}
