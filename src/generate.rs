//! HTML index generation.
//!
//! Writes one `index.html` per non-empty album directory. The page is a
//! pure function of the album summary, its sorted subalbums and its sorted
//! direct images; [`render_index`] builds it without touching the
//! filesystem and [`render`] persists it.
//!
//! ## Page Layout
//!
//! ```text
//! Trip                                  ← album name
//! 12 images in this album and subalbums.
//! Day one (5 images, 2020-01-01)        ← one line per subalbum
//! Day two (4 images, 2020-01-02 - 2020-01-03)
//! Dates: 2020-01-04, Unknown Date       ← only with more than one group
//! 2020-01-04                            ← one heading per date group
//!   [thumb] [thumb]
//! Unknown Date
//!   [thumb]
//! ```
//!
//! Every thumbnail links to the full-size copy in the same directory, and
//! every subalbum links to its own `index.html`. Link targets are
//! percent-encoded path segments; visible text keeps the raw name.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! a malformed template is a build error rather than a runtime failure, and
//! every album or file name is escaped automatically.

use crate::datetime::{date_range_string, time_to_display_string};
use crate::order::group_by_date;
use crate::types::{Album, Image};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of every generated page.
pub const INDEX_FILE_NAME: &str = "index.html";

const CSS: &str = ".img-link { text-decoration: none; }";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Couldn't write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render and write `index.html` into `output_dir`.
///
/// Expects `sub_albums` and `images` to already be in display order.
pub fn render(
    album: &Album,
    sub_albums: &[Album],
    images: &[Image],
    output_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let path = output_dir.join(INDEX_FILE_NAME);
    let page = render_index(album, sub_albums, images);
    fs::write(&path, page.into_string()).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Build the index page markup.
pub fn render_index(album: &Album, sub_albums: &[Album], images: &[Image]) -> Markup {
    let groups = group_by_date(images);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { (album.name) }
                meta charset="utf-8";
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { (album.name) }
                p { (album.num_images) " images in this album and subalbums." }
                @for sub in sub_albums {
                    (subalbum_entry(sub))
                    br;
                }
                @if groups.len() > 1 {
                    p.dates {
                        "Dates: "
                        @for (i, group) in groups.iter().enumerate() {
                            @if i > 0 { ", " }
                            a href={ "#" (group.anchor()) } { (group.label()) }
                        }
                    }
                }
                @for group in &groups {
                    h2 id=(group.anchor()) { (group.label()) }
                    @for image in &group.images {
                        (image_entry(image))
                    }
                }
            }
        }
    }
}

/// One relative URL path segment for a file or directory name.
fn url_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

fn subalbum_entry(sub: &Album) -> Markup {
    html! {
        a href={ (url_segment(&sub.name)) "/" (INDEX_FILE_NAME) } { (sub.name) }
        " (" (sub.num_images) " images, " (date_range_string(sub.min_time, sub.max_time)) ")"
    }
}

fn image_entry(image: &Image) -> Markup {
    html! {
        a.img-link href=(url_segment(&image.name)) {
            img src=(url_segment(&image.thumbnail.name))
                alt=(image.name)
                title={ (time_to_display_string(image.capture_time)) " " (image.name) }
                width=(image.thumbnail.width)
                height=(image.thumbnail.height);
        }
    }
}
