//! CLI output formatting for the finished build.
//!
//! A build reports exactly one thing on stdout: the summary of the root
//! album. Progress and diagnostics go through `log` to stderr, so stdout
//! stays machine-readable when `--json` is used.
//!
//! # Output Format
//!
//! ```text
//! Album photos has 3 image(s) from between 2020-01-01 08:00:00 +00:00 and 2020-01-05 10:00:00 +00:00
//! Album empty has 0 image(s), dates n/a
//! ```
//!
//! With `--json`:
//!
//! ```text
//! {
//!   "name": "photos",
//!   "num_images": 3,
//!   "min_time": "2020-01-01T08:00:00+00:00",
//!   "max_time": "2020-01-05T10:00:00+00:00"
//! }
//! ```
//!
//! # Architecture
//!
//! `format_*` functions are pure and return the text; `print_*` wrappers
//! write it to stdout.

use crate::datetime::time_to_display_string;
use crate::types::Album;

/// One-line summary of an album.
pub fn format_summary(album: &Album) -> String {
    if album.min_time.is_none() && album.max_time.is_none() {
        return format!(
            "Album {} has {} image(s), dates n/a",
            album.name, album.num_images
        );
    }
    format!(
        "Album {} has {} image(s) from between {} and {}",
        album.name,
        album.num_images,
        time_to_display_string(album.min_time),
        time_to_display_string(album.max_time)
    )
}

/// Pretty-printed JSON of an album summary. Absent times are omitted.
pub fn format_json(album: &Album) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(album)
}

pub fn print_summary(album: &Album) {
    println!("{}", format_summary(album));
}

pub fn print_json(album: &Album) -> Result<(), serde_json::Error> {
    println!("{}", format_json(album)?);
    Ok(())
}
