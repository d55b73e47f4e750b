//! Canonical display order and date grouping.
//!
//! Concurrent processing returns images in whatever order the workers
//! finished, and directory listings are not trusted for order either. Before
//! anything is rendered or handed to a parent, the aggregator puts both lists
//! into one deterministic order:
//!
//! - **Images**: capture time ascending, then name.
//! - **Subalbums**: earliest capture time ascending, then name.
//!
//! Absent times sort after every present time. Two absent times are equal,
//! so undated entries fall back to name order among themselves.

use crate::datetime::{UNKNOWN_DATE, time_to_date_string};
use crate::types::{Album, CaptureTime, Image};
use std::cmp::Ordering;

/// Compare optional times with absent values last.
pub fn compare_times(a: Option<CaptureTime>, b: Option<CaptureTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort images into display order.
pub fn sort_images(images: &mut [Image]) {
    images.sort_by(|a, b| {
        compare_times(a.capture_time, b.capture_time).then_with(|| a.name.cmp(&b.name))
    });
}

/// Sort subalbums into display order.
pub fn sort_albums(albums: &mut [Album]) {
    albums.sort_by(|a, b| compare_times(a.min_time, b.min_time).then_with(|| a.name.cmp(&b.name)));
}

/// Images sharing one display date.
#[derive(Debug)]
pub struct DateGroup<'a> {
    /// Date string as produced by [`time_to_date_string`].
    pub date: String,
    pub images: Vec<&'a Image>,
}

impl DateGroup<'_> {
    /// Heading text for the group.
    pub fn label(&self) -> &str {
        if self.date == UNKNOWN_DATE {
            "Unknown Date"
        } else {
            &self.date
        }
    }

    /// Fragment identifier used to link to the group.
    pub fn anchor(&self) -> &str {
        if self.date == UNKNOWN_DATE {
            "unknown-date"
        } else {
            &self.date
        }
    }
}

/// Group already-sorted images by date string, in first-seen order.
///
/// Each distinct date yields exactly one group, even if its images are not
/// adjacent in the input.
pub fn group_by_date(images: &[Image]) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();
    for image in images {
        let date = time_to_date_string(image.capture_time);
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.images.push(image),
            None => groups.push(DateGroup {
                date,
                images: vec![image],
            }),
        }
    }
    groups
}
