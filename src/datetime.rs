//! Display strings for optional capture times.
//!
//! Every function accepts an absent time and returns a fixed marker instead
//! of failing, so rendering never has to special-case undated images.

use crate::types::CaptureTime;

/// Shown in place of a full timestamp when an image has no capture time.
pub const UNKNOWN_TIME: &str = "???";

/// Date string of undated images; also the key of the "unknown date" group.
pub const UNKNOWN_DATE: &str = "???";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Full, unambiguous timestamp including the UTC offset.
///
/// ```
/// # use photo_album::datetime::time_to_display_string;
/// let t = chrono::DateTime::parse_from_rfc3339("2020-01-05T10:30:00+01:00").unwrap();
/// assert_eq!(time_to_display_string(Some(t)), "2020-01-05 10:30:00 +01:00");
/// assert_eq!(time_to_display_string(None), "???");
/// ```
pub fn time_to_display_string(t: Option<CaptureTime>) -> String {
    match t {
        Some(t) => t.format(DISPLAY_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Calendar date in the offset the photo was taken in.
pub fn time_to_date_string(t: Option<CaptureTime>) -> String {
    match t {
        Some(t) => t.format(DATE_FORMAT).to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Compact date range: `min - max`, or a single date when both ends fall on
/// the same day (or are both unknown).
pub fn date_range_string(min: Option<CaptureTime>, max: Option<CaptureTime>) -> String {
    let min = time_to_date_string(min);
    let max = time_to_date_string(max);
    if min == max {
        min
    } else {
        format!("{min} - {max}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::time;

    #[test]
    fn display_string_includes_offset() {
        let t = time("2020-01-05T10:30:15Z");
        assert_eq!(time_to_display_string(Some(t)), "2020-01-05 10:30:15 +00:00");
    }

    #[test]
    fn absent_time_uses_markers() {
        assert_eq!(time_to_display_string(None), UNKNOWN_TIME);
        assert_eq!(time_to_date_string(None), UNKNOWN_DATE);
    }

    #[test]
    fn date_string_uses_recorded_offset() {
        // 23:30 on Jan 5th in UTC-05:00 is Jan 6th in UTC; the photo's own day wins
        let t = time("2020-01-05T23:30:00-05:00");
        assert_eq!(time_to_date_string(Some(t)), "2020-01-05");
    }

    #[test]
    fn range_collapses_same_day() {
        let a = time("2020-01-01T08:00:00Z");
        let b = time("2020-01-01T20:00:00Z");
        assert_eq!(date_range_string(Some(a), Some(b)), "2020-01-01");
    }

    #[test]
    fn range_spans_different_days() {
        let a = time("2020-01-01T08:00:00Z");
        let b = time("2020-01-05T20:00:00Z");
        assert_eq!(date_range_string(Some(a), Some(b)), "2020-01-01 - 2020-01-05");
    }

    #[test]
    fn range_of_undated_album_is_single_marker() {
        assert_eq!(date_range_string(None, None), UNKNOWN_DATE);
    }
}
