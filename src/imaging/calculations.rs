//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Fit `source` inside a `max` bounding box, preserving aspect ratio.
///
/// Images that already fit are left at their original size. Otherwise the
/// width is scaled down first, then the height if it still exceeds its
/// bound, so whichever constraint binds first wins. Neither edge drops
/// below one pixel.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `max` - Maximum thumbnail dimensions (width, height)
///
/// # Examples
/// ```
/// # use photo_album::imaging::calculate_bounded_dimensions;
/// // 3000x2000 landscape into 300x400 → width binds
/// assert_eq!(calculate_bounded_dimensions((3000, 2000), (300, 400)), (300, 200));
///
/// // 2000x4000 portrait into 300x400 → height binds
/// assert_eq!(calculate_bounded_dimensions((2000, 4000), (300, 400)), (200, 400));
/// ```
pub fn calculate_bounded_dimensions(source: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = max;

    if src_w <= max_w && src_h <= max_h {
        return (src_w, src_h);
    }

    let (mut w, mut h) = (src_w, src_h);

    if w > max_w {
        h = scale(src_h, max_w, src_w);
        w = max_w;
    }
    if h > max_h {
        w = scale(w, max_h, h);
        h = max_h;
    }

    (w, h)
}

/// `value * numerator / denominator` in 64-bit integer math, floored at 1.
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator.max(1));
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}
