//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions of a proportional downscale.
///
/// Each edge is multiplied by `factor` and truncated toward zero, so a
/// 310×150 source at 0.375 becomes 116×56. An edge never drops below one
/// pixel: encoders reject empty images.
///
/// # Examples
/// ```
/// # use uwp_assets::imaging::scaled_dimensions;
/// assert_eq!(scaled_dimensions((176, 176), 0.25), (44, 44));
/// assert_eq!(scaled_dimensions((310, 150), 0.375), (116, 56));
/// ```
pub fn scaled_dimensions(source: (u32, u32), factor: f64) -> (u32, u32) {
    let (w, h) = source;
    let scale = |edge: u32| ((edge as f64 * factor) as u32).max(1);
    (scale(w), scale(h))
}
