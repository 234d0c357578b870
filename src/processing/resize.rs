//! Width-driven resize with preserved aspect ratio.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;
use crate::core::Dimensions;

/// Resampling filter used for every resize.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Dimensions an image of size `original` is scaled to for `target_width`.
///
/// Images no wider than the target keep their size; this never upscales.
/// Wider images get exactly `target_width` and a height of
/// `floor(height * target_width / width)`, computed in integer arithmetic so
/// it truncates rather than rounds. A height that truncates to 0 becomes 1.
pub fn target_dimensions(original: Dimensions, target_width: u32) -> Dimensions {
    if original.width <= target_width {
        return original;
    }

    let height = u64::from(original.height) * u64::from(target_width) / u64::from(original.width);
    // height <= original.height here, so the cast cannot truncate
    Dimensions::new(target_width, (height as u32).max(1))
}

/// Resamples `image` to `target`, or hands it back untouched if it already has that size.
pub fn apply_resize(image: DynamicImage, target: Dimensions) -> DynamicImage {
    if image.width() == target.width && image.height() == target.height {
        debug!("Keeping {}x{}, already within target width", target.width, target.height);
        return image;
    }

    image.resize_exact(target.width, target.height, FILTER)
}
