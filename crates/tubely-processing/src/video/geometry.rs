use tubely_core::GeometryCategory;

const LANDSCAPE_RATIO: f64 = 16.0 / 9.0;
const PORTRAIT_RATIO: f64 = 9.0 / 16.0;
const RATIO_TOLERANCE: f64 = 0.2;

/// Map pixel dimensions to an aspect-ratio category.
///
/// Width-dominant (or square) frames are `Landscape` within tolerance of 16:9,
/// height-dominant frames are `Portrait` within tolerance of 9:16, and everything
/// else, including zero-sized frames, is `Other`.
pub fn classify_dimensions(width: u32, height: u32) -> GeometryCategory {
    if width == 0 || height == 0 {
        return GeometryCategory::Other;
    }

    let ratio = f64::from(width) / f64::from(height);

    if width >= height {
        if (ratio - LANDSCAPE_RATIO).abs() < RATIO_TOLERANCE {
            return GeometryCategory::Landscape;
        }
    } else if (ratio - PORTRAIT_RATIO).abs() < RATIO_TOLERANCE {
        return GeometryCategory::Portrait;
    }

    GeometryCategory::Other
}
