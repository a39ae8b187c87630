//! Tests for the pixel classifier decision tree.

use analysis::{Calibration, Category, Classifier};
use raster::pack;

// ============================================================================
// Background tests
// ============================================================================

#[test]
fn test_exact_gray_is_background_in_both_calibrations() {
    for calibration in [Calibration::Unmasked, Calibration::Masked] {
        let classifier = Classifier::new(calibration);
        for level in [0u8, 1, 15, 16, 17, 127, 200, 254, 255] {
            assert_eq!(
                classifier.classify(pack(level, level, level)),
                Category::Background,
                "gray level {} not background under {:?}",
                level,
                calibration
            );
        }
    }
}

#[test]
fn test_near_gray_threshold_differs_between_calibrations() {
    // Channel spread of 24 is inside the masked gray band (32) but
    // outside the unmasked one (16).
    let color = pack(100, 124, 112);
    assert_eq!(
        Classifier::new(Calibration::Masked).classify(color),
        Category::Background
    );
    assert_ne!(
        Classifier::new(Calibration::Unmasked).classify(color),
        Category::Background
    );
}

#[test]
fn test_light_blue_sea_is_background() {
    let classifier = Classifier::new(Calibration::Unmasked);
    // g > 248, b > 248, r > 200 but channel spread beyond the gray band.
    assert_eq!(
        classifier.classify(pack(255, 255, 210)),
        Category::Background
    );
}

// ============================================================================
// Wind tests
// ============================================================================

#[test]
fn test_dark_blue_is_wind() {
    let classifier = Classifier::new(Calibration::Unmasked);
    // b - g = 100 > 20, b - r = 150 > 32.
    assert_eq!(classifier.classify(pack(200, 100, 50)), Category::Wind);
}

#[test]
fn test_wind_border_only_in_unmasked_calibration() {
    // r < 16, g < 64, b > 100, but too shallow for the masked wind test
    // (b - g = 45 <= 50).
    let color = pack(105, 60, 10);
    assert_eq!(
        Classifier::new(Calibration::Unmasked).classify(color),
        Category::Wind
    );
    assert_eq!(
        Classifier::new(Calibration::Masked).classify(color),
        Category::Unparsed
    );
}

#[test]
fn test_masked_wind_needs_deeper_blue() {
    // b - g = 30, b - r = 40: wind under unmasked thresholds (20/32),
    // not under masked ones (50/50).
    let color = pack(180, 150, 140);
    assert_eq!(
        Classifier::new(Calibration::Unmasked).classify(color),
        Category::Wind
    );
    assert_ne!(
        Classifier::new(Calibration::Masked).classify(color),
        Category::Wind
    );
}

// ============================================================================
// Branch order tests
// ============================================================================

#[test]
fn test_wind_wins_over_warm_reading_of_the_same_bytes() {
    // 0xFF4000 satisfies the wind predicate on the blue-first channel
    // mapping and the warm predicate if the bytes were misread as RGB.
    // It must resolve to Wind under both calibrations.
    for calibration in [Calibration::Unmasked, Calibration::Masked] {
        assert_eq!(
            Classifier::new(calibration).classify(0xFF4000),
            Category::Wind,
            "under {:?}",
            calibration
        );
    }
}

#[test]
fn test_warm_wins_over_green_in_the_overlap_band() {
    // (b, g, r) = (100, 230, 200) satisfies both the yellow branch
    // (r - b = 100 > 64, r - g = -30 <= 64) and the green branch
    // (g - b = 130 > 8, g - r = 30 > 24); the warm test runs first.
    let classifier = Classifier::new(Calibration::Unmasked);
    assert_eq!(classifier.classify(pack(100, 230, 200)), Category::Yellow);
}

// ============================================================================
// Warm and green tests
// ============================================================================

#[test]
fn test_red_area() {
    let classifier = Classifier::new(Calibration::Unmasked);
    // r - b = 230 > 64 and r - g = 180 > 64.
    assert_eq!(classifier.classify(pack(10, 60, 240)), Category::Red);
}

#[test]
fn test_yellow_area() {
    let classifier = Classifier::new(Calibration::Unmasked);
    // r - b = 230 > 64 but r - g = 20 <= 64.
    assert_eq!(classifier.classify(pack(10, 220, 240)), Category::Yellow);
}

#[test]
fn test_green_area() {
    let classifier = Classifier::new(Calibration::Unmasked);
    // g - b = 120 > 8, g - r = 120 > 24, no warm or wind match.
    assert_eq!(classifier.classify(pack(80, 200, 80)), Category::Green);
}

#[test]
fn test_masked_warm_threshold_wider() {
    // r - b = r - g = 70: red under unmasked (64), not warm at all
    // under masked (80).
    let color = pack(100, 100, 170);
    assert_eq!(
        Classifier::new(Calibration::Unmasked).classify(color),
        Category::Red
    );
    assert_ne!(
        Classifier::new(Calibration::Masked).classify(color),
        Category::Red
    );
}

#[test]
fn test_masked_green_threshold_wider() {
    // g - b = g - r = 30: green under unmasked (8/24), background under
    // masked since the spread sits inside its gray band (32).
    let color = pack(100, 130, 100);
    assert_eq!(
        Classifier::new(Calibration::Unmasked).classify(color),
        Category::Green
    );
    assert_eq!(
        Classifier::new(Calibration::Masked).classify(color),
        Category::Background
    );
}

// ============================================================================
// Unparsed fallback
// ============================================================================

#[test]
fn test_mixed_border_color_is_unparsed() {
    let classifier = Classifier::new(Calibration::Unmasked);
    // Spread too wide for gray, too shallow for every signal branch:
    // b - g = 20 (not > 20), r - b = 20, g - b = -20.
    assert_eq!(classifier.classify(pack(120, 100, 140)), Category::Unparsed);
}
