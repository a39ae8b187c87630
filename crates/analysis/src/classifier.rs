//! Decision-tree color classifier for weather-map pixels.
//!
//! Maps one packed color to a semantic category using fixed channel
//! difference thresholds. Two calibrations exist: the standard one for
//! raw inputs, and a wider one for runs where a correction mask has been
//! blended into every input (the mask shifts all channels, so its
//! thresholds are looser).

use raster::{unpack, PackedColor};

/// Semantic category of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Land (grayscale) or sea (light blue) — no weather signal.
    Background,
    /// Dark blue wind zone.
    Wind,
    Red,
    Yellow,
    Green,
    /// Mixed or border colors no branch claims.
    Unparsed,
}

/// Threshold calibration, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibration {
    /// Raw inputs.
    Unmasked,
    /// Inputs with a correction mask blended in.
    Masked,
}

/// Channel-difference thresholds bound to a classifier at construction.
#[derive(Debug, Clone, Copy)]
struct Thresholds {
    /// Max pairwise channel difference still counted as grayscale (land).
    gray_delta: i32,
    /// Wind test: minimum b-g excess.
    wind_blue_green: i32,
    /// Wind test: minimum b-r excess.
    wind_blue_red: i32,
    /// Whether the dark-blue border sub-case also counts as wind.
    wind_border: bool,
    /// Warm test: minimum r-b excess, and r-g for the red sub-split.
    warm_delta: i32,
    /// Green test: minimum g-b excess.
    green_blue: i32,
    /// Green test: minimum g-r excess.
    green_red: i32,
}

const UNMASKED: Thresholds = Thresholds {
    gray_delta: 16,
    wind_blue_green: 20,
    wind_blue_red: 32,
    wind_border: true,
    warm_delta: 64,
    green_blue: 8,
    green_red: 24,
};

const MASKED: Thresholds = Thresholds {
    gray_delta: 32,
    wind_blue_green: 50,
    wind_blue_red: 50,
    wind_border: false,
    warm_delta: 80,
    green_blue: 32,
    green_red: 32,
};

/// Per-pixel classifier with its thresholds bound at construction.
#[derive(Debug, Clone)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(calibration: Calibration) -> Self {
        let thresholds = match calibration {
            Calibration::Unmasked => UNMASKED,
            Calibration::Masked => MASKED,
        };
        Self { thresholds }
    }

    /// Classify one packed color.
    ///
    /// Branch order is significant: the ranges are not mutually exclusive
    /// and the first matching test wins.
    pub fn classify(&self, color: PackedColor) -> Category {
        let t = &self.thresholds;
        let (b, g, r) = unpack(color);
        let (b, g, r) = (b as i32, g as i32, r as i32);

        // Grayscale is background (land).
        if (r - g).abs() <= t.gray_delta
            && (r - b).abs() <= t.gray_delta
            && (g - b).abs() <= t.gray_delta
        {
            return Category::Background;
        }
        // Light blue is background (sea).
        if g > 248 && b > 248 && r > 200 {
            return Category::Background;
        }
        // Dark blue is a wind zone; the unmasked calibration also claims
        // its darker border colors.
        if (b - g > t.wind_blue_green && b - r > t.wind_blue_red)
            || (t.wind_border && r < 16 && g < 64 && b > 100)
        {
            return Category::Wind;
        }
        if r - b > t.warm_delta {
            return if r - g > t.warm_delta {
                Category::Red
            } else {
                Category::Yellow
            };
        }
        if g - b > t.green_blue && g - r > t.green_red {
            return Category::Green;
        }
        // Mixed colors on borders, or something unexpected.
        Category::Unparsed
    }
}
