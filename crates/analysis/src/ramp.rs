//! Piecewise-linear color ramp over packed colors.

use raster::PackedColor;
use thiserror::Error;

/// Float tolerance for the exact-match short-circuit.
const VALUE_EPSILON: f32 = 1e-6;

#[derive(Debug, Error)]
pub enum RampError {
    #[error("Color ramp needs at least two control points, got {0}")]
    TooFewPoints(usize),

    #[error("Control point values must be strictly increasing at index {0}")]
    NotAscending(usize),
}

/// One vertex of the ramp: a normalized value and its packed color.
#[derive(Debug, Clone, Copy)]
pub struct ControlPoint {
    pub value: f32,
    pub color: PackedColor,
}

impl ControlPoint {
    pub const fn new(value: f32, color: PackedColor) -> Self {
        Self { value, color }
    }
}

/// Ordered control points mapping a normalized scalar to a color.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    points: Vec<ControlPoint>,
}

impl ColorRamp {
    /// Build a ramp from at least two strictly ascending control points.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self, RampError> {
        if points.len() < 2 {
            return Err(RampError::TooFewPoints(points.len()));
        }
        for i in 1..points.len() {
            if points[i].value <= points[i - 1].value {
                return Err(RampError::NotAscending(i));
            }
        }
        Ok(Self { points })
    }

    /// The frequency ramp used for the rendered statistics:
    /// white → green → yellow → red → magenta.
    ///
    /// Colors are packed blue-first: the 0x00FFFF stop reads "yellow"
    /// because blue occupies the high byte, not because it is RGB cyan.
    pub fn frequency() -> Self {
        Self {
            points: vec![
                ControlPoint::new(0.00, 0xFFFFFF), // White.
                ControlPoint::new(0.25, 0x00FF00), // Green.
                ControlPoint::new(0.50, 0x00FFFF), // Yellow.
                ControlPoint::new(0.75, 0x0000FF), // Red.
                ControlPoint::new(1.00, 0xFF00FF), // Magenta.
            ],
        }
    }

    /// Color of the first control point, used for "no signal" pixels.
    pub fn floor_color(&self) -> PackedColor {
        self.points[0].color
    }

    /// Map a normalized value to an interpolated color.
    ///
    /// Exact control-point hits return that point's color directly;
    /// values outside the control range clamp to the end colors.
    /// Interpolated channels truncate toward zero, they are not rounded.
    pub fn map(&self, value: f32) -> PackedColor {
        for point in &self.points {
            if (value - point.value).abs() <= VALUE_EPSILON {
                return point.color;
            }
        }
        if value < self.points[0].value {
            return self.points[0].color;
        }

        let mut low_value = self.points[0].value;
        let mut low_color = self.points[0].color;
        for point in &self.points {
            if value < point.value {
                let frac = (value - low_value) / (point.value - low_value);
                return interpolate(low_color, point.color, frac);
            }
            low_value = point.value;
            low_color = point.color;
        }
        self.points[self.points.len() - 1].color
    }
}

/// Channel-wise linear blend between two packed colors.
fn interpolate(low: PackedColor, high: PackedColor, frac: f32) -> PackedColor {
    lerp_channel(low, high, 16, frac) | lerp_channel(low, high, 8, frac) | lerp_channel(low, high, 0, frac)
}

/// Blend one 8-bit channel, truncating `delta * frac` toward zero.
fn lerp_channel(low: PackedColor, high: PackedColor, shift: u32, frac: f32) -> PackedColor {
    let lo = ((low >> shift) & 0xFF) as i32;
    let hi = ((high >> shift) & 0xFF) as i32;
    let mixed = ((hi - lo) as f32 * frac) as i32 + lo;
    ((mixed & 0xFF) as u32) << shift
}
