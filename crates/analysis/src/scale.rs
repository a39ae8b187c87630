//! Auto-scaling of heatmap multipliers.

use tracing::debug;

/// Divisor aligning per-pixel averages with the overall array's weighting.
const OVERALL_WEIGHT: f32 = 4.0;

/// Compute the multiplier that maps the hottest pixel to 1.0.
///
/// The per-pixel average is `count / 4 / analyzed`, the same scale the
/// renderer uses for every counter array. An all-zero array or an empty
/// run yields 1.0 — never a division by zero.
pub fn auto_scale(counts: &[u32], analyzed: u32, width: u32) -> f32 {
    if analyzed == 0 {
        return 1.0;
    }

    let mut max_average = 0.0f32;
    let mut max_offset = 0usize;
    for (offset, &count) in counts.iter().enumerate() {
        let average = count as f32 / OVERALL_WEIGHT / analyzed as f32;
        if average > max_average {
            max_average = average;
            max_offset = offset;
        }
    }

    if max_average <= 0.0 {
        return 1.0;
    }

    let multiplier = 1.0 / max_average;
    debug!(
        max_average,
        x = max_offset % width as usize,
        y = max_offset / width as usize,
        multiplier,
        "Auto-scaled"
    );
    multiplier
}
