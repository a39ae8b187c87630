//! Rendering accumulated counters back into raster heatmaps.

use rayon::prelude::*;

use raster::{unpack, PixelBuffer, RasterResult};

use crate::ramp::ColorRamp;

/// Divisor aligning per-pixel averages with the overall array's weighting.
const OVERALL_WEIGHT: f32 = 4.0;

/// Render per-pixel counters as a false-color frequency heatmap.
///
/// Each pixel's normalized average `count / 4 / analyzed` is scaled by
/// `multiplier` and mapped through `ramp`; pixels with no signal get the
/// ramp's floor color. Rows are independent and rendered in parallel.
pub fn render_frequency(
    counts: &[u32],
    width: u32,
    height: u32,
    analyzed: u32,
    multiplier: f32,
    ramp: &ColorRamp,
) -> RasterResult<PixelBuffer> {
    let mut buffer = PixelBuffer::new(width, height, 3)?;
    let stride = buffer.stride();
    let w = width as usize;

    buffer
        .data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..w {
                let count = counts[y * w + x];
                let average = count as f32 / OVERALL_WEIGHT / analyzed as f32 * multiplier;
                let color = if average > 0.0 {
                    ramp.map(average)
                } else {
                    ramp.floor_color()
                };
                let (b, g, r) = unpack(color);
                let ofs = x * 3;
                row[ofs] = b;
                row[ofs + 1] = g;
                row[ofs + 2] = r;
            }
        });

    Ok(buffer)
}

/// Render a binary mask raster: white where `counts` is non-zero, black
/// elsewhere. Returns the buffer and the number of non-zero pixels.
pub fn render_binary(counts: &[u32], width: u32, height: u32) -> RasterResult<(PixelBuffer, usize)> {
    let mut buffer = PixelBuffer::new(width, height, 3)?;
    let stride = buffer.stride();
    let w = width as usize;
    let mut hits = 0usize;

    for (y, row) in buffer.data_mut().chunks_mut(stride).enumerate() {
        for x in 0..w {
            if counts[y * w + x] > 0 {
                hits += 1;
                let ofs = x * 3;
                row[ofs] = 0xFF;
                row[ofs + 1] = 0xFF;
                row[ofs + 2] = 0xFF;
            }
        }
    }

    Ok((buffer, hits))
}
