//! Per-pixel arithmetic over whole buffers: layer blends and saturation.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;

/// ITU-R BT.601 luminance weights used by the saturation boost.
const LUMA_RED: f32 = 0.2989;
const LUMA_GREEN: f32 = 0.5870;
const LUMA_BLUE: f32 = 0.1140;

/// Additive layer blend: `dst[i] = min(255, dst[i] + src[i])`.
///
/// Runs over the overlapping byte length only; the longer buffer's tail
/// is left untouched. Used to combine a correction mask into a freshly
/// decoded image.
pub fn blend_add(dst: &mut PixelBuffer, src: &PixelBuffer) {
    let d = dst.data_mut();
    let s = src.data();
    let len = d.len().min(s.len());
    for (a, b) in d[..len].iter_mut().zip(&s[..len]) {
        *a = a.saturating_add(*b);
    }
}

/// Multiplicative layer blend: `dst[i] = min(255, (dst[i] * src[i]) >> 8)`.
///
/// Integer truncation only, no rounding correction. Used to composite a
/// rendered heatmap onto the background map.
pub fn blend_multiply(dst: &mut PixelBuffer, src: &PixelBuffer) {
    let d = dst.data_mut();
    let s = src.data();
    let len = d.len().min(s.len());
    for (a, b) in d[..len].iter_mut().zip(&s[..len]) {
        let mul = (*a as u32 * *b as u32) >> 8;
        *a = mul.min(255) as u8;
    }
}

/// Contrast stretch around each pixel's own BT.601 luminance.
///
/// Per channel `c' = round(c * (1 + boost) - gray * boost)`, clamped to
/// [0, 255]. Every pixel is processed independently from its own three
/// channels; alpha and padding bytes are untouched.
pub fn saturate(buf: &mut PixelBuffer, boost: f32) {
    let width = buf.width() as usize;
    let bpp = buf.bytes_per_pixel();
    let stride = buf.stride();

    buf.data_mut().par_chunks_mut(stride).for_each(|row| {
        for px in row[..width * bpp].chunks_mut(bpp) {
            let blue = px[0] as f32;
            let green = px[1] as f32;
            let red = px[2] as f32;
            let gray = LUMA_RED * red + LUMA_GREEN * green + LUMA_BLUE * blue;
            px[0] = stretch(blue, gray, boost);
            px[1] = stretch(green, gray, boost);
            px[2] = stretch(red, gray, boost);
        }
    });
}

#[inline]
fn stretch(channel: f32, gray: f32, boost: f32) -> u8 {
    (channel * (1.0 + boost) - gray * boost)
        .round()
        .clamp(0.0, 255.0) as u8
}
