//! Decode/encode wrappers over the `image` crate.
//!
//! Decoding accepts 8-bit RGB and RGBA layouts only; anything else is
//! rejected rather than silently converted, since a reinterpreted layout
//! would skew every downstream classification. Encoding picks the
//! container from the file extension (`jpg`/`jpeg` honor the quality
//! hint, `png` ignores it).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage, ImageEncoder};
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::{RasterError, RasterResult};

/// Decode an image file into a blue-first [`PixelBuffer`].
pub fn decode(path: &Path) -> RasterResult<PixelBuffer> {
    let img = image::open(path).map_err(|source| RasterError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let buffer = match img {
        DynamicImage::ImageRgb8(rgb) => {
            let (width, height) = rgb.dimensions();
            let mut data = vec![0u8; width as usize * height as usize * 3];
            for (dst, src) in data.chunks_exact_mut(3).zip(rgb.pixels()) {
                dst[0] = src[2];
                dst[1] = src[1];
                dst[2] = src[0];
            }
            PixelBuffer::from_parts(data, width, height, width as usize * 3, 3)?
        }
        DynamicImage::ImageRgba8(rgba) => {
            let (width, height) = rgba.dimensions();
            let mut data = vec![0u8; width as usize * height as usize * 4];
            for (dst, src) in data.chunks_exact_mut(4).zip(rgba.pixels()) {
                dst[0] = src[2];
                dst[1] = src[1];
                dst[2] = src[0];
                dst[3] = src[3];
            }
            PixelBuffer::from_parts(data, width, height, width as usize * 4, 4)?
        }
        other => {
            return Err(RasterError::UnsupportedLayout {
                layout: format!("{:?}", other.color()),
                path: path.to_path_buf(),
            })
        }
    };

    debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        stride = buffer.stride(),
        bytes_per_pixel = buffer.bytes_per_pixel(),
        "Decoded bitmap"
    );
    Ok(buffer)
}

/// Encode a buffer to `path`, format chosen by extension.
///
/// The alpha byte of 4-byte buffers is dropped and row padding skipped;
/// output is always 8-bit RGB.
pub fn encode(buffer: &PixelBuffer, path: &Path, quality: u8) -> RasterResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !matches!(ext.as_str(), "jpg" | "jpeg" | "png") {
        return Err(RasterError::UnsupportedOutput {
            path: path.to_path_buf(),
        });
    }

    let rgb = to_rgb_bytes(buffer);
    let file = File::create(path).map_err(|source| RasterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);

    let encoded = match ext.as_str() {
        "jpg" | "jpeg" => JpegEncoder::new_with_quality(writer, quality).encode(
            &rgb,
            buffer.width(),
            buffer.height(),
            ColorType::Rgb8,
        ),
        _ => PngEncoder::new(writer).write_image(&rgb, buffer.width(), buffer.height(), ColorType::Rgb8),
    };
    encoded.map_err(|source| RasterError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), quality, "Encoded bitmap");
    Ok(())
}

/// Repack the blue-first buffer into tightly packed RGB rows.
fn to_rgb_bytes(buffer: &PixelBuffer) -> Vec<u8> {
    let width = buffer.width() as usize;
    let bpp = buffer.bytes_per_pixel();
    let mut rgb = Vec::with_capacity(width * buffer.height() as usize * 3);
    for row in buffer.data().chunks(buffer.stride()) {
        for px in row[..width * bpp].chunks(bpp) {
            rgb.push(px[2]);
            rgb.push(px[1]);
            rgb.push(px[0]);
        }
    }
    rgb
}
