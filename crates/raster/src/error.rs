//! Error types for raster handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RasterError.
pub type RasterResult<T> = Result<T, RasterError>;

/// Primary error type for buffer and codec operations.
#[derive(Debug, Error)]
pub enum RasterError {
    // === Buffer geometry errors ===
    #[error("Unsupported bytes per pixel: {0} (expected 3 or 4)")]
    UnsupportedDepth(usize),

    #[error("Stride {stride} too small for {width} pixels at {bytes_per_pixel} bytes per pixel")]
    StrideTooSmall {
        stride: usize,
        width: u32,
        bytes_per_pixel: usize,
    },

    #[error("Buffer length {len} does not match stride {stride} x height {height}")]
    LengthMismatch {
        len: usize,
        stride: usize,
        height: u32,
    },

    // === Codec errors ===
    #[error("Unsupported pixel layout {layout} - {path}")]
    UnsupportedLayout { layout: String, path: PathBuf },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Unsupported output format: {path}")]
    UnsupportedOutput { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
