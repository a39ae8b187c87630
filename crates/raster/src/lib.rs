//! Raster primitives for weather-map analysis.
//!
//! Provides the in-memory pixel buffer shared by the whole pipeline,
//! per-pixel blend and enhancement operations, and thin decode/encode
//! wrappers over the `image` crate.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod ops;

pub use buffer::{pack, unpack, PackedColor, PixelBuffer};
pub use error::{RasterError, RasterResult};
