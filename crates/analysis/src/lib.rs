//! Pixel classification and accumulation for weather-map statistics.
//!
//! The pipeline in here:
//! - classify each pixel of a map overlay into a semantic category,
//! - accumulate per-pixel category counts across a whole batch,
//! - map normalized frequencies back to colors through a control-point
//!   ramp and render the totals as heatmap rasters.

pub mod accumulator;
pub mod classifier;
pub mod ramp;
pub mod render;
pub mod scale;

pub use accumulator::{CategoryCounters, FoldReport};
pub use classifier::{Calibration, Category, Classifier};
pub use ramp::{ColorRamp, ControlPoint, RampError};
