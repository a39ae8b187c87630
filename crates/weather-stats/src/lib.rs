//! Batch weather-map statistics: configuration and the run driver.

pub mod batch;
pub mod config;

pub use batch::{run, RunSummary};
pub use config::Config;
