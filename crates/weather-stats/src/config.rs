//! Command-line configuration for a statistics run.

use std::path::PathBuf;

use clap::Parser;

/// Accumulate per-pixel frequency statistics over a directory of weather
/// map images and render them as false-color heatmaps.
#[derive(Parser, Debug, Clone)]
#[command(name = "weather-stats")]
#[command(about = "Weather map frequency statistics and heatmap renderer")]
pub struct Config {
    /// Directory of input map images (jpg/jpeg/png)
    pub imgdir: PathBuf,

    /// Output directory for the rendered heatmaps
    pub outdir: PathBuf,

    /// Background map image multiplied under the overall/wind heatmaps
    #[arg(long)]
    pub bg: Option<PathBuf>,

    /// Mask image added to every input before analysis; also selects the
    /// masked classifier calibration
    #[arg(long)]
    pub mask: Option<PathBuf>,

    /// Log file name (default: console)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Overall heatmap multiplier; zero or negative selects auto-scaling
    #[arg(long, default_value_t = 0.0)]
    pub mult: f32,

    /// Wind heatmap multiplier; zero or negative selects auto-scaling
    #[arg(long, default_value_t = 0.0)]
    pub windmult: f32,

    /// JPEG output quality
    #[arg(long, default_value_t = 99)]
    pub quality: u8,

    /// Mirror the enhanced copy of each input into this directory
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_positionals_required() {
        assert!(Config::try_parse_from(["weather-stats"]).is_err());
        assert!(Config::try_parse_from(["weather-stats", "in"]).is_err());
        assert!(Config::try_parse_from(["weather-stats", "in", "out"]).is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["weather-stats", "in", "out"]).unwrap();
        assert_eq!(config.quality, 99);
        assert_eq!(config.mult, 0.0);
        assert_eq!(config.windmult, 0.0);
        assert_eq!(config.log_level, "info");
        assert!(config.bg.is_none());
        assert!(config.mask.is_none());
        assert!(config.preview.is_none());
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(Config::try_parse_from(["weather-stats", "in", "out", "--frobnicate", "1"]).is_err());
    }

    #[test]
    fn test_option_value_missing_rejected() {
        assert!(Config::try_parse_from(["weather-stats", "in", "out", "--mask"]).is_err());
    }
}
