//! Weather-map statistics CLI.
//!
//! Classifies every pixel of a directory of weather overlay images,
//! accumulates per-pixel category counts across the batch, and renders
//! the totals as false-color heatmaps.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::FmtSubscriber;

use weather_stats::{batch, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let (writer, ansi) = match &config.log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stdout), true),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let summary = batch::run(&config)?;
    info!(
        analyzed = summary.analyzed,
        outputs = summary.outputs.len(),
        "Run complete"
    );
    Ok(())
}
