//! Batch driver: fold every matched image into the accumulator, then
//! render the aggregate statistics.
//!
//! Per image the pipeline is decode → optional mask blend → contrast
//! enhancement → optional preview save → fold. Reference images
//! (background, mask) load before batching and abort the run on failure;
//! a corrupt reference would silently skew every classification.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

use analysis::{render, scale, Calibration, CategoryCounters, Classifier, ColorRamp};
use raster::{codec, ops, PixelBuffer};

use crate::config::Config;

/// Contrast boost applied to every input before classification.
const SATURATION_BOOST: f32 = 2.0;

/// Extensions matched in the input directory: one name-sorted pass per
/// extension, concatenated in this order — not interleaved and not
/// globally sorted across extensions.
const INPUT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// What a completed run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub analyzed: u32,
    pub width: u32,
    pub height: u32,
    pub outputs: Vec<PathBuf>,
}

/// Execute a full run: load reference images, fold the batch, render.
pub fn run(config: &Config) -> Result<RunSummary> {
    if !config.imgdir.is_dir() {
        bail!("input directory {} does not exist", config.imgdir.display());
    }
    if let Some(preview_dir) = &config.preview {
        fs::create_dir_all(preview_dir)
            .with_context(|| format!("creating preview directory {}", preview_dir.display()))?;
    }

    let background = load_reference(config.bg.as_deref(), "bg")?;
    let mask = load_reference(config.mask.as_deref(), "mask")?;

    let calibration = if mask.is_some() {
        Calibration::Masked
    } else {
        Calibration::Unmasked
    };
    let classifier = Classifier::new(calibration);
    info!(?calibration, imgdir = %config.imgdir.display(), "Analyzing images");

    let mut counters: Option<CategoryCounters> = None;
    for path in matched_files(&config.imgdir) {
        fold_image(&path, config, &classifier, mask.as_ref(), &mut counters)?;
    }

    let mut counters = match counters {
        Some(counters) => counters,
        None => {
            warn!(imgdir = %config.imgdir.display(), "No images matched; nothing to render");
            return Ok(RunSummary::default());
        }
    };
    info!(analyzed = counters.analyzed(), "Batch complete");

    counters.finalize();
    render_outputs(config, &counters, background.as_ref())
}

/// Load an optional reference image (background or mask).
fn load_reference(path: Option<&Path>, option: &str) -> Result<Option<PixelBuffer>> {
    match path {
        Some(path) => {
            let buffer = codec::decode(path)
                .with_context(|| format!("loading --{} image {}", option, path.display()))?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

/// Collect input files, one sorted directory pass per extension.
fn matched_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for ext in INPUT_EXTENSIONS {
        for entry in WalkDir::new(dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .map_or(false, |e| e.eq_ignore_ascii_case(ext))
            {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files
}

/// Run one image through the per-image pipeline.
fn fold_image(
    path: &Path,
    config: &Config,
    classifier: &Classifier,
    mask: Option<&PixelBuffer>,
    counters: &mut Option<CategoryCounters>,
) -> Result<()> {
    let mut image =
        codec::decode(path).with_context(|| format!("decoding {}", path.display()))?;

    if let Some(mask) = mask {
        ops::blend_add(&mut image, mask);
    }
    ops::saturate(&mut image, SATURATION_BOOST);

    if let Some(preview_dir) = &config.preview {
        save_preview(&image, path, preview_dir, config.quality)?;
    }

    let counters = counters.get_or_insert_with(|| {
        info!(
            width = image.width(),
            height = image.height(),
            "Image size fixed for the run"
        );
        CategoryCounters::new(image.width(), image.height())
    });

    let report = counters.fold(&image, classifier);
    info!(
        path = %path.display(),
        unparsed = report.unparsed_pixels,
        percent = report.unparsed_percent(),
        "Analyzed"
    );
    Ok(())
}

/// Save the enhanced copy of one input under its own name in the preview
/// directory.
fn save_preview(image: &PixelBuffer, source: &Path, preview_dir: &Path, quality: u8) -> Result<()> {
    let name = source
        .file_name()
        .with_context(|| format!("input path {} has no file name", source.display()))?;
    let target = preview_dir.join(name);
    codec::encode(image, &target, quality)
        .with_context(|| format!("saving preview {}", target.display()))?;
    Ok(())
}

/// Render and encode the three output rasters.
fn render_outputs(
    config: &Config,
    counters: &CategoryCounters,
    background: Option<&PixelBuffer>,
) -> Result<RunSummary> {
    fs::create_dir_all(&config.outdir)
        .with_context(|| format!("creating output directory {}", config.outdir.display()))?;

    let ramp = ColorRamp::frequency();
    let width = counters.width();
    let height = counters.height();
    let analyzed = counters.analyzed();
    let mut outputs = Vec::new();

    let mult = resolve_multiplier(config.mult, counters.overall(), analyzed, width);
    info!(multiplier = mult, "Generating image: overall");
    let mut overall = render::render_frequency(counters.overall(), width, height, analyzed, mult, &ramp)?;
    if let Some(bg) = background {
        ops::blend_multiply(&mut overall, bg);
    }
    outputs.push(write_output(&overall, &config.outdir, "overall.jpg", config.quality)?);

    let windmult = resolve_multiplier(config.windmult, counters.wind(), analyzed, width);
    info!(multiplier = windmult, "Generating image: wind");
    let mut wind = render::render_frequency(counters.wind(), width, height, analyzed, windmult, &ramp)?;
    if let Some(bg) = background {
        ops::blend_multiply(&mut wind, bg);
    }
    outputs.push(write_output(&wind, &config.outdir, "wind.jpg", config.quality)?);

    info!("Generating image: unparsed");
    let (unparsed, hits) = render::render_binary(counters.unparsed(), width, height)?;
    outputs.push(write_output(&unparsed, &config.outdir, "unparsed.jpg", config.quality)?);
    info!(
        percent = hits as f32 * 100.0 / counters.pixel_count() as f32 / analyzed as f32,
        "Total unparsed"
    );

    Ok(RunSummary {
        analyzed,
        width,
        height,
        outputs,
    })
}

/// Use the explicit multiplier when positive, else auto-scale.
fn resolve_multiplier(explicit: f32, counts: &[u32], analyzed: u32, width: u32) -> f32 {
    if explicit > 0.0 {
        explicit
    } else {
        scale::auto_scale(counts, analyzed, width)
    }
}

fn write_output(buffer: &PixelBuffer, outdir: &Path, name: &str, quality: u8) -> Result<PathBuf> {
    let path = outdir.join(name);
    codec::encode(buffer, &path, quality)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
