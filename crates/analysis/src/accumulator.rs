//! Per-pixel category counters accumulated across a batch of images.

use raster::{unpack, PixelBuffer};
use tracing::trace;

use crate::classifier::{Category, Classifier};

/// Result of folding one image into the counters.
#[derive(Debug, Clone, Copy)]
pub struct FoldReport {
    /// Pixels of this image no classifier branch claimed.
    pub unparsed_pixels: u32,
    /// Pixel count of the run grid the image was folded into.
    pub run_pixels: usize,
}

impl FoldReport {
    /// Unparsed share of the run's pixel grid, in percent.
    pub fn unparsed_percent(&self) -> f32 {
        if self.run_pixels == 0 {
            return 0.0;
        }
        self.unparsed_pixels as f32 * 100.0 / self.run_pixels as f32
    }
}

/// Category counter arrays sized to the run's fixed dimensions.
///
/// One count per pixel per category, indexed in run space
/// (`y * run_width + x`) regardless of the folded buffer's own stride or
/// size: a larger image is cropped, a smaller one leaves the uncovered
/// counters untouched for that image. The derived `overall` array is
/// computed by [`finalize`](CategoryCounters::finalize) exactly once,
/// after the last fold.
#[derive(Debug, Clone)]
pub struct CategoryCounters {
    width: u32,
    height: u32,
    green: Vec<u32>,
    yellow: Vec<u32>,
    red: Vec<u32>,
    wind: Vec<u32>,
    unparsed: Vec<u32>,
    overall: Vec<u32>,
    analyzed: u32,
    finalized: bool,
}

impl CategoryCounters {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            green: vec![0; size],
            yellow: vec![0; size],
            red: vec![0; size],
            wind: vec![0; size],
            unparsed: vec![0; size],
            overall: vec![0; size],
            analyzed: 0,
            finalized: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Images folded so far.
    pub fn analyzed(&self) -> u32 {
        self.analyzed
    }

    /// Classify every pixel of `buffer` and bump the matching counters.
    pub fn fold(&mut self, buffer: &PixelBuffer, classifier: &Classifier) -> FoldReport {
        let w = buffer.width().min(self.width);
        let h = buffer.height().min(self.height);
        let mut unparsed_pixels = 0u32;

        for y in 0..h {
            for x in 0..w {
                let ofs = y as usize * self.width as usize + x as usize;
                let color = buffer.get(x, y);
                match classifier.classify(color) {
                    Category::Background => {}
                    Category::Wind => self.wind[ofs] += 1,
                    Category::Red => self.red[ofs] += 1,
                    Category::Yellow => self.yellow[ofs] += 1,
                    Category::Green => self.green[ofs] += 1,
                    Category::Unparsed => {
                        self.unparsed[ofs] += 1;
                        unparsed_pixels += 1;
                        let (b, g, r) = unpack(color);
                        trace!(
                            x,
                            y,
                            r,
                            g,
                            b,
                            rb = r as i32 - b as i32,
                            rg = r as i32 - g as i32,
                            gb = g as i32 - b as i32,
                            "Unparsed pixel"
                        );
                    }
                }
            }
        }

        self.analyzed += 1;
        FoldReport {
            unparsed_pixels,
            run_pixels: self.pixel_count(),
        }
    }

    /// Compute the derived overall array: `red*4 + yellow*2 + green`.
    ///
    /// Must run exactly once, after the last fold and before any render
    /// reads [`overall`](CategoryCounters::overall).
    pub fn finalize(&mut self) {
        debug_assert!(!self.finalized, "finalize must run exactly once");
        for i in 0..self.overall.len() {
            self.overall[i] = self.red[i] * 4 + self.yellow[i] * 2 + self.green[i];
        }
        self.finalized = true;
    }

    /// The weighted overall counters. Only valid after [`finalize`](Self::finalize).
    pub fn overall(&self) -> &[u32] {
        debug_assert!(self.finalized, "overall read before finalize");
        &self.overall
    }

    pub fn green(&self) -> &[u32] {
        &self.green
    }

    pub fn yellow(&self) -> &[u32] {
        &self.yellow
    }

    pub fn red(&self) -> &[u32] {
        &self.red
    }

    pub fn wind(&self) -> &[u32] {
        &self.wind
    }

    pub fn unparsed(&self) -> &[u32] {
        &self.unparsed
    }
}
