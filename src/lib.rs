#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod asm;
pub mod bitmap;
pub mod color;
pub mod error;
pub mod histogram;
pub mod palette;
pub mod remap;
pub mod rle;
pub mod scanline;

pub use asm::AsmConfig;
pub use bitmap::{Bitmap, IndexedBitmap};
pub use color::{DEFAULT_DIVIDER, Divider, MAX_COMPONENT_VALUE, QuantizedColor};
pub use error::ReduceError;
pub use palette::Palette;
pub use scanline::{DEFAULT_MAX_ITERATIONS, LineReport};

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, warn};

use crate::histogram::{ColorSet, OriginColors};

/// Configuration for scanline color reduction.
#[derive(Debug, Clone)]
pub struct ReduceConfig {
    /// Distinct colors allowed on one scanline (>= 1).
    pub max_colors_per_line: usize,
    /// Channel divider; `255 / divider` must stay below 16.
    pub divider: f64,
    /// Outer-iteration cap per scanline (>= 1).
    pub max_iterations: u32,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            max_colors_per_line: 128,
            divider: DEFAULT_DIVIDER,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ReduceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_colors_per_line(mut self, n: usize) -> Self {
        self.max_colors_per_line = n;
        self
    }

    pub fn divider(mut self, divider: f64) -> Self {
        self.divider = divider;
        self
    }

    pub fn max_iterations(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }
}

/// Reduction result.
#[derive(Debug)]
pub struct ReduceResult {
    bitmap: Bitmap,
    palette: Palette,
    indexed: IndexedBitmap,
    divider: Divider,
    origin_color_count: usize,
    destination_color_count: usize,
    line_reports: Vec<LineReport>,
}

impl ReduceResult {
    /// Final quantized bitmap.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Global palette in first-occurrence order.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index for each pixel.
    pub fn indexed(&self) -> &IndexedBitmap {
        &self.indexed
    }

    /// Distinct 24-bit colors in the source image.
    pub fn origin_color_count(&self) -> usize {
        self.origin_color_count
    }

    /// Distinct quantized colors after reduction. Equals the palette length.
    pub fn destination_color_count(&self) -> usize {
        self.destination_color_count
    }

    /// One report per scanline, top to bottom.
    pub fn line_reports(&self) -> &[LineReport] {
        &self.line_reports
    }

    /// Scanlines left over budget.
    pub fn incomplete_lines(&self) -> impl Iterator<Item = &LineReport> {
        self.line_reports.iter().filter(|r| !r.complete)
    }

    /// Reconstructed 8-bit image, same dimensions as the input:
    /// each channel is `component * divider`, truncated.
    pub fn reconstruct(&self) -> Vec<rgb::RGB<u8>> {
        remap::expand_indices(&self.indexed, &self.palette.entries_rgb(self.divider))
    }

    pub fn palette_asm(&self, config: &AsmConfig) -> String {
        asm::encode_palette(&self.palette, config)
    }

    pub fn bitmap_asm(&self, config: &AsmConfig) -> String {
        asm::encode_bitmap(&self.indexed, config)
    }

    pub fn bitmap_rle_asm(&self, config: &AsmConfig) -> Result<String, ReduceError> {
        asm::encode_bitmap_rle(&self.indexed, config)
    }
}

/// Quantize an RGB image to 4 bits per channel and enforce the per-scanline
/// color budget.
///
/// Rows are processed top to bottom: each row is quantized, reduced in
/// place, then folded into the running destination color set. The palette
/// and indexed bitmap are derived from the finished bitmap.
pub fn reduce(
    pixels: &[rgb::RGB<u8>],
    width: usize,
    height: usize,
    config: &ReduceConfig,
) -> Result<ReduceResult, ReduceError> {
    let divider = validate_inputs(pixels.len(), width, height, config)?;

    let mut colors = Vec::with_capacity(pixels.len());
    colors.extend(pixels.iter().map(|&p| color::quantize(p, divider)));
    let mut bitmap = Bitmap::from_raw(width, height, colors);

    let mut origin = OriginColors::new();
    let mut destination = ColorSet::new();
    let mut line_reports = Vec::with_capacity(height);

    for (y, source_row) in pixels.chunks_exact(width).enumerate() {
        origin.add_row(source_row);

        let row = bitmap.row_mut(y);
        let report = scanline::reduce_line(
            row,
            config.max_colors_per_line,
            config.max_iterations,
            y,
        );
        destination.extend(row);
        line_reports.push(report);
    }

    let palette = Palette::from_colors(bitmap.colors());
    let indexed = remap::index_bitmap(&bitmap, &palette)?;

    if palette.len() > 256 {
        warn!(
            "palette has {} entries; bitmap indices no longer fit in a byte",
            palette.len()
        );
    }

    let result = ReduceResult {
        bitmap,
        palette,
        indexed,
        divider,
        origin_color_count: origin.count(),
        destination_color_count: destination.len(),
        line_reports,
    };

    debug!(
        "reduced {width}x{height}: {} origin colors, {} destination colors, {} lines over budget",
        result.origin_color_count,
        result.destination_color_count,
        result.incomplete_lines().count()
    );

    Ok(result)
}

fn validate_inputs(
    pixel_count: usize,
    width: usize,
    height: usize,
    config: &ReduceConfig,
) -> Result<Divider, ReduceError> {
    if width == 0 || height == 0 {
        return Err(ReduceError::ZeroDimension);
    }
    if pixel_count != width * height {
        return Err(ReduceError::DimensionMismatch {
            len: pixel_count,
            width,
            height,
        });
    }
    if config.max_colors_per_line == 0 {
        return Err(ReduceError::InvalidMaxColorsPerLine(
            config.max_colors_per_line,
        ));
    }
    if config.max_iterations == 0 {
        return Err(ReduceError::InvalidMaxIterations);
    }
    Divider::new(config.divider)
}
