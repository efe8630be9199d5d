//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

use scanquant::{AsmConfig, DEFAULT_DIVIDER, DEFAULT_MAX_ITERATIONS, ReduceConfig};

#[derive(Parser, Debug)]
#[command(
    name = "scanquant",
    version,
    about = "Reduce a PNG to a 4-bit-per-channel palette with a per-scanline color budget and emit assembly data"
)]
pub struct Args {
    /// Input image path
    pub input: PathBuf,

    /// Maximum distinct colors on one scanline
    #[arg(short = 'm', long, default_value_t = 128)]
    pub max_colors_per_line: usize,

    /// Channel divider between 8-bit and quantized component space
    #[arg(long, default_value_t = DEFAULT_DIVIDER)]
    pub divider: f64,

    /// Reduction iterations allowed per scanline
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Reconstructed PNG file name
    #[arg(long, default_value = "image_reduced.png")]
    pub reduced: PathBuf,

    /// Palette assembly file name
    #[arg(long, default_value = "palette.inc.asm")]
    pub palette_out: PathBuf,

    /// Bitmap assembly file name
    #[arg(long, default_value = "bitmap.inc.asm")]
    pub bitmap_out: PathBuf,

    /// Run-length encode the bitmap stream
    #[arg(long)]
    pub rle: bool,

    /// Palette entries per `.byte` line
    #[arg(long, default_value_t = 40)]
    pub palette_per_line: usize,

    /// Bitmap bytes per `.byte` line
    #[arg(long, default_value_t = 150)]
    pub bitmap_per_line: usize,
}

impl Args {
    pub fn reduce_config(&self) -> ReduceConfig {
        ReduceConfig::new()
            .max_colors_per_line(self.max_colors_per_line)
            .divider(self.divider)
            .max_iterations(self.max_iterations)
    }

    pub fn asm_config(&self) -> AsmConfig {
        AsmConfig::new()
            .palette_entries_per_line(self.palette_per_line)
            .bitmap_entries_per_line(self.bitmap_per_line)
    }
}
