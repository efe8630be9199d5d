//! scanquant - scanline-budgeted color reduction CLI
//!
//! Loads a PNG, reduces it with `scanquant::reduce`, writes the reconstructed
//! image plus `.byte` palette and bitmap include files.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::Path;

fn load_rgb(path: &Path) -> Result<(Vec<rgb::RGB<u8>>, usize, usize)> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let pixels = img
        .pixels()
        .map(|p| rgb::RGB {
            r: p.0[0],
            g: p.0[1],
            b: p.0[2],
        })
        .collect();
    Ok((pixels, w, h))
}

fn save_rgb(path: &Path, pixels: &[rgb::RGB<u8>], width: usize, height: usize) -> Result<()> {
    let raw: Vec<u8> = pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
    let img = image::RgbImage::from_raw(width as u32, height as u32, raw)
        .context("reconstructed buffer does not match image dimensions")?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn run(args: &Args) -> Result<()> {
    let (pixels, width, height) = load_rgb(&args.input)?;
    info!("{} loaded ({width}x{height})", args.input.display());

    let result = scanquant::reduce(&pixels, width, height, &args.reduce_config())
        .context("color reduction failed")?;

    let incomplete = result.incomplete_lines().count();
    if incomplete > 0 {
        warn!("{incomplete} scanlines are still over the per-line budget");
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let reduced_path = args.out_dir.join(&args.reduced);
    save_rgb(&reduced_path, &result.reconstruct(), width, height)?;

    println!(
        "Number of unique colors at origin: {}",
        result.origin_color_count()
    );
    println!(
        "Number of unique colors at destination: {}",
        result.palette().len()
    );

    let asm = args.asm_config();
    let palette_path = args.out_dir.join(&args.palette_out);
    fs::write(&palette_path, result.palette_asm(&asm))
        .with_context(|| format!("failed to write {}", palette_path.display()))?;

    let bitmap = if args.rle {
        result.bitmap_rle_asm(&asm)?
    } else {
        result.bitmap_asm(&asm)
    };
    let bitmap_path = args.out_dir.join(&args.bitmap_out);
    fs::write(&bitmap_path, bitmap)
        .with_context(|| format!("failed to write {}", bitmap_path.display()))?;

    info!(
        "wrote {}, {} and {}",
        reduced_path.display(),
        palette_path.display(),
        bitmap_path.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}
