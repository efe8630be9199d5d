extern crate alloc;
use alloc::vec::Vec;

use crate::bitmap::{Bitmap, IndexedBitmap};
use crate::error::ReduceError;
use crate::palette::Palette;

/// Map every bitmap color to its palette index.
///
/// The palette is normally built from this same bitmap, so a miss means the
/// two went out of sync; it is reported rather than papered over.
pub fn index_bitmap(bitmap: &Bitmap, palette: &Palette) -> Result<IndexedBitmap, ReduceError> {
    let width = bitmap.width();
    let mut indices = Vec::with_capacity(bitmap.colors().len());

    for (i, &color) in bitmap.colors().iter().enumerate() {
        let index = palette
            .index_of(color)
            .ok_or_else(|| ReduceError::PaletteMiss {
                x: i % width,
                y: i / width,
                color,
            })?;
        indices.push(index);
    }

    Ok(IndexedBitmap::from_raw(width, bitmap.height(), indices))
}

/// Map indices back through the palette into 8-bit pixels.
pub fn expand_indices(
    indexed: &IndexedBitmap,
    palette_rgb: &[rgb::RGB<u8>],
) -> Vec<rgb::RGB<u8>> {
    indexed
        .indices()
        .iter()
        .map(|&i| palette_rgb[i as usize])
        .collect()
}
