//! Assembly `.byte` directive output for the palette and the indexed bitmap.
//!
//! Each stream is a `label:` line followed by `.byte` lines of
//! comma-separated `$xx` tokens. A line is closed after a fixed number of
//! entries; the last line holds whatever is left, and no empty `.byte`
//! line is ever written.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::bitmap::IndexedBitmap;
use crate::error::ReduceError;
use crate::palette::Palette;
use crate::rle;

/// Labels and line widths for the emitted streams.
#[derive(Debug, Clone)]
pub struct AsmConfig {
    pub palette_label: String,
    pub bitmap_label: String,
    pub rle_label: String,
    /// Palette entries per `.byte` line (two tokens each).
    pub palette_entries_per_line: usize,
    /// Bitmap tokens per `.byte` line. Also used for the RLE stream.
    pub bitmap_entries_per_line: usize,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            palette_label: String::from("color_palette"),
            bitmap_label: String::from("bitmap_data"),
            rle_label: String::from("bitmap_data_rle"),
            palette_entries_per_line: 40,
            bitmap_entries_per_line: 150,
        }
    }
}

impl AsmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette_label(mut self, label: impl Into<String>) -> Self {
        self.palette_label = label.into();
        self
    }

    pub fn bitmap_label(mut self, label: impl Into<String>) -> Self {
        self.bitmap_label = label.into();
        self
    }

    pub fn rle_label(mut self, label: impl Into<String>) -> Self {
        self.rle_label = label.into();
        self
    }

    pub fn palette_entries_per_line(mut self, n: usize) -> Self {
        self.palette_entries_per_line = n;
        self
    }

    pub fn bitmap_entries_per_line(mut self, n: usize) -> Self {
        self.bitmap_entries_per_line = n;
        self
    }
}

fn write_directives<T>(
    label: &str,
    items: &[T],
    per_line: usize,
    mut write_item: impl FnMut(&mut String, &T),
) -> String {
    let mut out = String::new();
    out.push_str(label);
    out.push_str(":\n");

    // 0 would never close a line
    for chunk in items.chunks(per_line.max(1)) {
        out.push_str(".byte ");
        for (i, item) in chunk.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_item(&mut out, item);
        }
        out.push('\n');
    }
    out
}

/// Palette stream. Each entry is written as `$GB,$0R`: green and blue
/// nibbles packed into one byte, then red in its own byte.
pub fn encode_palette(palette: &Palette, config: &AsmConfig) -> String {
    write_directives(
        &config.palette_label,
        palette.entries(),
        config.palette_entries_per_line,
        |out, c| {
            let _ = write!(out, "${:x}{:x},${:02x}", c.g(), c.b(), c.r());
        },
    )
}

/// Bitmap stream: palette indices flattened row-major, two hex digits each.
///
/// Indices above 255 are written with as many digits as they need.
pub fn encode_bitmap(indexed: &IndexedBitmap, config: &AsmConfig) -> String {
    write_directives(
        &config.bitmap_label,
        indexed.indices(),
        config.bitmap_entries_per_line,
        |out, i| {
            let _ = write!(out, "${i:02x}");
        },
    )
}

/// Raw byte stream under an arbitrary label.
pub fn encode_bytes(label: &str, bytes: &[u8], per_line: usize) -> String {
    write_directives(label, bytes, per_line, |out, b| {
        let _ = write!(out, "${b:02x}");
    })
}

/// Run-length coded bitmap stream (see [`crate::rle`]).
///
/// Every index must fit in a byte.
pub fn encode_bitmap_rle(indexed: &IndexedBitmap, config: &AsmConfig) -> Result<String, ReduceError> {
    let bytes = indexed
        .indices()
        .iter()
        .map(|&index| u8::try_from(index).map_err(|_| ReduceError::IndexOutOfByteRange { index }))
        .collect::<Result<Vec<u8>, _>>()?;
    let packed = rle::compress(&bytes);
    Ok(encode_bytes(
        &config.rle_label,
        &packed,
        config.bitmap_entries_per_line,
    ))
}
