extern crate alloc;
use alloc::vec::Vec;

use crate::color::QuantizedColor;

/// Row-major grid of quantized colors, one per source pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    colors: Vec<QuantizedColor>,
}

impl Bitmap {
    /// Wrap a row-major buffer. `colors.len()` must equal `width * height`.
    pub(crate) fn from_raw(width: usize, height: usize, colors: Vec<QuantizedColor>) -> Self {
        debug_assert_eq!(colors.len(), width * height);
        Self {
            width,
            height,
            colors,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All colors, row-major.
    pub fn colors(&self) -> &[QuantizedColor] {
        &self.colors
    }

    pub fn get(&self, x: usize, y: usize) -> QuantizedColor {
        self.colors[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[QuantizedColor] {
        &self.colors[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [QuantizedColor] {
        &mut self.colors[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[QuantizedColor]> {
        self.colors.chunks_exact(self.width)
    }
}

/// Row-major grid of palette indices with the same shape as its [`Bitmap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBitmap {
    width: usize,
    height: usize,
    indices: Vec<u16>,
}

impl IndexedBitmap {
    pub(crate) fn from_raw(width: usize, height: usize, indices: Vec<u16>) -> Self {
        debug_assert_eq!(indices.len(), width * height);
        Self {
            width,
            height,
            indices,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All indices flattened row-major.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn get(&self, x: usize, y: usize) -> u16 {
        self.indices[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[u16] {
        &self.indices[y * self.width..(y + 1) * self.width]
    }

    /// Largest index in use, `None` for an empty grid.
    pub fn max_index(&self) -> Option<u16> {
        self.indices.iter().copied().max()
    }
}
