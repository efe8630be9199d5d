extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::color::{Divider, KEY_SPACE, QuantizedColor};
use crate::histogram::ColorSet;

const NO_INDEX: u16 = u16::MAX;

/// Global palette: every distinct color of the final bitmap, in the order
/// it is first met scanning rows top to bottom and pixels left to right.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<QuantizedColor>,
    /// Color key -> palette index, `NO_INDEX` when absent.
    lookup: Vec<u16>,
}

impl Palette {
    /// Build from a row-major color sequence.
    pub fn from_colors(colors: &[QuantizedColor]) -> Self {
        Self::from_entries(ColorSet::from_colors(colors).into_vec())
    }

    /// Build from entries that are already distinct.
    fn from_entries(entries: Vec<QuantizedColor>) -> Self {
        let mut lookup = vec![NO_INDEX; KEY_SPACE];
        for (i, c) in entries.iter().enumerate() {
            // At most KEY_SPACE distinct entries, so the index fits in u16.
            lookup[c.key() as usize] = i as u16;
        }
        Self { entries, lookup }
    }

    /// Palette entries in index order.
    pub fn entries(&self) -> &[QuantizedColor] {
        &self.entries
    }

    /// 8-bit RGB approximation of each entry.
    pub fn entries_rgb(&self, divider: Divider) -> Vec<rgb::RGB<u8>> {
        self.entries.iter().map(|c| c.to_rgb(divider)).collect()
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `color` in the palette.
    #[inline]
    pub fn index_of(&self, color: QuantizedColor) -> Option<u16> {
        match self.lookup[color.key() as usize] {
            NO_INDEX => None,
            i => Some(i),
        }
    }

    pub fn get(&self, index: usize) -> Option<QuantizedColor> {
        self.entries.get(index).copied()
    }
}
