extern crate alloc;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::color::{KEY_SPACE, QuantizedColor};

const WORDS: usize = KEY_SPACE / 64;

/// Distinct quantized colors in first-seen order.
///
/// Membership is a 4096-bit table indexed by the color key; iteration order
/// is insertion order, which is what makes line reduction reproducible.
#[derive(Debug, Clone)]
pub struct ColorSet {
    seen: [u64; WORDS],
    order: Vec<QuantizedColor>,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSet {
    pub fn new() -> Self {
        Self {
            seen: [0; WORDS],
            order: Vec::new(),
        }
    }

    /// Collect the distinct colors of `colors` in order of first occurrence.
    pub fn from_colors(colors: &[QuantizedColor]) -> Self {
        let mut set = Self::new();
        set.extend(colors);
        set
    }

    #[inline]
    pub fn contains(&self, color: QuantizedColor) -> bool {
        let k = color.key() as usize;
        self.seen[k / 64] & (1 << (k % 64)) != 0
    }

    /// Insert a color; returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, color: QuantizedColor) -> bool {
        let k = color.key() as usize;
        let bit = 1u64 << (k % 64);
        if self.seen[k / 64] & bit != 0 {
            return false;
        }
        self.seen[k / 64] |= bit;
        self.order.push(color);
        true
    }

    pub fn extend(&mut self, colors: &[QuantizedColor]) {
        for &c in colors {
            self.insert(c);
        }
    }

    pub fn clear(&mut self) {
        self.seen = [0; WORDS];
        self.order.clear();
    }

    /// Rebuild from `colors`, reusing the allocation.
    pub fn refill(&mut self, colors: &[QuantizedColor]) {
        self.clear();
        self.extend(colors);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Colors in first-seen order.
    pub fn as_slice(&self) -> &[QuantizedColor] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<QuantizedColor> {
        self.order
    }
}

/// Counts distinct 24-bit source pixels.
#[derive(Debug, Clone, Default)]
pub struct OriginColors {
    colors: BTreeSet<u32>,
}

impl OriginColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, pixels: &[rgb::RGB<u8>]) {
        for p in pixels {
            self.colors
                .insert(((p.r as u32) << 16) | ((p.g as u32) << 8) | p.b as u32);
        }
    }

    pub fn count(&self) -> usize {
        self.colors.len()
    }
}
