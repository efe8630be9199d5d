use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ReduceError;

/// Largest value a quantized component can hold (4 bits per channel).
pub const MAX_COMPONENT_VALUE: u8 = 15;

/// Default channel divider. `255 / 40.3785` truncates to 6, so every channel
/// lands in 0..=6 and the reachable color space is 7³ = 343 colors.
pub const DEFAULT_DIVIDER: f64 = 40.3785;

/// Number of distinct 12-bit color keys.
pub const KEY_SPACE: usize = 1 << 12;

/// A color reduced to 4 bits per channel, packed as `0x0RGB`.
///
/// The packed value doubles as the canonical key: equality, hashing and
/// ordering all operate on it, and it indexes `KEY_SPACE`-sized tables
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct QuantizedColor(u16);

impl QuantizedColor {
    /// Build from components, or `None` if any exceeds [`MAX_COMPONENT_VALUE`].
    pub const fn new(r: u8, g: u8, b: u8) -> Option<Self> {
        if r > MAX_COMPONENT_VALUE || g > MAX_COMPONENT_VALUE || b > MAX_COMPONENT_VALUE {
            return None;
        }
        Some(Self::pack(r, g, b))
    }

    #[inline(always)]
    const fn pack(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16) << 8) | ((g as u16) << 4) | b as u16)
    }

    /// Decode a 12-bit key produced by [`QuantizedColor::key`].
    pub fn from_key(key: u16) -> Result<Self, ReduceError> {
        if key as usize >= KEY_SPACE {
            return Err(ReduceError::InvalidKey(key));
        }
        Ok(Self(key))
    }

    #[inline(always)]
    pub const fn key(self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub const fn r(self) -> u8 {
        (self.0 >> 8) as u8 & 0x0F
    }

    #[inline(always)]
    pub const fn g(self) -> u8 {
        (self.0 >> 4) as u8 & 0x0F
    }

    #[inline(always)]
    pub const fn b(self) -> u8 {
        self.0 as u8 & 0x0F
    }

    pub const fn components(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Add per-component deltas.
    ///
    /// Fails instead of wrapping when a component would leave `0..=15`.
    pub fn checked_add(self, dr: i16, dg: i16, db: i16) -> Result<Self, ReduceError> {
        let overflow = || ReduceError::ComponentOverflow {
            color: self,
            delta: (dr, dg, db),
        };
        let shift = |c: u8, d: i16| -> Option<u8> {
            let v = c as i16 + d;
            (0..=MAX_COMPONENT_VALUE as i16).contains(&v).then_some(v as u8)
        };
        let r = shift(self.r(), dr).ok_or_else(overflow)?;
        let g = shift(self.g(), dg).ok_or_else(overflow)?;
        let b = shift(self.b(), db).ok_or_else(overflow)?;
        Ok(Self::pack(r, g, b))
    }

    /// Map back to 8-bit channels: `component * divider`, truncated.
    pub fn to_rgb(self, divider: Divider) -> rgb::RGB<u8> {
        let d = divider.get();
        // `as u8` truncates toward zero and saturates at 255
        rgb::RGB {
            r: (self.r() as f64 * d) as u8,
            g: (self.g() as f64 * d) as u8,
            b: (self.b() as f64 * d) as u8,
        }
    }
}

impl fmt::Display for QuantizedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

impl FromStr for QuantizedColor {
    type Err = ReduceError;

    /// Parse the six-digit `0r0g0b` form written by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReduceError::InvalidHex(s.to_string());
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let pair = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| invalid());
        Self::new(pair(0)?, pair(2)?, pair(4)?).ok_or_else(invalid)
    }
}

/// Channel divider that is known to keep every quantized component in 4 bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider(f64);

impl Divider {
    pub fn new(divider: f64) -> Result<Self, ReduceError> {
        if !divider.is_finite() || divider <= 0.0 || 255.0 / divider >= 16.0 {
            return Err(ReduceError::InvalidDivider(divider));
        }
        Ok(Self(divider))
    }

    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self(DEFAULT_DIVIDER)
    }
}

/// Quantize one pixel: `floor(channel / divider)` per channel.
#[inline]
pub fn quantize(pixel: rgb::RGB<u8>, divider: Divider) -> QuantizedColor {
    let d = divider.get();
    // Channels are non-negative, so truncation is floor. `Divider` guarantees
    // the result is at most 15.
    let q = |c: u8| (c as f64 / d) as u8;
    QuantizedColor::pack(q(pixel.r), q(pixel.g), q(pixel.b))
}
