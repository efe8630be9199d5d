use alloc::string::String;

use thiserror::Error;

use crate::color::QuantizedColor;

#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("image dimensions cannot be zero")]
    ZeroDimension,

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("max_colors_per_line must be at least 1, got {0}")]
    InvalidMaxColorsPerLine(usize),

    #[error("divider {0} does not map 8-bit channels into 4-bit components")]
    InvalidDivider(f64),

    #[error("max_iterations must be at least 1")]
    InvalidMaxIterations,

    #[error("adding {delta:?} to {color} leaves the 4-bit component range")]
    ComponentOverflow {
        color: QuantizedColor,
        delta: (i16, i16, i16),
    },

    #[error("key {0:#06x} is not a 12-bit color key")]
    InvalidKey(u16),

    #[error("'{0}' is not a six-digit component color")]
    InvalidHex(String),

    #[error("color {color} at ({x}, {y}) has no palette entry")]
    PaletteMiss {
        x: usize,
        y: usize,
        color: QuantizedColor,
    },

    #[error("palette index {index} does not fit in a byte")]
    IndexOutOfByteRange { index: u16 },
}
