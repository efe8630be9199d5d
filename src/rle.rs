//! Byte-oriented run-length coding for bitmap streams.
//!
//! Control byte layout:
//! - MSB set: repeat run. Low 7 bits = length - 1 (2..=127), one value byte follows.
//! - MSB clear: literal run. Low 7 bits = length - 1 (1..=128), that many bytes follow.
//!
//! The stream ends with [`TERMINATOR`]. Repeat runs stop at 127 so no control
//! byte can collide with it.

extern crate alloc;
use alloc::vec::Vec;

/// End-of-stream marker.
pub const TERMINATOR: u8 = 0xFF;

const MAX_REPEAT: usize = 127;
const MAX_LITERAL: usize = 128;

fn repeat_len(data: &[u8], start: usize) -> usize {
    let value = data[start];
    data[start..]
        .iter()
        .take(MAX_REPEAT)
        .take_while(|&&b| b == value)
        .count()
}

/// Compress `data`. The result always ends with [`TERMINATOR`].
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 2 + 2);
    let mut i = 0;

    while i < data.len() {
        let run = repeat_len(data, i);
        if run > 1 {
            out.push(0x80 | (run - 1) as u8);
            out.push(data[i]);
            i += run;
            continue;
        }

        // Literal: extend until the next repeat run starts.
        let start = i;
        i += 1;
        while i < data.len() && i - start < MAX_LITERAL && repeat_len(data, i) == 1 {
            i += 1;
        }
        out.push((i - start - 1) as u8);
        out.extend_from_slice(&data[start..i]);
    }

    out.push(TERMINATOR);
    out
}

/// Expand a stream written by [`compress`]. Returns `None` on a truncated
/// stream or a missing terminator.
pub fn decompress(stream: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    let mut i = 0;

    loop {
        let control = *stream.get(i)?;
        i += 1;
        if control == TERMINATOR {
            return Some(out);
        }
        let len = (control & 0x7F) as usize + 1;
        if control & 0x80 != 0 {
            let value = *stream.get(i)?;
            i += 1;
            out.extend(core::iter::repeat_n(value, len));
        } else {
            out.extend_from_slice(stream.get(i..i + len)?);
            i += len;
        }
    }
}
