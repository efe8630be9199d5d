//! Per-scanline color budget enforcement.
//!
//! A line with more distinct colors than the budget is collapsed greedily:
//! each candidate color `C` absorbs its neighbor one quantization step up
//! (red first, then green, then blue). Candidates are tried in first-seen
//! order and each is tried at most once per line, so the outcome depends
//! only on the line's contents.

use log::{trace, warn};

use crate::color::{MAX_COMPONENT_VALUE, QuantizedColor};
use crate::histogram::ColorSet;

/// Outer-iteration cap for one line.
pub const DEFAULT_MAX_ITERATIONS: u32 = 4096;

/// What happened while reducing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReport {
    /// Row index in the image.
    pub line: usize,
    /// Distinct colors before reduction.
    pub colors_before: usize,
    /// Distinct colors after reduction.
    pub colors_after: usize,
    /// Successful merges.
    pub merges: usize,
    /// Outer iterations spent.
    pub iterations: u32,
    /// `false` when the line still exceeds its budget (iteration cap hit or
    /// no candidate left that can merge).
    pub complete: bool,
}

/// The color that `color` absorbs when it is the merge candidate.
///
/// Bumps the first component below [`MAX_COMPONENT_VALUE`], in R, G, B
/// order. Returns `None` for `0f0f0f`, which can never absorb anything.
pub fn similar_color(color: QuantizedColor) -> Option<QuantizedColor> {
    let [r, g, b] = color.components();
    let (dr, dg, db) = if r < MAX_COMPONENT_VALUE {
        (1, 0, 0)
    } else if g < MAX_COMPONENT_VALUE {
        (0, 1, 0)
    } else if b < MAX_COMPONENT_VALUE {
        (0, 0, 1)
    } else {
        return None;
    };
    color.checked_add(dr, dg, db).ok()
}

/// Replace every occurrence of `from` with `to`, returning the count.
pub fn replace_color(row: &mut [QuantizedColor], from: QuantizedColor, to: QuantizedColor) -> usize {
    let mut replaced = 0;
    for c in row.iter_mut().filter(|c| **c == from) {
        *c = to;
        replaced += 1;
    }
    replaced
}

/// Reduce `row` in place until it holds at most `max_colors` distinct colors.
///
/// Each outer iteration performs at most one merge and then recomputes the
/// distinct colors. A candidate is marked processed whether or not it
/// merged anything, and stays processed for the rest of the line. The loop
/// ends when the line fits, when `max_iterations` is spent, or when every
/// remaining candidate has been processed; the last two leave the line over
/// budget and are reported through [`LineReport::complete`].
pub fn reduce_line(
    row: &mut [QuantizedColor],
    max_colors: usize,
    max_iterations: u32,
    line: usize,
) -> LineReport {
    let mut distinct = ColorSet::from_colors(row);
    let colors_before = distinct.len();
    let mut processed = ColorSet::new();
    let mut merges = 0;
    let mut iterations = 0;

    while distinct.len() > max_colors {
        if iterations == max_iterations {
            warn!(
                "line {line}: forced stop after {iterations} iterations, {} colors left (budget {max_colors})",
                distinct.len()
            );
            break;
        }
        iterations += 1;

        let mut merged = false;
        for &color in distinct.as_slice() {
            if !processed.insert(color) {
                continue;
            }
            let Some(similar) = similar_color(color) else {
                continue;
            };
            let replaced = replace_color(row, similar, color);
            if replaced > 0 {
                trace!("replaced {replaced} occurrences of {similar} with {color} at line {line}");
                merges += 1;
                merged = true;
                break;
            }
        }

        if !merged {
            warn!(
                "line {line}: no mergeable colors left, {} colors remain (budget {max_colors})",
                distinct.len()
            );
            break;
        }
        distinct.refill(row);
    }

    LineReport {
        line,
        colors_before,
        colors_after: distinct.len(),
        merges,
        iterations,
        complete: distinct.len() <= max_colors,
    }
}
