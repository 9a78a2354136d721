//! Line compaction - the merge rule applied to one row or column
//!
//! Lines arrive already oriented so that the direction of travel points at
//! index 0. Tiles slide toward index 0 and equal neighbours merge, with each
//! output slot absorbing at most one merge per pass:
//!
//! - `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`
//! - `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` (never `[8, 0, 0, 0]`)
//!
//! Every merge adds the doubled value to the score. Tiles at `MAX_TILE` slide
//! but never merge, so the output is always a valid line.

use crate::grid::Line;
use crate::types::{Tile, GRID_SIZE, MAX_TILE};

/// Result of compacting a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: Line,
    pub score: u32,
    pub moved: bool,
}

/// Compact and merge `line` toward index 0.
///
/// # Examples
///
/// ```
/// use tui_2048_core::compact_line;
///
/// let out = compact_line([2, 2, 4, 4]);
/// assert_eq!(out.line, [4, 8, 0, 0]);
/// assert_eq!(out.score, 12);
/// assert!(out.moved);
/// ```
pub fn compact_line(line: Line) -> LineOutcome {
    let mut out: Line = [0; GRID_SIZE];
    let mut score = 0u32;
    // Next free output slot.
    let mut write = 0usize;
    // Whether out[write - 1] already absorbed a merge this pass.
    let mut last_merged = false;

    for &value in line.iter().filter(|&&v| v != 0) {
        if write > 0 && !last_merged && value < MAX_TILE && out[write - 1] == value {
            let merged: Tile = value * 2;
            out[write - 1] = merged;
            score += merged;
            last_merged = true;
        } else {
            out[write] = value;
            write += 1;
            last_merged = false;
        }
    }

    LineOutcome {
        line: out,
        score,
        moved: out != line,
    }
}
