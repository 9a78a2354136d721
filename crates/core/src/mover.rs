//! Directional moves - applies line compaction across the whole grid
//!
//! Rows serve Left/Right and columns serve Up/Down. Right and Down read each
//! line back to front, compact it with the same routine as Left/Up and write
//! it back in reverse, so all four directions share one merge rule.

use crate::grid::Grid;
use crate::line::compact_line;
use crate::types::{Direction, GRID_SIZE};

/// Result of sliding the whole grid in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score_delta: u32,
    pub moved: bool,
}

/// Slide and merge every line of `grid` toward `direction`.
///
/// Pure: `grid` is left untouched. When nothing can move the outcome holds
/// an identical grid, `score_delta == 0` and `moved == false`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{shift, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let out = shift(&grid, Direction::Right);
/// assert_eq!(out.grid.to_rows()[0], [0, 0, 4, 8]);
/// assert_eq!(out.score_delta, 12);
/// ```
pub fn shift(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = *grid;
    let mut score_delta = 0u32;
    let mut moved = false;

    for index in 0..GRID_SIZE {
        let out = compact_line(grid.line(direction, index));
        if out.moved {
            next.set_line(direction, index, &out.line);
            moved = true;
        }
        score_delta += out.score;
    }

    MoveOutcome {
        grid: next,
        score_delta,
        moved,
    }
}

/// Check whether `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    (0..GRID_SIZE).any(|index| compact_line(grid.line(direction, index)).moved)
}
