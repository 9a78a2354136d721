//! Tile spawning - places one random tile after an accepted move
//!
//! The cell is drawn uniformly from the empty cells; the value is 2 with
//! probability 0.9 and 4 with probability 0.1.

use rand::Rng;

use crate::grid::Grid;
use crate::types::{Tile, FOUR_PROBABILITY};

/// A tile placed by [`spawn_random_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The grid had no empty cell; it was left untouched.
    #[error("cannot spawn a tile: the grid has no empty cell")]
    GridFull,
}

/// Draw a new tile value: 2 (90%) or 4 (10%).
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(FOUR_PROBABILITY) {
        4
    } else {
        2
    }
}

/// Insert a random tile into a uniformly chosen empty cell.
///
/// On a full grid nothing is written and `SpawnError::GridFull` is returned.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn_random_tile, Grid};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut grid = Grid::new();
/// let tile = spawn_random_tile(&mut grid, &mut rng).unwrap();
/// assert_eq!(grid.get(tile.row, tile.col), Some(tile.value));
/// assert_eq!(grid.count_tiles(), 1);
/// ```
pub fn spawn_random_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<SpawnedTile, SpawnError> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return Err(SpawnError::GridFull);
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = random_tile_value(rng);
    grid.set(row, col, value);

    Ok(SpawnedTile { row, col, value })
}
