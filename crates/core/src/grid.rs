//! Grid module - manages the tile grid
//!
//! The grid is a 4x4 square where each cell holds a tile value (0 = empty).
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom) and col
//! ranges 0..3 (left to right).

use arrayvec::ArrayVec;

use crate::types::{Direction, Tile, CELL_COUNT, GRID_SIZE, MAX_TILE};

/// One row or column of the grid.
pub type Line = [Tile; GRID_SIZE];

/// Errors raised when building a grid from caller-supplied values
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid tile {value} at ({row}, {col}): expected 0 or a power of two in 2..={max}", max = MAX_TILE)]
    InvalidTile { row: usize, col: usize, value: Tile },
    #[error("expected {expected} cells, got {actual}")]
    WrongDimensions { expected: usize, actual: usize },
}

/// True for 0 (empty) and powers of two from 2 up to `MAX_TILE`.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// The game grid - 4x4 tiles using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of tiles, row-major order (row * GRID_SIZE + col)
    cells: [Tile; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Build a grid from rows, validating every tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// assert_eq!(grid.get(0, 3), Some(4));
    /// assert!(Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
                grid.cells[row * GRID_SIZE + col] = value;
            }
        }
        Ok(grid)
    }

    /// Build a grid from a flat row-major slice of exactly `CELL_COUNT` tiles.
    pub fn from_slice(values: &[Tile]) -> Result<Self, GridError> {
        if values.len() != CELL_COUNT {
            return Err(GridError::WrongDimensions {
                expected: CELL_COUNT,
                actual: values.len(),
            });
        }
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (i, &value) in values.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = value;
        }
        Self::from_rows(rows)
    }

    /// Convert to nested rows (for snapshots and display)
    pub fn to_rows(&self) -> [[Tile; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, out) in rows.iter_mut().enumerate() {
            out.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        }
        rows
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        debug_assert!(is_valid_tile(value), "invalid tile value {value}");
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Extract the `index`-th line oriented so that `direction`'s travel
    /// points toward element 0.
    ///
    /// Rows serve Left/Right, columns serve Up/Down; Right and Down are read
    /// back to front.
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        let mut line = [0; GRID_SIZE];
        for (i, slot) in line.iter_mut().enumerate() {
            *slot = self.cells[Self::line_cell(direction, index, i)];
        }
        line
    }

    /// Write back a line produced for `direction`, undoing the orientation
    /// applied by [`Grid::line`].
    pub fn set_line(&mut self, direction: Direction, index: usize, line: &Line) {
        for (i, &value) in line.iter().enumerate() {
            self.cells[Self::line_cell(direction, index, i)] = value;
        }
    }

    #[inline(always)]
    fn line_cell(direction: Direction, index: usize, i: usize) -> usize {
        let pos = if direction.is_reversed() {
            GRID_SIZE - 1 - i
        } else {
            i
        };
        if direction.is_vertical() {
            pos * GRID_SIZE + index
        } else {
            index * GRID_SIZE + pos
        }
    }

    /// Positions of all empty cells in row-major order.
    ///
    /// Stack-only; never allocates.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of non-empty cells
    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check whether any cell holds exactly `value`
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Mirror left-to-right (column `c` becomes column `N - 1 - c`)
    pub fn mirror_horizontal(&self) -> Self {
        let mut out = Self::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[row * GRID_SIZE + col] =
                    self.cells[row * GRID_SIZE + GRID_SIZE - 1 - col];
            }
        }
        out
    }

    /// Mirror top-to-bottom (row `r` becomes row `N - 1 - r`)
    pub fn mirror_vertical(&self) -> Self {
        let mut out = Self::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[row * GRID_SIZE + col] =
                    self.cells[(GRID_SIZE - 1 - row) * GRID_SIZE + col];
            }
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
