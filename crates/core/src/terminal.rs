//! Terminal-state detection
//!
//! A grid is finished when it has no empty cell and no two equal tiles side
//! by side. Checking each cell against its right and bottom neighbour covers
//! every adjacency exactly once. `MAX_TILE` pairs do not count, matching
//! the merge rule.

use crate::grid::Grid;
use crate::types::{GRID_SIZE, MAX_TILE};

/// Check whether any cell is empty
pub fn has_empty_cell(grid: &Grid) -> bool {
    grid.cells().iter().any(|&v| v == 0)
}

/// Check whether two equal non-empty tiles are horizontally or vertically adjacent
pub fn has_mergeable_pair(grid: &Grid) -> bool {
    let cells = grid.cells();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = cells[row * GRID_SIZE + col];
            if value == 0 || value >= MAX_TILE {
                continue;
            }
            if col + 1 < GRID_SIZE && cells[row * GRID_SIZE + col + 1] == value {
                return true;
            }
            if row + 1 < GRID_SIZE && cells[(row + 1) * GRID_SIZE + col] == value {
                return true;
            }
        }
    }
    false
}

/// True when no direction can change the grid
pub fn is_game_over(grid: &Grid) -> bool {
    !(has_empty_cell(grid) || has_mergeable_pair(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mover::can_move;
    use crate::types::Direction;

    fn checkerboard() -> Grid {
        Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap()
    }

    #[test]
    fn test_full_checkerboard_is_game_over() {
        let grid = checkerboard();
        assert!(!has_empty_cell(&grid));
        assert!(!has_mergeable_pair(&grid));
        assert!(is_game_over(&grid));
    }

    #[test]
    fn test_one_hole_is_not_game_over() {
        let mut grid = checkerboard();
        grid.set(2, 1, 0);
        assert!(has_empty_cell(&grid));
        assert!(!is_game_over(&grid));
    }

    #[test]
    fn test_horizontal_pair_keeps_game_alive() {
        let mut grid = checkerboard();
        grid.set(3, 3, 4); // (3, 2) is also 4
        assert!(has_mergeable_pair(&grid));
        assert!(!is_game_over(&grid));
    }

    #[test]
    fn test_vertical_pair_keeps_game_alive() {
        let mut grid = checkerboard();
        grid.set(0, 0, 4); // (1, 0) is also 4
        assert!(has_mergeable_pair(&grid));
        assert!(!is_game_over(&grid));
    }

    #[test]
    fn test_max_tile_pair_does_not_keep_game_alive() {
        let mut grid = checkerboard();
        grid.set(0, 0, MAX_TILE);
        grid.set(0, 1, MAX_TILE);
        assert!(!has_mergeable_pair(&grid));
        assert!(is_game_over(&grid));
    }

    #[test]
    fn test_empty_grid_is_not_game_over() {
        assert!(!is_game_over(&Grid::new()));
        assert!(!has_mergeable_pair(&Grid::new()));
    }

    #[test]
    fn test_game_over_agrees_with_can_move() {
        let grids = [
            checkerboard(),
            Grid::from_rows([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]).unwrap(),
            Grid::from_rows([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 4]]).unwrap(),
            Grid::from_rows([[MAX_TILE; 4]; 4]).unwrap(),
        ];
        for grid in grids {
            let any_move = Direction::ALL.iter().any(|&d| can_move(&grid, d));
            assert_eq!(is_game_over(&grid), !any_move);
        }
    }
}
