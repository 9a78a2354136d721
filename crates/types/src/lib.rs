//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Size**: 4x4 cells, row-major
//! - **Rows** are indexed top to bottom, **columns** left to right
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per row and per column |
//! | `CELL_COUNT` | 16 | Total number of cells |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `MAX_TILE` | 131072 | Largest tile; it does not merge further |
//! | `START_TILES` | 2 | Tiles spawned on a fresh grid |
//! | `FOUR_PROBABILITY` | 0.1 | Chance that a spawned tile is a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("LEFT").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(!dir.is_reversed());
//!
//! // Parse game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Cells per row and per column
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Reaching this tile value sets the (sticky) won flag
pub const WIN_TILE: Tile = 2048;

/// Largest tile a 4x4 grid can hold (2^17). Two of these never merge.
pub const MAX_TILE: Tile = 1 << 17;

/// Number of random tiles placed on a fresh grid
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is a 4 rather than a 2
pub const FOUR_PROBABILITY: f64 = 0.1;

/// A cell value: 0 is empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Direction of travel for a move.
///
/// `Left` and `Up` travel toward decreasing index, `Right` and `Down`
/// toward increasing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True for moves that operate on columns (Up/Down).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for moves that travel toward increasing index (Right/Down).
    ///
    /// Lines are reversed before and after compaction for these directions.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Actions a front end can apply to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in the given direction
    Move(Direction),
    /// Start a fresh game (high score is kept)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}
