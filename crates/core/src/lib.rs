//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the 2048 sliding-tile puzzle.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a [`Grid`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Grids are `Copy` and moves never allocate
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with line extraction and mirroring
//! - [`line`]: Compaction and merge-once rule for a single line
//! - [`mover`]: Applies the line rule across the grid for each direction
//! - [`spawner`]: Random 2/4 tile placement
//! - [`terminal`]: No-moves-remaining detection
//! - [`session`]: Score, high score, win and game-over flags per turn
//! - [`snapshot`]: Copyable view of a session for rendering
//!
//! # Game Rules
//!
//! - **Slide**: Tiles move as far as possible in the chosen direction
//! - **Merge once**: Two equal tiles merge into their sum; a merged tile does
//!   not merge again in the same move
//! - **Score**: Each merge adds the new tile's value
//! - **Spawn**: Every move that changes the grid adds a 2 (90%) or 4 (10%)
//! - **Win**: Reaching 2048 sets a sticky flag; play continues
//! - **Game over**: No empty cell and no equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameSession::new(12345);
//! for dir in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
//!     game.apply_move(dir);
//! }
//!
//! assert!(game.high_score() >= game.score());
//! assert!(game.grid().count_tiles() >= 2);
//! ```

pub mod grid;
pub mod line;
pub mod mover;
pub mod session;
pub mod snapshot;
pub mod spawner;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, GridError, Line};
pub use line::{compact_line, LineOutcome};
pub use mover::{can_move, shift, MoveOutcome};
pub use session::{GameSession, SessionStatus, TurnOutcome};
pub use snapshot::SessionSnapshot;
pub use spawner::{spawn_random_tile, SpawnError, SpawnedTile};
pub use terminal::{has_empty_cell, has_mergeable_pair, is_game_over};
