//! Game session - owns the grid and sequences one turn per directional input
//!
//! Turn order for `Playing` and `Won`:
//!
//! 1. Slide the grid ([`shift`]).
//! 2. If anything moved: apply the grid and score, spawn a tile, check for a
//!    2048 tile (only until the first win) and raise the high score.
//! 3. If nothing moved: evaluate the current grid for game over.
//!
//! Once `game_over` is set, moves are ignored until [`GameSession::restart`].

use log::{debug, error, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::grid::Grid;
use crate::mover::{can_move, shift};
use crate::snapshot::SessionSnapshot;
use crate::spawner::{spawn_random_tile, SpawnedTile};
use crate::terminal::is_game_over;
use crate::types::{Direction, GameAction, START_TILES, WIN_TILE};

/// Coarse session state derived from the sticky flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Playing,
    /// A 2048 tile has appeared; play continues.
    Won,
    /// No move can change the grid; only restart is accepted.
    GameOver,
}

/// What a single directional input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub moved: bool,
    pub score_delta: u32,
    pub spawned: Option<SpawnedTile>,
    pub status: SessionStatus,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    rng: StdRng,
    seed: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: u32,
    /// Best score seen by this session; survives restarts.
    high_score: u32,
    /// Accepted moves in the current episode.
    moves: u32,
    won: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a new session seeded with two random tiles
    pub fn new(seed: u64) -> Self {
        let mut session = Self::from_grid(Grid::new(), seed);
        session.seed_grid();
        session
    }

    /// Create a session around an existing grid without spawning anything.
    ///
    /// Useful for replaying positions and for tests.
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
            seed,
            episode_id: 0,
            score: 0,
            high_score: 0,
            moves: 0,
            won: false,
            game_over: false,
        }
    }

    fn seed_grid(&mut self) {
        for _ in 0..START_TILES {
            if let Err(e) = spawn_random_tile(&mut self.grid, &mut self.rng) {
                error!("failed to seed grid: {}", e);
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn status(&self) -> SessionStatus {
        if self.game_over {
            SessionStatus::GameOver
        } else if self.won {
            SessionStatus::Won
        } else {
            SessionStatus::Playing
        }
    }

    /// Check whether `direction` would change the current grid
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.game_over && can_move(&self.grid, direction)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Apply one directional input.
    ///
    /// Calls on the same session must not overlap; `&mut self` enforces this
    /// for safe callers.
    pub fn apply_move(&mut self, direction: Direction) -> TurnOutcome {
        if self.game_over {
            return self.outcome(false, 0, None);
        }

        let result = shift(&self.grid, direction);
        if !result.moved {
            if is_game_over(&self.grid) {
                self.game_over = true;
                info!(
                    "game over: score={} high_score={} moves={}",
                    self.score, self.high_score, self.moves
                );
            }
            return self.outcome(false, 0, None);
        }

        self.grid = result.grid;
        self.score += result.score_delta;
        self.moves += 1;

        let spawned = match spawn_random_tile(&mut self.grid, &mut self.rng) {
            Ok(tile) => Some(tile),
            Err(e) => {
                // A successful move always frees at least one cell.
                error!("invariant violated after {:?}: {}", direction, e);
                None
            }
        };

        if !self.won && self.grid.contains(WIN_TILE) {
            self.won = true;
            info!("reached {} after {} moves", WIN_TILE, self.moves);
        }

        if self.score > self.high_score {
            self.high_score = self.score;
        }

        debug!(
            "move {} +{} score={} spawned={:?}",
            direction.as_str(),
            result.score_delta,
            self.score,
            spawned
        );

        self.outcome(true, result.score_delta, spawned)
    }

    /// Apply a front-end action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).moved,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start a fresh grid; the high score is preserved
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.grid.clear();
        self.score = 0;
        self.moves = 0;
        self.won = false;
        self.game_over = false;
        self.seed_grid();
        info!(
            "restart: episode={} high_score={}",
            self.episode_id, self.high_score
        );
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.grid = self.grid.to_rows();
        out.score = self.score;
        out.high_score = self.high_score;
        out.moves = self.moves;
        out.won = self.won;
        out.game_over = self.game_over;
        out.status = self.status();
        out.max_tile = self.grid.max_tile();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn outcome(&self, moved: bool, score_delta: u32, spawned: Option<SpawnedTile>) -> TurnOutcome {
        TurnOutcome {
            moved,
            score_delta,
            spawned,
            status: self.status(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
