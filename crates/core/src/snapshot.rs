use serde::{Deserialize, Serialize};

use crate::session::SessionStatus;
use crate::types::{Tile, GRID_SIZE};

/// Plain copy of everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub grid: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub high_score: u32,
    pub moves: u32,
    pub won: bool,
    pub game_over: bool,
    pub status: SessionStatus,
    pub max_tile: Tile,
    pub episode_id: u32,
    pub seed: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.high_score = 0;
        self.moves = 0;
        self.won = false;
        self.game_over = false;
        self.status = SessionStatus::Playing;
        self.max_tile = 0;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            high_score: 0,
            moves: 0,
            won: false,
            game_over: false,
            status: SessionStatus::Playing,
            max_tile: 0,
            episode_id: 0,
            seed: 0,
        }
    }
}
