//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Moves in 2048 are
//! discrete, so there is no auto-repeat state: every press (or terminal
//! repeat) is one move.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
