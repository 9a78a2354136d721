//! Terminal rendering for the 2048 session.
//!
//! Rendering is split in two halves:
//! - [`GameView`] turns a [`core::SessionSnapshot`] into a [`FrameBuffer`]
//!   (pure, unit-testable)
//! - [`TerminalRenderer`] flushes framebuffers to the terminal, redrawing
//!   only the runs of cells that changed since the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
