//! GameView: maps `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionSnapshot, SessionStatus};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, GRID_SIZE};

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_BG: Rgb = Rgb::new(187, 173, 160);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns (including a one-column gutter).
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for a 4-digit value with padding and roughly
        // compensates for the terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered grid in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(GRID_BG, GRID_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, values) in snap.grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            SessionStatus::GameOver => {
                let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 20, 20)).bold();
                let mid_y = start_y.saturating_add(frame_h / 2);
                fb.put_str_centered(start_x, mid_y.saturating_sub(1), frame_w, " GAME OVER ", style);
                fb.put_str_centered(start_x, mid_y, frame_w, " press r to restart ", style);
            }
            SessionStatus::Won => {
                let style = CellStyle::new(Rgb::new(255, 215, 0), PANEL_BG).bold();
                fb.put_str_centered(start_x, start_y, frame_w, " YOU WIN! ", style);
            }
            SessionStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: Tile) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        // Last column of each cell is the gutter.
        let w = self.cell_w - 1;
        let style = tile_style(value);
        fb.fill_rect(px, py, w, self.cell_h, ' ', style);

        let mid_y = py + self.cell_h / 2;
        if value == 0 {
            fb.put_str_centered(px, mid_y, w, "·", style.dim());
        } else {
            let mut digits = [0u8; 10];
            fb.put_str_centered(px, mid_y, w, format_tile(value, &mut digits), style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("BEST", snap.high_score),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/wasd move", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

/// Render a tile value into `buf` and return it as text.
fn format_tile(value: Tile, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("?")
}

/// Classic 2048 palette; values past 2048 share one colour.
fn tile_style(value: Tile) -> CellStyle {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    let (bg, fg) = match value {
        0 => (Rgb::new(205, 193, 180), dark),
        2 => (Rgb::new(238, 228, 218), dark),
        4 => (Rgb::new(237, 224, 200), dark),
        8 => (Rgb::new(242, 177, 121), light),
        16 => (Rgb::new(245, 149, 99), light),
        32 => (Rgb::new(246, 124, 95), light),
        64 => (Rgb::new(246, 94, 59), light),
        128 => (Rgb::new(237, 207, 114), light),
        256 => (Rgb::new(237, 204, 97), light),
        512 => (Rgb::new(237, 200, 80), light),
        1024 => (Rgb::new(237, 197, 63), light),
        2048 => (Rgb::new(237, 194, 46), light),
        _ => (Rgb::new(60, 58, 50), light),
    };
    let style = CellStyle::new(fg, bg);
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}
