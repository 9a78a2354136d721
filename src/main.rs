//! Terminal 2048 runner (default binary).
//!
//! Presentation only: it renders session snapshots with the framebuffer
//! renderer and feeds key presses to `GameSession::apply_action`. All rules
//! live in `tui-2048-core`.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_2048::core::GameSession;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::RunnerConfig;

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    init_logging(&config)?;
    info!("starting with seed {}", config.seed);

    let mut session = GameSession::new(config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "score {}  best {}  moves {}  seed {}",
        session.score(),
        session.high_score(),
        session.moves(),
        session.seed()
    );
    Ok(())
}

fn init_logging(config: &RunnerConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Moves are discrete; block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
