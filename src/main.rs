//! Terminal SnekByte runner (default binary).
//!
//! Cooperative event/tick loop: drain pending key events into the session,
//! advance the simulation once per speed-derived interval, render a frame.
//! The wait for the next tick is a poll timeout, not a busy loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use snekbyte::core::GameConfig;
use snekbyte::input::{map_key, should_quit};
use snekbyte::session::Session;
use snekbyte::term::{GameView, TerminalRenderer, Viewport};
use snekbyte::types::SessionStatus;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);

    let mut session = Session::new(GameConfig::default(), seed);
    let mut view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        term.draw(&fb)?;

        if session.status() == SessionStatus::Quitting {
            return Ok(());
        }

        // Input with timeout until the next tick.
        let interval = Duration::from_millis(session.tick_interval_ms() as u64);
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = map_key(session.status(), key.code) {
                        session.handle_intent(intent);
                    }
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
