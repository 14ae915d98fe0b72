//! Terminal runner (default binary).
//!
//! Owns everything the core deliberately does not: the clock, the input
//! loop, and the screen. Gravity ticks and key presses are serialized
//! into the single `GameState` from this one thread; the cadence is
//! re-read from the core after every tick because line clears speed it
//! up.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{is_restart, map_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(rand::random());
    let view = GameView::default();

    let start = Instant::now();
    let mut next_drop = game.gravity_interval_ms();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input, with a timeout that wakes us for the next gravity step.
        let now = start.elapsed().as_millis() as u64;
        let timeout = Duration::from_millis(next_drop.saturating_sub(now));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        game.reset();
                        next_drop = start.elapsed().as_millis() as u64 + game.gravity_interval_ms();
                        continue;
                    }
                    if let Some(command) = map_key_event(key) {
                        game.handle_input(command, start.elapsed().as_millis() as u64);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now = start.elapsed().as_millis() as u64;
        if now >= next_drop {
            game.tick(now);
            next_drop = now + game.gravity_interval_ms();
        }
    }
}
