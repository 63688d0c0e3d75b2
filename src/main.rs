//! Terminal blockfall runner.
//!
//! Hosts the single-threaded loop: render the current frame, drain pending
//! key events (each dispatched to the engine immediately, in arrival order),
//! and advance the engine once per tick at 60 ticks per second.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::engine::Engine;
use blockfall::input::map_key_event;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitReason {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore the terminal before reporting anything.
    let _ = term.exit();

    if let Ok(ExitReason::GameOver) = result {
        println!("Game Over!");
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer) -> Result<ExitReason> {
    let mut engine = Engine::new(clock_seed());
    let view = GameView::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(engine.state(), Viewport::new(w, h));
        term.draw(&frame)?;

        if engine.is_game_over() {
            return Ok(ExitReason::GameOver);
        }

        // Wait for input until the next tick is due, then drain whatever
        // queued up, oldest first.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            loop {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match map_key_event(key) {
                            Some(Command::Quit) => return Ok(ExitReason::Quit),
                            Some(command) => engine.handle(command),
                            None => {}
                        }
                    }
                }
                if engine.is_game_over() || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Gravity tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}

/// Seed the piece picker from the wall clock, so every run plays a
/// different sequence. Tests construct engines with explicit seeds instead.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
