//! Interactive terminal session: the frame loop that drives the engine.
//!
//! Single-threaded and cooperative. Pending input is drained before each
//! engine tick, so a stop trigger always runs to completion (including the
//! cascaded turn restart) before the next tick fires.

use std::io;
use std::time::{Duration, Instant};

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use swing_core::{MatchLog, Player, TurnEngine};

use crate::render;

/// Frame interval for the swing animation (~60 fps)
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// How an interactive session ended.
pub enum SessionOutcome {
    /// Both players stopped the needle; the match log is complete.
    Completed(MatchLog),
    /// A player quit before the match finished; nothing was recorded.
    Aborted,
}

/// Puts the terminal into raw mode on construction and restores it on drop,
/// error paths included.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run a full interactive match and return its recorded log.
///
/// Key bindings: 'a' stops player 1, 'l' stops player 2, 'q' or Esc aborts.
/// Triggers for the wrong player are ignored inside the engine, not here.
pub fn run_match(game_id: u32) -> Result<SessionOutcome, Box<dyn std::error::Error>> {
    let _guard = RawTerminal::enter()?;
    let mut stdout = io::stdout();

    let mut engine = TurnEngine::new();
    tracing::info!("Match {} started, player 1 up first", game_id);

    let mut next_tick = Instant::now() + TICK_INTERVAL;

    loop {
        render::draw(&mut stdout, &engine)?;

        if engine.is_finished() {
            break;
        }

        // Drain input until the next frame is due.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        report_stop(engine.stop_turn(Player::One));
                    }
                    KeyCode::Char('l') | KeyCode::Char('L') => {
                        report_stop(engine.stop_turn(Player::Two));
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        tracing::info!("Match {} aborted", game_id);
                        return Ok(SessionOutcome::Aborted);
                    }
                    _ => {}
                },
                _ => {}
            }
            if engine.is_finished() {
                break;
            }
        }

        if Instant::now() >= next_tick {
            engine.tick();
            next_tick += TICK_INTERVAL;
        }
    }

    // Final frame stays up until dismissed.
    wait_for_key()?;

    tracing::info!("Match {} finished", game_id);
    Ok(SessionOutcome::Completed(engine.into_log(game_id)))
}

fn report_stop(result: Option<swing_core::TurnResult>) {
    if let Some(result) = result {
        tracing::info!(
            "Player {} stopped at {}° for {} points",
            result.player.number(),
            result.angle,
            result.score
        );
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
