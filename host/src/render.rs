//! Needle gauge rendering for the terminal session.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use swing_core::constants::SWING_MIN_DEG;
use swing_core::{Player, TurnEngine};

/// Degrees of swing covered by one gauge cell
const GAUGE_CELL_DEG: i32 = 4;

/// Gauge track width in cells, bullseye in the last cell
const GAUGE_WIDTH: usize = 46;

pub fn draw(out: &mut impl Write, engine: &TurnEngine) -> io::Result<()> {
    let state = engine.state();

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("SWING - stop the needle on the bullseye")
    )?;

    queue!(
        out,
        MoveTo(0, 2),
        Print(format!("  -90 {} +90", gauge_line(engine.angle())))
    )?;
    queue!(
        out,
        MoveTo(0, 3),
        Print(format!("  angle: {:>4}", engine.angle()))
    )?;

    queue!(
        out,
        MoveTo(0, 5),
        Print(format!("  Player 1 [a]: {:>3}", state.scores.player_one))
    )?;
    queue!(
        out,
        MoveTo(0, 6),
        Print(format!("  Player 2 [l]: {:>3}", state.scores.player_two))
    )?;

    let status = match engine.winner() {
        Some(winner) => format!("{}  (press any key to exit)", winner),
        None => format!(
            "Player {}, press '{}' to stop the needle  ('q' quits)",
            state.current_player.number(),
            stop_key(state.current_player)
        ),
    };
    queue!(out, MoveTo(0, 8), Print(format!("  {}", status)))?;

    out.flush()
}

fn stop_key(player: Player) -> char {
    match player {
        Player::One => 'a',
        Player::Two => 'l',
    }
}

/// The needle marker on a fixed-width track. The bullseye cell is the right
/// edge of the track.
fn gauge_line(angle: i32) -> String {
    let pos = ((angle - SWING_MIN_DEG) / GAUGE_CELL_DEG) as usize;
    let mut cells = vec!['-'; GAUGE_WIDTH];
    cells[GAUGE_WIDTH - 1] = '*';
    cells[pos.min(GAUGE_WIDTH - 1)] = '|';
    format!("[{}]", cells.iter().collect::<String>())
}
