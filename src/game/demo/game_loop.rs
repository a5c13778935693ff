//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the game in the terminal.
//! Every move or tick command advances the simulation by one tick, as a key press
//! does in the graphical front end.

use std::io::{self, BufRead, Write};

use log::info;

use crate::game::demo::render::print_session;
use crate::game::session::{GameSession, PlayerAction};
use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(PlayerAction),
    Tick,
    Dump,
    Quit,
}

/// Parse one input line: `w`/`a`/`s`/`d` to move, `c x y` to click, `t` to wait,
/// `j` to dump the session as JSON, `q` to quit.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "w" => Command::Act(PlayerAction::Move(Direction::Up)),
        "s" => Command::Act(PlayerAction::Move(Direction::Down)),
        "a" => Command::Act(PlayerAction::Move(Direction::Left)),
        "d" => Command::Act(PlayerAction::Move(Direction::Right)),
        "c" => {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            Command::Act(PlayerAction::Click { x, y })
        }
        "t" => Command::Tick,
        "j" => Command::Dump,
        "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Run the dev loop until the input ends, the player quits or the game is won.
pub fn run_game_loop<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Game start! Bring every target home.")?;
    print_session(out, session)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Dump) => {
                let json = session.snapshot_json().map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
                continue;
            }
            Some(Command::Act(PlayerAction::Click { x, y })) => {
                // Clicks do not cost a tick.
                let removed = session.click(x, y);
                writeln!(out, "cleared {removed} at ({x}, {y})")?;
            }
            Some(Command::Act(action)) => {
                session.apply_player_action(action);
                session.advance_tick();
            }
            Some(Command::Tick) => session.advance_tick(),
            None => {
                writeln!(out, "commands: w a s d | c x y | t | j | q")?;
                continue;
            }
        }
        print_session(out, session)?;

        if session.is_game_over() {
            info!("[Session] {} won with score {}", session.session_id(), session.current_score());
            writeln!(out, "Everyone is home. Final score: {}", session.current_score())?;
            break;
        }
    }
    Ok(())
}
