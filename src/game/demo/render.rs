//! Game rendering for the terminal dev loop.
//!
//! This module prints the grid and session status for debugging/demo.

use std::io::{self, Write};

use crate::game::session::GameSession;
use crate::game::systems::{render_ascii, render_status};

/// Print the grid followed by the status line.
pub fn print_session<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    write!(out, "{}", render_ascii(session.world()))?;
    writeln!(out, "{}", render_status(session))?;
    writeln!(out)
}
