//! Protocol command execution

use std::io::Write;
use anyhow::Result;

use crate::engine::Engine;

use super::command::{Command, PositionSpec};

/// Whether the driver should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle a protocol command, writing replies to `out`
pub fn handle_command(cmd: &Command, engine: &mut Engine, out: &mut impl Write) -> Result<Flow> {
    match cmd {
        Command::IsReady => {
            writeln!(out, "readyok")?;
        }
        Command::Position(PositionSpec::StartPos { last_move }) => {
            engine.reset_board();
            engine.set_last_move(last_move.clone());
        }
        Command::Position(PositionSpec::Fen(fen)) => {
            engine.set_fen(fen)?;
        }
        Command::Moves(square) => {
            let moves = engine.moves(square)?;
            write_moves(out, &moves)?;
        }
        Command::AllMoves(color) => {
            write_moves(out, &engine.moves_for(*color))?;
        }
        Command::Board => {
            write!(out, "{}", engine.board)?;
        }
        Command::Fen => {
            writeln!(out, "fen {}", engine.board.to_fen())?;
        }
        Command::SetOption { name, value } => {
            engine.set_option(name, value)?;
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    out.flush()?;
    Ok(Flow::Continue)
}

fn write_moves(out: &mut impl Write, moves: &[String]) -> Result<()> {
    write!(out, "moves")?;
    for notation in moves {
        write!(out, " {}", notation)?;
    }
    writeln!(out)?;
    Ok(())
}
