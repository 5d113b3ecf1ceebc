use anyhow::{bail, Result};
use tracing::{debug, warn};

use crate::core::{Board, Color, RULES};

use super::options::EngineOptions;

/// Engine owns the current position and answers move queries for a driver
pub struct Engine {
    pub board: Board<'static>,
    pub options: EngineOptions,
}

impl Engine {
    /// Create a new engine on the starting position with default options
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            options: EngineOptions::default(),
        }
    }

    pub fn reset_board(&mut self) {
        self.board = Board::default();
        debug!("reset to starting position");
    }

    /// Replace the position with one parsed from FEN placement (plus optional last move)
    pub fn set_fen(&mut self, fen: &str) -> Result<()> {
        self.board = Board::from_fen(fen, &RULES)?;
        debug!(fen = %self.board.to_fen(), "position set");
        Ok(())
    }

    pub fn set_last_move(&mut self, notation: Option<String>) {
        debug!(?notation, "last move set");
        self.board.set_last_move(notation);
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)?;
        colored::control::set_override(self.options.color);
        Ok(())
    }

    /// Moves of the piece on `label`, rejecting squares a player could not pick
    pub fn moves(&self, label: &str) -> Result<Vec<String>> {
        if self.board.rules.is_out_of_bounds(label) {
            warn!(square = label, "rejected square");
            bail!("Position is out of bounds");
        }
        if self.board.is_empty(label) {
            warn!(square = label, "rejected square");
            bail!("Position [{}] is empty", label);
        }

        Ok(self.board.available_moves(label))
    }

    pub fn moves_for(&self, color: Color) -> Vec<String> {
        self.board.moves_for(color)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
