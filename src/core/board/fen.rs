use anyhow::{bail, ensure, Context, Result};

use crate::core::{
    piece::Piece,
    rules::Rules,
    square::{Square, BOARD_LEN},
};

use super::Board;

const NO_LAST_MOVE: &str = "-";

impl<'r> Board<'r> {
    /// Convert the board to FEN piece placement, followed by the last move if any
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..BOARD_LEN as i32 {
            let mut empty_squares = 0;
            for col in 0..BOARD_LEN as i32 {
                if let Some(piece) = self.piece_at_coord(Square::new(row, col)) {
                    if empty_squares > 0 {
                        fen.push_str(&empty_squares.to_string());
                        empty_squares = 0;
                    }
                    fen.push(piece.to_fen_char());
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares > 0 {
                fen.push_str(&empty_squares.to_string());
            }
            if row < (BOARD_LEN - 1) as i32 {
                fen.push('/');
            }
        }

        if let Some(last_move) = self.last_move() {
            fen.push(' ');
            fen.push_str(last_move);
        }
        fen
    }

    /// Create a board from FEN piece placement and an optional last move (`-` for none)
    pub fn from_fen(fen: &str, rules: &'r Rules) -> Result<Self> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().context("Missing piece placement")?;

        let mut board = Board::new(rules);
        let ranks: Vec<_> = placement.split('/').collect();
        ensure!(
            ranks.len() == BOARD_LEN,
            "Expected {} ranks in placement, found {}",
            BOARD_LEN,
            ranks.len()
        );

        for (row, rank) in ranks.into_iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    ensure!((1..=BOARD_LEN as u32).contains(&skip), "Invalid empty run: {}", c);
                    col += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .with_context(|| format!("Invalid FEN char: {}", c))?;
                    ensure!(col < BOARD_LEN, "Rank {} overflows the board", rank);
                    board.grid[row][col] = Some(piece);
                    col += 1;
                }
            }
            ensure!(col == BOARD_LEN, "Rank {} covers {} squares", rank, col);
        }

        board.last_move = match parts.next() {
            None | Some(NO_LAST_MOVE) => None,
            Some(notation) => Some(notation.to_string()),
        };

        if let Some(extra) = parts.next() {
            bail!("Unexpected trailing field: {}", extra);
        }
        Ok(board)
    }
}
