use std::fmt;
use colored::Colorize;

use crate::core::{
    color::Color,
    piece::Piece,
    rules::{FILES, RANKS},
    square::{Square, BOARD_LEN},
};

use super::Board;

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for file in FILES {
            write!(f, " {} ", file)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_LEN as i32 {
            write!(f, " {} ", RANKS[row as usize])?;
            for col in 0..BOARD_LEN as i32 {
                let cell = match self.piece_at_coord(Square::new(row, col)) {
                    Some(piece) => format!(" {} ", piece),
                    None => "   ".to_string(),
                };

                // a8 is a light square
                let light = (row + col) % 2 == 0;
                let shaded = if light { cell.on_bright_white() } else { cell.on_white() };
                write!(f, "{}", shaded)?;
            }
            writeln!(f)?;
        }

        if let Some(last_move) = self.last_move() {
            writeln!(f, "Last move: {}", last_move)?;
        }
        Ok(())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.glyph().to_string();

        let colored_symbol = match self.color {
            Color::White => symbol.bright_black(),
            Color::Black => symbol.black(),
        };

        write!(f, "{}", colored_symbol)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{piece::PieceKind, rules::RULES};
    use indoc::indoc;

    #[test]
    fn test_plain_board_layout() {
        colored::control::set_override(false);

        let mut board = Board::new(&RULES);
        board.place("e1", Piece::new(PieceKind::King, Color::White));
        board.place("d8", Piece::new(PieceKind::Queen, Color::Black));
        board.set_last_move(Some("Qd7-d8".to_string()));

        let rendered: Vec<String> = board
            .to_string()
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        let expected = indoc! {"
                a  b  c  d  e  f  g  h
             8           ♛
             7
             6
             5
             4
             3
             2
             1              ♚
            Last move: Qd7-d8
        "};
        assert_eq!(rendered.join("\n") + "\n", expected);
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }
}
