//! Board representation and occupancy queries

pub mod display;
pub mod fen;

use tracing::trace;

use super::{
    color::Color,
    move_gen,
    piece::{Piece, PieceKind},
    rules::{Rules, RULES},
    square::{Square, BOARD_LEN},
};

const BACK_RANK: [PieceKind; BOARD_LEN] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces plus the notation of the last move played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'r> {
    pub rules: &'r Rules,
    grid: [[Option<Piece>; BOARD_LEN]; BOARD_LEN],
    last_move: Option<String>,
}

impl<'r> Board<'r> {
    /// Create a new empty board
    pub fn new(rules: &'r Rules) -> Self {
        Self {
            rules,
            grid: [[None; BOARD_LEN]; BOARD_LEN],
            last_move: None,
        }
    }

    /// Create a board in the standard starting position
    pub fn standard(rules: &'r Rules) -> Self {
        let mut board = Self::new(rules);
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(kind, Color::Black));
            board.grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        for color in Color::all() {
            let row = rules.pawn_start_row[color] as usize;
            board.grid[row] = [Some(Piece::new(PieceKind::Pawn, color)); BOARD_LEN];
        }
        board
    }

    /// True if the square is unoccupied or not on the board
    pub fn is_empty(&self, label: &str) -> bool {
        self.piece_at(label).is_none()
    }

    pub fn piece_at(&self, label: &str) -> Option<Piece> {
        self.piece_at_coord(self.rules.label_to_coord(label)?)
    }

    pub fn is_empty_coord(&self, square: Square) -> bool {
        self.piece_at_coord(square).is_none()
    }

    pub fn piece_at_coord(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize]
    }

    /// Candidate moves of the piece on `label`, empty if there is none
    pub fn available_moves(&self, label: &str) -> Vec<String> {
        let Some(square) = self.rules.label_to_coord(label) else {
            return Vec::new();
        };
        let Some(piece) = self.piece_at_coord(square) else {
            return Vec::new();
        };

        let moves = move_gen::available_moves(piece, self, square);
        trace!(square = label, ?piece, count = moves.len(), "generated moves");
        moves
    }

    /// Candidate moves of every piece of `color`, rank 8 first
    pub fn moves_for(&self, color: Color) -> Vec<String> {
        Square::all()
            .filter_map(|square| {
                let piece = self.piece_at_coord(square)?;
                (piece.color == color).then(|| move_gen::available_moves(piece, self, square))
            })
            .flatten()
            .collect()
    }

    pub fn last_move(&self) -> Option<&str> {
        self.last_move.as_deref()
    }

    pub fn set_last_move(&mut self, notation: Option<String>) {
        self.last_move = notation;
    }

    /// Put a piece on a square, returning whatever stood there
    pub fn place(&mut self, label: &str, piece: Piece) -> Option<Piece> {
        let square = self.rules.label_to_coord(label)?;
        self.grid[square.row as usize][square.col as usize].replace(piece)
    }

    pub fn remove(&mut self, label: &str) -> Option<Piece> {
        let square = self.rules.label_to_coord(label)?;
        self.grid[square.row as usize][square.col as usize].take()
    }

    /// Occupied squares with their pieces, rank 8 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| Some((square, self.piece_at_coord(square)?)))
    }
}

impl Default for Board<'static> {
    fn default() -> Self {
        Board::standard(&RULES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let board = Board::default();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn test_standard_pawns() {
        let board = Board::default();
        for col in 0..8 {
            assert_eq!(
                board.piece_at_coord(Square::new(1, col)),
                Some(Piece::new(PieceKind::Pawn, Color::Black))
            );
            assert_eq!(
                board.piece_at_coord(Square::new(6, col)),
                Some(Piece::new(PieceKind::Pawn, Color::White))
            );
        }
    }

    #[test]
    fn test_standard_back_ranks() {
        let board = Board::default();
        assert_eq!(board.piece_at("e1"), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.piece_at("d8"), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board.piece_at("a1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at("g8"), Some(Piece::new(PieceKind::Knight, Color::Black)));
    }

    #[test]
    fn test_is_empty() {
        let board = Board::default();
        assert!(board.is_empty("e4"));
        assert!(!board.is_empty("e2"));
        assert!(board.is_empty("z9"));
        assert!(board.is_empty("e22"));
        assert!(board.is_empty_coord(Square::new(-1, 4)));
    }

    #[test]
    fn test_piece_at_out_of_bounds() {
        let board = Board::default();
        assert_eq!(board.piece_at("i1"), None);
        assert_eq!(board.piece_at_coord(Square::new(8, 8)), None);
    }

    #[test]
    fn test_available_moves_empty_or_invalid_square() {
        let board = Board::default();
        assert!(board.available_moves("e4").is_empty());
        assert!(board.available_moves("q7").is_empty());
        assert!(board.available_moves("").is_empty());
    }

    #[test]
    fn test_starting_position_moves() {
        let board = Board::default();
        assert_eq!(board.available_moves("g1"), vec!["Ng1-f3", "Ng1-h3"]);
        assert!(board.available_moves("a1").is_empty());
        assert_eq!(board.moves_for(Color::White).len(), 20);
        assert_eq!(board.moves_for(Color::Black).len(), 20);
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new(&RULES);
        let queen = Piece::new(PieceKind::Queen, Color::White);

        assert_eq!(board.place("d4", queen), None);
        assert_eq!(board.piece_at("d4"), Some(queen));
        assert_eq!(board.place("z4", queen), None);
        assert_eq!(board.remove("d4"), Some(queen));
        assert!(board.is_empty("d4"));
    }

    #[test]
    fn test_last_move() {
        let mut board = Board::default();
        board.set_last_move(Some("e2-e4".to_string()));
        assert_eq!(board.last_move(), Some("e2-e4"));
        board.set_last_move(None);
        assert_eq!(board.last_move(), None);
    }
}
