use num_derive::{FromPrimitive, ToPrimitive};

use super::{color::Color, convert::FromIndex};

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

const FEN_CHARS: [char; 6] = ['P', 'N', 'B', 'R', 'Q', 'K'];

impl PieceKind {
    /// Letter prefixed to move notation; pawns have none
    pub fn notation(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => '\u{265F}',
            PieceKind::Knight => '\u{265E}',
            PieceKind::Bishop => '\u{265D}',
            PieceKind::Rook => '\u{265C}',
            PieceKind::Queen => '\u{265B}',
            PieceKind::King => '\u{265A}',
        }
    }

    /// Uppercase FEN character
    pub fn to_fen_char(self) -> char {
        FEN_CHARS[self as usize]
    }

    /// Parse a FEN character, ignoring case
    pub fn from_fen_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        FEN_CHARS
            .iter()
            .position(|&fen| fen == upper)
            .and_then(|idx| PieceKind::from_index(idx).ok())
    }
}

/// A piece on the board. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// True when `other` is a piece of the opposing color; an empty square is never an enemy
    pub fn is_enemy(&self, other: Option<&Piece>) -> bool {
        other.is_some_and(|piece| piece.color != self.color)
    }

    pub fn to_fen_char(&self) -> char {
        match self.color {
            Color::White => self.kind.to_fen_char(),
            Color::Black => self.kind.to_fen_char().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self::new(kind, color))
    }
}
