//! Board representation and movement rules

pub mod board;
pub mod color;
pub mod convert;
pub mod move_gen;
pub mod notation;
pub mod piece;
pub mod rules;
pub mod square;

pub use board::Board;
pub use color::{Color, ColorArray};
pub use convert::{FromIndex, ToIndex};
pub use piece::{Piece, PieceKind};
pub use rules::{Rules, RULES};
pub use square::{Square, SquareDelta};
