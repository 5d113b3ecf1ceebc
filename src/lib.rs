//! Chess move generation for a single square.
//!
//! Given a board and a square, list the moves the piece there may make under
//! its movement rules, encoded as notation strings such as `Ng1-f3`,
//! `Bc4xf7`, `e5xd6ep` or `a7-a8=`. Checks and pins are not considered.

pub mod core;
pub mod engine;
pub mod protocol;

// Re-export commonly used items
pub use crate::core::{Board, Color, Piece, PieceKind, Rules, RULES};
pub use engine::Engine;
