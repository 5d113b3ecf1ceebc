//! Move notation strings.
//!
//! Four shapes are produced:
//!
//! - quiet move: `<letter><source>-<target>`
//! - capture: `<letter><source>x<target>`
//! - en passant: `<letter><source>x<target>ep`
//! - promotion: `<source>-<target>=`
//!
//! Pawns have an empty letter. Every builder yields `None` when either
//! square label is missing.

use super::{rules::Rules, square::Square};

pub const MOVE_SEPARATOR: char = '-';
pub const CAPTURE_SEPARATOR: char = 'x';
pub const EN_PASSANT_SUFFIX: &str = "ep";
pub const PROMOTION_SUFFIX: &str = "=";

pub fn notate_move(letter: &str, source: Option<&str>, target: Option<&str>) -> Option<String> {
    Some(format!("{letter}{}{MOVE_SEPARATOR}{}", source?, target?))
}

pub fn notate_capture(letter: &str, source: Option<&str>, target: Option<&str>) -> Option<String> {
    Some(format!("{letter}{}{CAPTURE_SEPARATOR}{}", source?, target?))
}

pub fn notate_en_passant(letter: &str, source: Option<&str>, target: Option<&str>) -> Option<String> {
    let capture = notate_capture(letter, source, target)?;
    Some(capture + EN_PASSANT_SUFFIX)
}

pub fn notate_promotion(source: Option<&str>, target: Option<&str>) -> Option<String> {
    let quiet = notate_move("", source, target)?;
    Some(quiet + PROMOTION_SUFFIX)
}

/// The destination square of a move: its last two characters, if they name a square
pub fn parse_landing_square(rules: &Rules, notation: &str) -> Option<String> {
    let start = notation.char_indices().rev().nth(1)?.0;
    let label = &notation[start..];
    (!rules.is_out_of_bounds(label)).then(|| label.to_string())
}

/// A two-square pawn advance recovered from move notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleStep {
    pub source: Square,
    /// The square passed over
    pub skipped: Square,
    pub landing: Square,
}

/// Recognize `<source>-<landing>` where both squares share a file two ranks apart
pub fn parse_double_step(rules: &Rules, notation: &str) -> Option<DoubleStep> {
    let (source, landing) = notation.split_once(MOVE_SEPARATOR)?;
    let source = rules.label_to_coord(source)?;
    let landing = rules.label_to_coord(landing)?;

    let delta = landing - source;
    if delta.dc != 0 || delta.dr.abs() != 2 {
        return None;
    }

    let skipped = Square::new(source.row + delta.dr / 2, source.col);
    Some(DoubleStep { source, skipped, landing })
}
