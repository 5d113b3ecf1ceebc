//! Rule constants and the square-label codec

use std::collections::HashMap;
use lazy_static::lazy_static;

use super::{
    color::{Color, ColorArray},
    square::{Square, BOARD_LEN},
};

pub const FILES: [char; BOARD_LEN] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
pub const RANKS: [char; BOARD_LEN] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// Immutable rule configuration shared by the codec and the move generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub file_to_column: HashMap<char, i32>,
    pub rank_to_row: HashMap<char, i32>,
    pub pawn_start_row: ColorArray<i32>,
    pub promotion_row: ColorArray<i32>,
    /// Row step of a pawn advance
    pub pawn_direction: ColorArray<i32>,
}

lazy_static! {
    pub static ref RULES: Rules = Rules::standard();
}

impl Rules {
    pub fn standard() -> Self {
        Self {
            file_to_column: FILES.iter().zip(0..).map(|(&f, c)| (f, c)).collect(),
            rank_to_row: RANKS.iter().zip(0..).map(|(&r, row)| (r, row)).collect(),
            pawn_start_row: ColorArray::new(6, 1),
            promotion_row: ColorArray::new(0, 7),
            pawn_direction: ColorArray::new(-1, 1),
        }
    }

    /// Parse a label like "e4" into its (row, column) square
    pub fn label_to_coord(&self, label: &str) -> Option<Square> {
        let mut chars = label.chars();
        let (file, rank) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }

        let col = *self.file_to_column.get(&file)?;
        let row = *self.rank_to_row.get(&rank)?;
        Some(Square::new(row, col))
    }

    /// Label of an on-board (row, column) pair
    pub fn coord_to_label(&self, row: i32, col: i32) -> Option<String> {
        let square = Square::new(row, col);
        if !square.in_bounds() {
            return None;
        }

        let mut label = String::with_capacity(2);
        label.push(FILES[col as usize]);
        label.push(RANKS[row as usize]);
        Some(label)
    }

    pub fn square_label(&self, square: Square) -> Option<String> {
        self.coord_to_label(square.row, square.col)
    }

    pub fn is_out_of_bounds(&self, label: &str) -> bool {
        self.label_to_coord(label).is_none()
    }

    pub fn is_pawn_start(&self, color: Color, square: Square) -> bool {
        square.row == self.pawn_start_row[color]
    }

    pub fn is_promotion(&self, color: Color, square: Square) -> bool {
        square.row == self.promotion_row[color]
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
