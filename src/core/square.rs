use std::ops::{Add, Sub};

pub const BOARD_LEN: usize = 8;

/// A (row, column) position. Row 0 is rank 8, column 0 is file a.
///
/// Coordinates are signed so that candidate targets stepping off the edge
/// can still be represented; `in_bounds` tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < BOARD_LEN as i32 &&
        self.col >= 0 && self.col < BOARD_LEN as i32
    }

    /// Index into a row-major grid, if on the board
    pub fn index(&self) -> Option<usize> {
        self.in_bounds()
            .then(|| (self.row as usize) * BOARD_LEN + (self.col as usize))
    }

    /// All 64 on-board squares, rank 8 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_LEN as i32)
            .flat_map(|row| (0..BOARD_LEN as i32).map(move |col| Square::new(row, col)))
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareDelta {
    pub dr: i32,
    pub dc: i32,
}

impl SquareDelta {
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }
}

impl Add<SquareDelta> for Square {
    type Output = Square;

    fn add(self, delta: SquareDelta) -> Self::Output {
        Square {
            row: self.row + delta.dr,
            col: self.col + delta.dc,
        }
    }
}

impl Sub<Square> for Square {
    type Output = SquareDelta;

    fn sub(self, other: Square) -> Self::Output {
        SquareDelta {
            dr: self.row - other.row,
            dc: self.col - other.col,
        }
    }
}

pub const KNIGHT_OFFSETS: [SquareDelta; 8] = [
    SquareDelta::new(-2, -1),
    SquareDelta::new(-2, 1),
    SquareDelta::new(-1, 2),
    SquareDelta::new(1, 2),
    SquareDelta::new(2, 1),
    SquareDelta::new(2, -1),
    SquareDelta::new(1, -2),
    SquareDelta::new(-1, -2),
];

pub const KING_OFFSETS: [SquareDelta; 8] = [
    SquareDelta::new(-1, -1),
    SquareDelta::new(-1, 0),
    SquareDelta::new(-1, 1),
    SquareDelta::new(0, -1),
    SquareDelta::new(0, 1),
    SquareDelta::new(1, -1),
    SquareDelta::new(1, 0),
    SquareDelta::new(1, 1),
];

/// Up-left, up-right, down-left, down-right
pub const BISHOP_DIRS: [SquareDelta; 4] = [
    SquareDelta::new(-1, -1),
    SquareDelta::new(-1, 1),
    SquareDelta::new(1, -1),
    SquareDelta::new(1, 1),
];

/// Up, down, left, right
pub const ROOK_DIRS: [SquareDelta; 4] = [
    SquareDelta::new(-1, 0),
    SquareDelta::new(1, 0),
    SquareDelta::new(0, -1),
    SquareDelta::new(0, 1),
];

pub const QUEEN_DIRS: [SquareDelta; 8] = [
    BISHOP_DIRS[0],
    BISHOP_DIRS[1],
    BISHOP_DIRS[2],
    BISHOP_DIRS[3],
    ROOK_DIRS[0],
    ROOK_DIRS[1],
    ROOK_DIRS[2],
    ROOK_DIRS[3],
];
