use num_derive::{FromPrimitive, ToPrimitive};
use std::ops::{Index, IndexMut, Not};

/// Color of a piece; white moves up the board (towards row 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn all() -> [Color; 2] {
        [Color::White, Color::Black]
    }

    pub fn opponent(self) -> Self {
        !self
    }

    fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Array indexed by piece color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorArray<T> {
    pub values: [T; 2],
}

impl<T> ColorArray<T> {
    pub const fn new(white: T, black: T) -> Self {
        Self {
            values: [white, black],
        }
    }

    pub fn get(&self, color: Color) -> &T {
        &self.values[color.idx()]
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.values[color.idx()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Color> for ColorArray<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorArray<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
