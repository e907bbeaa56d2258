//! Stone colors and cell values.
//!
//! ## Color
//!
//! Red connects the top and bottom edges, Blue connects left and right.
//!
//! ## Cell
//!
//! Three-valued board cell. Persisted as `0` (empty), `1` (Red), `-1` (Blue).

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Connects top ↔ bottom.
    Red,
    /// Connects left ↔ right.
    Blue,
}

impl Color {
    /// Both colors, Red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Persisted code: Red = 1, Blue = -1.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Blue => -1,
        }
    }

    /// Inverse of [`Color::code`].
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(Color::Red),
            -1 => Some(Color::Blue),
            _ => None,
        }
    }

    /// The cell value of a stone of this color.
    #[must_use]
    pub const fn stone(self) -> Cell {
        match self {
            Color::Red => Cell::Red,
            Color::Blue => Cell::Blue,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// A board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// The color occupying this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Color::Red),
            Cell::Blue => Some(Color::Blue),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Persisted code: Empty = 0, Red = 1, Blue = -1.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Blue => -1,
        }
    }

    /// Inverse of [`Cell::code`].
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Red),
            -1 => Some(Cell::Blue),
            _ => None,
        }
    }

    /// Single-character rendering used by `Grid`'s `Display`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Blue => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Red.opposite(), Color::Blue);
        assert_eq!(Color::Blue.opposite().opposite(), Color::Blue);
    }

    #[test]
    fn test_codes() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Some(color));
            assert_eq!(color.stone().color(), Some(color));
            assert_eq!(color.stone().code(), color.code());
        }
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Cell::from_code(0), Some(Cell::Empty));
        assert_eq!(Cell::from_code(2), None);
    }
}
