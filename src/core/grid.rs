//! The N×N Hex board.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a grid for the
//! per-move history is O(1) and snapshots share structure with the live board.
//!
//! ## Adjacency
//!
//! The board is a rhombus. Each cell touches up to six others: the four
//! orthogonal neighbours plus `(r-1, c+1)` and `(r+1, c-1)`.
//!
//! ```
//! use hex_selfplay::core::{Grid, Position};
//!
//! let grid = Grid::new(3);
//! let mut n: Vec<_> = grid.neighbors(Position::new(1, 1)).into_iter().collect();
//! n.sort();
//! assert_eq!(n.len(), 6);
//! assert!(n.contains(&Position::new(0, 2)));
//! assert!(!n.contains(&Position::new(0, 0)));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Cell, Color};
use super::error::MoveError;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 26;

/// Hex neighbour offsets `(d_row, d_col)`.
pub const DIRECTIONS: [(isize, isize); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, 1), (1, -1)];

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size board of three-valued cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vector<Cell>,
    stones: usize,
}

impl Grid {
    /// Create an empty `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        assert!(size <= MAX_BOARD_SIZE, "Board size must be at most {MAX_BOARD_SIZE}");

        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
            stones: 0,
        }
    }

    /// Build a board from row-major cell codes (`0`, `1`, `-1`).
    ///
    /// Returns `None` if the length is not `size * size` or a code is unknown.
    #[must_use]
    pub fn from_codes(size: usize, codes: &[i8]) -> Option<Self> {
        if size == 0 || size > MAX_BOARD_SIZE || codes.len() != size * size {
            return None;
        }
        let cells: Option<Vector<Cell>> = codes.iter().map(|&c| Cell::from_code(c)).collect();
        let cells = cells?;
        let stones = cells.iter().filter(|c| !c.is_empty()).count();
        Some(Self { size, cells, stones })
    }

    /// Parse a board drawn with `.`/`e` (empty), `r`/`R` and `b`/`B`.
    ///
    /// Whitespace is ignored, so the rhombus indentation of `Display` output
    /// parses back unchanged.
    #[must_use]
    pub fn parse(size: usize, text: &str) -> Option<Self> {
        let codes: Option<Vec<i8>> = text
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '.' | 'e' | 'E' => Some(Cell::Empty.code()),
                'r' | 'R' => Some(Cell::Red.code()),
                'b' | 'B' => Some(Cell::Blue.code()),
                _ => None,
            })
            .collect();
        Self::from_codes(size, &codes?)
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.stones == self.size * self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Bounds-checked read.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Read a cell known to be on the board.
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Place a stone on an empty cell.
    ///
    /// Cells are never cleared once set.
    pub fn place(&mut self, pos: Position, color: Color) -> Result<(), MoveError> {
        match self.get(pos) {
            None => Err(MoveError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            }),
            Some(Cell::Empty) => {
                let idx = self.index(pos);
                self.cells.set(idx, color.stone());
                self.stones += 1;
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            }),
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.cell(p).is_empty())
    }

    /// On-board hex neighbours of `pos`.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 6]> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = pos.row.checked_add_signed(dr)?;
                let col = pos.col.checked_add_signed(dc)?;
                let n = Position::new(row, col);
                self.contains(n).then_some(n)
            })
            .collect()
    }

    /// Whether `pos` lies on the edge `color` starts from (top for Red, left for Blue).
    #[must_use]
    pub fn on_start_edge(&self, pos: Position, color: Color) -> bool {
        match color {
            Color::Red => pos.row == 0,
            Color::Blue => pos.col == 0,
        }
    }

    /// Whether `pos` lies on the edge `color` must reach (bottom for Red, right for Blue).
    #[must_use]
    pub fn on_end_edge(&self, pos: Position, color: Color) -> bool {
        match color {
            Color::Red => pos.row == self.size - 1,
            Color::Blue => pos.col == self.size - 1,
        }
    }

    /// Row-major cell codes, the persisted board encoding.
    #[must_use]
    pub fn to_codes(&self) -> Vec<i8> {
        self.cells.iter().map(|c| c.code()).collect()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| self.cell(Position::new(row, col)).symbol().to_string())
                .collect();
            writeln!(f, "{}{}", " ".repeat(row), line.join(" "))?;
        }
        Ok(())
    }
}
