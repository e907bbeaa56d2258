//! Game state: the board plus turn bookkeeping.
//!
//! ## Invariants
//!
//! - `move_count` equals the number of stones on the grid
//! - the side to move flips after every accepted move, and only then
//! - a rejected move leaves the state untouched

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::MoveError;
use super::grid::{Grid, Position};

/// Complete state of one game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    to_move: Color,
    starting_color: Color,
    move_count: usize,
    last_move: Option<Position>,

    /// Swap-rule flag. Carried for completeness; outcome logic ignores it.
    pub swap_rule: bool,
}

impl GameState {
    /// Create an empty board with `starting_color` to move.
    #[must_use]
    pub fn new(size: usize, starting_color: Color) -> Self {
        Self {
            grid: Grid::new(size),
            to_move: starting_color,
            starting_color,
            move_count: 0,
            last_move: None,
            swap_rule: false,
        }
    }

    /// Set the swap-rule flag.
    #[must_use]
    pub fn with_swap_rule(mut self, swap_rule: bool) -> Self {
        self.swap_rule = swap_rule;
        self
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The side to play next.
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// The side that played the first move.
    #[must_use]
    pub fn starting_color(&self) -> Color {
        self.starting_color
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The most recently placed stone.
    #[must_use]
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Place a stone for the side to move.
    ///
    /// On success the move counter advances and the turn passes. On error
    /// nothing changes.
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.grid.place(pos, self.to_move)?;
        self.move_count += 1;
        self.last_move = Some(pos);
        self.to_move = self.to_move.opposite();
        Ok(())
    }
}
