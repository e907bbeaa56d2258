//! Labeled examples and the scenario they belong to.
//!
//! A labeled example is one board state paired with the eventual winner.
//! Its persisted row is the board's N² cell codes followed by the winner code.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Grid};

/// Outcome category: who moved first and who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Scenario {
    pub starting: Color,
    pub winner: Color,
}

impl Scenario {
    /// All four scenarios in reporting order.
    pub const ALL: [Scenario; 4] = [
        Scenario::new(Color::Red, Color::Red),
        Scenario::new(Color::Red, Color::Blue),
        Scenario::new(Color::Blue, Color::Blue),
        Scenario::new(Color::Blue, Color::Red),
    ];

    #[must_use]
    pub const fn new(starting: Color, winner: Color) -> Self {
        Self { starting, winner }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} starts, {} wins", self.starting, self.winner)
    }
}

/// A board state labeled with the game's winner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Board `lookback` plies before the winning move (inclusive of it).
    pub board: Grid,

    /// Winner of the game the board came from.
    pub winner: Color,

    /// Side that moved first in that game.
    pub starting_color: Color,

    /// Total moves in the game.
    pub game_length: usize,

    /// Plies between `board` and the end of the game.
    pub lookback: usize,
}

impl LabeledExample {
    /// The (starting color, winner) bucket of this example.
    #[must_use]
    pub fn scenario(&self) -> Scenario {
        Scenario::new(self.starting_color, self.winner)
    }

    /// Persisted row: cell codes in row-major order, then the winner code.
    #[must_use]
    pub fn to_row(&self) -> Vec<i8> {
        let mut row = self.board.to_codes();
        row.push(self.winner.code());
        row
    }
}
