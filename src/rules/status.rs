//! Game status for the driver's state machine.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Where a game stands.
///
/// `Drawn` means play stopped with no connection: the board filled, or the
/// move source had nothing to offer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Color),
    Drawn,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Won(c) => Some(*c),
            _ => None,
        }
    }

    /// Persisted winner code: Red = 1, Blue = -1, anything else 0.
    #[must_use]
    pub fn code(&self) -> i8 {
        self.winner().map_or(0, Color::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_queries() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert!(GameStatus::Won(Color::Red).is_terminal());

        assert_eq!(GameStatus::Won(Color::Blue).winner(), Some(Color::Blue));
        assert_eq!(GameStatus::Drawn.winner(), None);

        assert_eq!(GameStatus::Won(Color::Red).code(), 1);
        assert_eq!(GameStatus::Won(Color::Blue).code(), -1);
        assert_eq!(GameStatus::Drawn.code(), 0);
    }
}
