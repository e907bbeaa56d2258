//! Game driver: turn order, history and termination for one game.
//!
//! ## State machine
//!
//! `InProgress` → (move) → `Won(color)` if the mover just connected,
//! `Drawn` if the board is full or the move source has nothing to offer,
//! otherwise `InProgress` with the turn passed.
//!
//! ## History
//!
//! `history[i]` is the board after move `i`; `history[0]` is the empty
//! starting board. Snapshots are O(1) clones of the persistent grid.
//!
//! ## Win detection
//!
//! After each move only the mover's chain through the new stone is walked
//! ([`wins_through`]); a connection cannot appear anywhere else.

use crate::core::{Color, GameRng, GameState, Grid, MoveError, Position};
use crate::rules::{wins_through, GameStatus};

use super::example::LabeledExample;
use super::move_source::MoveSource;

/// Drives one game with a single move source for both sides.
pub struct GameDriver<'a> {
    state: GameState,
    status: GameStatus,
    history: Vec<Grid>,
    source: &'a dyn MoveSource,
}

impl<'a> GameDriver<'a> {
    /// Start a game with a fixed first player.
    pub fn new(size: usize, starting_color: Color, source: &'a dyn MoveSource) -> Self {
        let state = GameState::new(size, starting_color);
        let history = vec![state.grid().clone()];
        Self {
            state,
            status: GameStatus::InProgress,
            history,
            source,
        }
    }

    /// Start a game with the first player chosen uniformly at random.
    pub fn with_random_start(size: usize, source: &'a dyn MoveSource, rng: &mut GameRng) -> Self {
        let starting = if rng.gen_bool(0.5) { Color::Red } else { Color::Blue };
        Self::new(size, starting, source)
    }

    /// Set the swap-rule flag on the underlying state.
    #[must_use]
    pub fn with_swap_rule(mut self, swap_rule: bool) -> Self {
        self.state = self.state.with_swap_rule(swap_rule);
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Board snapshots, indexed by move number.
    #[must_use]
    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    /// Apply a move for the side to play.
    ///
    /// Rejected moves (occupied, off-board, game over) change nothing.
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.state.to_move();
        self.state.play(pos)?;
        self.history.push(self.state.grid().clone());
        log::trace!("move {}: {} plays {}", self.state.move_count(), mover, pos);

        self.status = if wins_through(self.state.grid(), pos) {
            GameStatus::Won(mover)
        } else if self.state.grid().is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        };
        Ok(self.status)
    }

    /// Ask the move source for a move and apply it.
    ///
    /// A terminal game is left as is. A source with no move ends the game
    /// as `Drawn`.
    pub fn step(&mut self, rng: &mut GameRng) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        match self.source.choose_move(self.state.grid(), self.state.to_move(), rng) {
            Some(pos) => self.play(pos),
            None => {
                self.status = GameStatus::Drawn;
                Ok(self.status)
            }
        }
    }

    /// Play until the game ends.
    pub fn run(mut self, rng: &mut GameRng) -> Result<GameRecord, MoveError> {
        while !self.status.is_terminal() {
            self.step(rng)?;
        }
        log::debug!(
            "game over after {} moves: {:?} ({} started)",
            self.state.move_count(),
            self.status,
            self.state.starting_color()
        );
        Ok(self.into_record())
    }

    /// Finish with whatever has been played so far.
    #[must_use]
    pub fn into_record(self) -> GameRecord {
        GameRecord {
            starting_color: self.state.starting_color(),
            status: self.status,
            move_count: self.state.move_count(),
            history: self.history,
        }
    }
}

/// A finished (or abandoned) game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub starting_color: Color,
    pub status: GameStatus,
    pub move_count: usize,
    /// `history[i]` is the board after move `i`.
    pub history: Vec<Grid>,
}

impl GameRecord {
    /// The final board.
    #[must_use]
    pub fn final_board(&self) -> &Grid {
        &self.history[self.move_count]
    }

    /// The board `lookback` plies before the end, if the game lasted that long.
    #[must_use]
    pub fn snapshot_before_end(&self, lookback: usize) -> Option<&Grid> {
        self.move_count
            .checked_sub(lookback)
            .and_then(|i| self.history.get(i))
    }

    /// The labeled example for this game.
    ///
    /// Only won games with at least `lookback` moves yield one.
    #[must_use]
    pub fn labeled_example(&self, lookback: usize) -> Option<LabeledExample> {
        let winner = self.status.winner()?;
        let board = self.snapshot_before_end(lookback)?;
        Some(LabeledExample {
            board: board.clone(),
            winner,
            starting_color: self.starting_color,
            game_length: self.move_count,
            lookback,
        })
    }
}

/// Play one game with a random first player.
pub fn play_game(
    size: usize,
    source: &dyn MoveSource,
    rng: &mut GameRng,
) -> Result<GameRecord, MoveError> {
    GameDriver::with_random_start(size, source, rng).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::{HeuristicPlay, RandomPlay};

    /// Replays a fixed list of moves.
    struct Scripted(Vec<Position>);

    impl MoveSource for Scripted {
        fn choose_move(&self, grid: &Grid, _color: Color, _rng: &mut GameRng) -> Option<Position> {
            self.0.get(grid.stone_count()).copied()
        }
    }

    #[test]
    fn test_game_terminates_with_winner() {
        let source = HeuristicPlay::default();
        let mut rng = GameRng::new(42);
        let record = play_game(5, &source, &mut rng).unwrap();

        assert!(matches!(record.status, GameStatus::Won(_)));
        assert_eq!(record.history.len(), record.move_count + 1);
        assert_eq!(record.final_board().stone_count(), record.move_count);
    }

    #[test]
    fn test_history_counts_match_move_number() {
        let source = RandomPlay;
        let mut rng = GameRng::new(3);
        let record = play_game(4, &source, &mut rng).unwrap();
        for (i, grid) in record.history.iter().enumerate() {
            assert_eq!(grid.stone_count(), i);
        }
    }

    #[test]
    fn test_rejected_move_does_not_advance() {
        let source = RandomPlay;
        let mut driver = GameDriver::new(3, Color::Red, &source);
        driver.play(Position::new(0, 0)).unwrap();

        assert_eq!(
            driver.play(Position::new(0, 0)),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        assert!(driver.play(Position::new(3, 3)).is_err());
        assert_eq!(driver.state().move_count(), 1);
        assert_eq!(driver.history().len(), 2);
        assert_eq!(driver.state().to_move(), Color::Blue);
    }

    #[test]
    fn test_no_moves_after_win() {
        // Red: (0,0), (1,0), (2,0) wins; Blue fills (0,1), (1,1) in between
        let source = Scripted(vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(2, 0),
        ]);
        let mut rng = GameRng::new(0);
        let mut driver = GameDriver::new(3, Color::Red, &source);
        let record_status = loop {
            let status = driver.step(&mut rng).unwrap();
            if status.is_terminal() {
                break status;
            }
        };
        assert_eq!(record_status, GameStatus::Won(Color::Red));
        assert_eq!(driver.play(Position::new(2, 2)), Err(MoveError::GameOver));
        assert_eq!(driver.step(&mut rng), Ok(GameStatus::Won(Color::Red)));
        assert_eq!(driver.state().move_count(), 5);
    }

    #[test]
    fn test_lookback_snapshot() {
        let moves = vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(2, 0),
        ];
        let source = Scripted(moves);
        let mut rng = GameRng::new(0);
        let record = GameDriver::new(3, Color::Red, &source).run(&mut rng).unwrap();
        assert_eq!(record.move_count, 5);

        let example = record.labeled_example(2).unwrap();
        assert_eq!(example.board, record.history[3]);
        assert_eq!(example.board.stone_count(), 3);
        assert_eq!(example.winner, Color::Red);
        assert_eq!(example.scenario().starting, Color::Red);

        assert_eq!(record.labeled_example(0).unwrap().board, *record.final_board());
        assert_eq!(record.labeled_example(5).unwrap().board.stone_count(), 0);
        assert!(record.labeled_example(6).is_none());
    }

    #[test]
    fn test_single_cell_game_wins_on_move_one() {
        let source = RandomPlay;
        let mut rng = GameRng::new(8);
        let record = GameDriver::new(1, Color::Blue, &source).run(&mut rng).unwrap();

        assert_eq!(record.status, GameStatus::Won(Color::Blue));
        assert_eq!(record.move_count, 1);
        assert!(record.labeled_example(2).is_none());
    }

    #[test]
    fn test_exhausted_source_is_a_draw() {
        let source = Scripted(vec![Position::new(1, 1)]);
        let mut rng = GameRng::new(0);
        let record = GameDriver::new(3, Color::Red, &source).run(&mut rng).unwrap();
        assert_eq!(record.status, GameStatus::Drawn);
        assert!(record.labeled_example(0).is_none());
    }
}
