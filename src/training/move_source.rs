//! Move sources: interchangeable strategies feeding the game driver.
//!
//! - `RandomPlay`: uniform over empty cells
//! - `HeuristicPlay`: potential field + greedy selection
//!
//! Both only ever offer empty cells, and both return `None` on a full board.

use crate::core::{Color, GameRng, Grid, PlayMode, Position, DEFAULT_RELAXATION_ROUNDS};
use crate::heuristic::{compute_potentials, select_move};

/// Strategy choosing the next stone for `color`.
pub trait MoveSource: Send + Sync {
    /// Choose an empty cell, or `None` if there is none.
    fn choose_move(&self, grid: &Grid, color: Color, rng: &mut GameRng) -> Option<Position>;
}

/// Uniformly random empty cell.
#[derive(Clone, Debug, Default)]
pub struct RandomPlay;

impl MoveSource for RandomPlay {
    fn choose_move(&self, grid: &Grid, _color: Color, rng: &mut GameRng) -> Option<Position> {
        let empty: Vec<Position> = grid.empty_cells().collect();
        rng.choose(&empty).copied()
    }
}

/// Lowest potential-field score, recomputed from scratch every move.
#[derive(Clone, Debug)]
pub struct HeuristicPlay {
    rounds: u32,
}

impl HeuristicPlay {
    /// Create with a custom relaxation round budget.
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }

    /// Relaxation rounds per decision.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl Default for HeuristicPlay {
    fn default() -> Self {
        Self::new(DEFAULT_RELAXATION_ROUNDS)
    }
}

impl MoveSource for HeuristicPlay {
    fn choose_move(&self, grid: &Grid, color: Color, rng: &mut GameRng) -> Option<Position> {
        let field = compute_potentials(grid, self.rounds);
        select_move(grid, &field, color, rng)
    }
}

/// Build the move source for a play mode.
pub fn move_source(mode: PlayMode, rounds: u32) -> Box<dyn MoveSource> {
    match mode {
        PlayMode::Random => Box::new(RandomPlay),
        PlayMode::Heuristic => Box::new(HeuristicPlay::new(rounds)),
    }
}
