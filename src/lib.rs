//! # hex-selfplay
//!
//! Heuristic self-play for the game of Hex, producing balanced datasets of
//! near-terminal board states for training classifiers.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every game draws from a seeded `GameRng`. The same
//!    seed and configuration reproduce the same dataset, sequential or parallel.
//!
//! 2. **Cheap Snapshots**: the grid is an `im-rs` vector, so the per-move
//!    history a game keeps costs O(1) per clone.
//!
//! 3. **Injectable Play**: the driver asks a `MoveSource` for moves. Random and
//!    potential-field heuristic play ship with the crate.
//!
//! ## Modules
//!
//! - `core`: Colors, cells, grid, game state, RNG, configuration, errors
//! - `rules`: Connectivity checks and game status
//! - `heuristic`: Potential field and greedy move selection
//! - `training`: Game driver, lookback examples, balanced sampler, batches
//! - `dataset`: CSV persistence and dataset post-processing

pub mod core;
pub mod rules;
pub mod heuristic;
pub mod training;
pub mod dataset;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, Grid, Position,
    GameRng, GameRngState,
    PlayMode, SimConfig,
    GameState,
    Error, Result,
};

pub use crate::rules::{path_exists, winner, wins_through, GameStatus};

pub use crate::heuristic::{compute_potentials, select_move, Edge, PotentialField};

pub use crate::training::{
    play_game, simulate_games, simulate_games_parallel,
    BalancedDataset, BalancedSampler, GameDriver, GameRecord,
    HeuristicPlay, LabeledExample, MoveSource, RandomPlay, Scenario,
};

pub use crate::dataset::{read_rows, save_examples, DatasetRow, DatasetWriter};
