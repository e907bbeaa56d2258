//! Core types: colors, cells, the grid, game state, RNG, configuration, errors.
//!
//! Everything here is pure storage and bookkeeping. Rules and heuristics
//! live in `rules` and `heuristic`.

pub mod color;
pub mod grid;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use color::{Cell, Color};
pub use grid::{Grid, Position, DIRECTIONS, MAX_BOARD_SIZE};
pub use rng::{GameRng, GameRngState, JITTER_SCALE};
pub use config::{PlayMode, SimConfig, DEFAULT_RELAXATION_ROUNDS};
pub use state::GameState;
pub use error::{ConfigError, DatasetError, Error, MoveError, Result};
