//! Self-play data generation.
//!
//! This module turns games into labeled board states for training.
//!
//! ## Overview
//!
//! - **MoveSource**: random or heuristic move choice, injected into the driver
//! - **GameDriver**: runs one game, keeps per-move snapshots, detects the end
//! - **GameRecord**: a finished game; yields the board `k` plies before the end
//! - **BalancedSampler**: plays games until each (starter, winner) bucket is full
//! - **simulate_games**: fixed-size batches, sequential or parallel
//!
//! ## Usage
//!
//! ```
//! use hex_selfplay::core::{GameRng, PlayMode, SimConfig};
//! use hex_selfplay::training::BalancedSampler;
//!
//! let config = SimConfig::default()
//!     .with_board_size(3)
//!     .with_play_mode(PlayMode::Random)
//!     .with_target_per_bucket(2);
//!
//! let mut rng = GameRng::new(config.seed);
//! let dataset = BalancedSampler::new(config).run(&mut rng).unwrap();
//! assert_eq!(dataset.examples.len(), 8);
//! ```

pub mod batch;
pub mod driver;
pub mod example;
pub mod move_source;
pub mod sampler;

// Re-export main types
pub use batch::{simulate_games, simulate_games_parallel, BatchResult, BatchSummary};
pub use driver::{play_game, GameDriver, GameRecord};
pub use example::{LabeledExample, Scenario};
pub use move_source::{move_source, HeuristicPlay, MoveSource, RandomPlay};
pub use sampler::{BalancedDataset, BalancedSampler, ScenarioCounts};
