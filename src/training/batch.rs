//! Fixed-size batches of independent games, without balancing.
//!
//! Game `i` (0-based) always runs on the `(i + 1)`-th fork of the batch RNG,
//! so the sequential and parallel runners produce the same examples in the
//! same order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Color, GameRng, MoveError, SimConfig};
use crate::rules::GameStatus;

use super::driver::{GameDriver, GameRecord};
use super::example::LabeledExample;
use super::move_source::{move_source, MoveSource};

/// Outcome tallies for a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub red_wins: usize,
    pub blue_wins: usize,
    pub draws: usize,
    pub examples_emitted: usize,
}

impl BatchSummary {
    fn record(&mut self, status: GameStatus, emitted: bool) {
        self.games += 1;
        match status {
            GameStatus::Won(Color::Red) => self.red_wins += 1,
            GameStatus::Won(Color::Blue) => self.blue_wins += 1,
            GameStatus::Drawn | GameStatus::InProgress => self.draws += 1,
        }
        if emitted {
            self.examples_emitted += 1;
        }
    }
}

/// Examples and tallies from one batch.
#[derive(Clone, Debug, Default)]
pub struct BatchResult {
    pub examples: Vec<LabeledExample>,
    pub summary: BatchSummary,
}

impl BatchResult {
    fn push(&mut self, record: &GameRecord, lookback: usize) {
        let example = record.labeled_example(lookback);
        self.summary.record(record.status, example.is_some());
        self.examples.extend(example);
    }
}

fn play_one(
    config: &SimConfig,
    source: &dyn MoveSource,
    rng: &mut GameRng,
) -> Result<GameRecord, MoveError> {
    GameDriver::with_random_start(config.board_size, source, rng)
        .with_swap_rule(config.swap_rule)
        .run(rng)
}

/// Play `config.games` games one after another.
pub fn simulate_games(config: &SimConfig, rng: &mut GameRng) -> Result<BatchResult, MoveError> {
    let source = move_source(config.play_mode, config.relaxation_rounds);
    let mut result = BatchResult::default();

    log::info!("simulating {} games of size {}", config.games, config.board_size);
    for i in 0..config.games {
        let mut game_rng = rng.fork();
        let record = play_one(config, source.as_ref(), &mut game_rng)?;
        result.push(&record, config.lookback);

        if config.progress_interval > 0 && (i + 1) % config.progress_interval == 0 {
            log::info!("{} games simulated...", i + 1);
        }
    }
    log_summary(&result.summary);

    Ok(result)
}

/// Play `config.games` games across the rayon thread pool.
///
/// Produces exactly what [`simulate_games`] would for the same RNG.
pub fn simulate_games_parallel(
    config: &SimConfig,
    rng: &mut GameRng,
) -> Result<BatchResult, MoveError> {
    let source = move_source(config.play_mode, config.relaxation_rounds);
    let seeds: Vec<u64> = (0..config.games).map(|_| rng.fork().seed()).collect();

    log::info!(
        "simulating {} games of size {} on {} threads",
        config.games,
        config.board_size,
        rayon::current_num_threads()
    );
    let records: Vec<GameRecord> = seeds
        .into_par_iter()
        .map(|seed| play_one(config, source.as_ref(), &mut GameRng::new(seed)))
        .collect::<Result<_, _>>()?;

    let mut result = BatchResult::default();
    for record in &records {
        result.push(record, config.lookback);
    }
    log_summary(&result.summary);

    Ok(result)
}

fn log_summary(summary: &BatchSummary) {
    log::info!(
        "simulation complete: {} games, Red wins {}, Blue wins {}, no winner {}, {} examples",
        summary.games,
        summary.red_wins,
        summary.blue_wins,
        summary.draws,
        summary.examples_emitted
    );
}
