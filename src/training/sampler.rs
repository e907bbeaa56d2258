//! Balanced sampler: plays games until every scenario bucket is full.
//!
//! Games whose example lands in an already-full bucket are discarded, as are
//! games too short for the lookback. Each game runs on its own fork of the
//! sampler's RNG, so the whole run is reproducible from one seed.

use rustc_hash::FxHashMap;

use crate::core::{GameRng, GameRngState, Result, SimConfig};

use super::driver::GameDriver;
use super::example::{LabeledExample, Scenario};
use super::move_source::{move_source, MoveSource};

/// Count per (starting color, winner) bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioCounts {
    counts: FxHashMap<Scenario, usize>,
}

impl ScenarioCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one bucket.
    #[must_use]
    pub fn get(&self, scenario: Scenario) -> usize {
        self.counts.get(&scenario).copied().unwrap_or(0)
    }

    /// Increment one bucket.
    pub fn record(&mut self, scenario: Scenario) {
        *self.counts.entry(scenario).or_insert(0) += 1;
    }

    /// Whether every bucket has reached `target`.
    #[must_use]
    pub fn all_at_least(&self, target: usize) -> bool {
        Scenario::ALL.iter().all(|&s| self.get(s) >= target)
    }

    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(scenario, count)` in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, usize)> + '_ {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl std::fmt::Display for ScenarioCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (scenario, count) in self.iter() {
            writeln!(f, "{scenario}: {count}")?;
        }
        Ok(())
    }
}

/// Result of a balanced sampling run.
#[derive(Clone, Debug)]
pub struct BalancedDataset {
    /// Accepted examples in the order they were produced.
    pub examples: Vec<LabeledExample>,

    /// Final bucket counts.
    pub counts: ScenarioCounts,

    /// Games played, accepted or not.
    pub games_played: usize,

    /// False if the game cap stopped the run early.
    pub complete: bool,

    /// RNG state at the end of the run, for resuming.
    pub rng_state: GameRngState,
}

/// Acceptance-sampling loop over independent games.
pub struct BalancedSampler {
    config: SimConfig,
    source: Box<dyn MoveSource>,
}

impl BalancedSampler {
    /// Build a sampler using the move source named by `config.play_mode`.
    pub fn new(config: SimConfig) -> Self {
        let source = move_source(config.play_mode, config.relaxation_rounds);
        Self { config, source }
    }

    /// Build a sampler with a custom move source.
    pub fn with_source(config: SimConfig, source: Box<dyn MoveSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play games until all four buckets hold `target_per_bucket` examples.
    ///
    /// Stops early (with `complete = false`) once `max_games` games have
    /// been played, if a cap is set. Fails up front on a config that could
    /// never fill every bucket (see [`SimConfig::validate_balanced`]).
    pub fn run(&self, rng: &mut GameRng) -> Result<BalancedDataset> {
        self.config.validate_balanced()?;
        let target = self.config.target_per_bucket;
        let mut counts = ScenarioCounts::new();
        let mut examples = Vec::new();
        let mut games_played = 0;

        log::info!(
            "balanced sampling: {}x{} board, {} per scenario, lookback {}",
            self.config.board_size,
            self.config.board_size,
            target,
            self.config.lookback
        );

        while !counts.all_at_least(target) {
            if self.config.max_games > 0 && games_played >= self.config.max_games {
                log::warn!("stopping after {} games with buckets unfilled", games_played);
                break;
            }

            let mut game_rng = rng.fork();
            let record = GameDriver::with_random_start(
                self.config.board_size,
                self.source.as_ref(),
                &mut game_rng,
            )
            .with_swap_rule(self.config.swap_rule)
            .run(&mut game_rng)?;
            games_played += 1;

            if let Some(example) = record.labeled_example(self.config.lookback) {
                let scenario = example.scenario();
                if counts.get(scenario) < target {
                    counts.record(scenario);
                    examples.push(example);
                    if counts.get(scenario) == target {
                        log::info!("bucket full: {}", scenario);
                    }
                }
            }

            let interval = self.config.progress_interval;
            if interval > 0 && games_played % interval == 0 {
                log::info!("{} games simulated, {} examples kept", games_played, counts.total());
            }
        }

        let complete = counts.all_at_least(target);
        log::info!("final scenario counts after {} games:\n{}", games_played, counts);

        Ok(BalancedDataset {
            examples,
            counts,
            games_played,
            complete,
            rng_state: rng.state(),
        })
    }
}
