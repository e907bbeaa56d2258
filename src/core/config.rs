//! Simulation configuration.
//!
//! All knobs a caller can turn: board size, how moves are chosen, the
//! lookback used for labeling, batch sizes and the seed.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::MAX_BOARD_SIZE;

/// Default number of outer relaxation rounds for the potential field.
pub const DEFAULT_RELAXATION_ROUNDS: u32 = 6;

/// How the side to move picks its stone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Uniformly random empty cell.
    Random,
    /// Lowest potential-field score.
    #[default]
    Heuristic,
}

impl std::str::FromStr for PlayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(PlayMode::Random),
            "heuristic" => Ok(PlayMode::Heuristic),
            other => Err(ConfigError::Parse(format!(
                "unknown play mode '{other}' (expected 'random' or 'heuristic')"
            ))),
        }
    }
}

/// Configuration for a simulation batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Board side length.
    pub board_size: usize,

    /// Plies before the winning move whose board becomes the example.
    /// 0 = the final board.
    pub lookback: usize,

    /// Outer relaxation rounds for the potential field.
    pub relaxation_rounds: u32,

    /// Move source for both sides.
    pub play_mode: PlayMode,

    /// Examples per (starting color, winner) bucket for balanced sampling.
    pub target_per_bucket: usize,

    /// Number of games for unbalanced batch simulation.
    pub games: usize,

    /// Optional cap on games played by the balanced sampler (0 = no cap).
    pub max_games: usize,

    /// Master seed. Each game forks its own stream from it.
    pub seed: u64,

    /// Swap-rule flag passed to every game state.
    pub swap_rule: bool,

    /// Log progress every this many games (0 = never).
    pub progress_interval: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            lookback: 2,
            relaxation_rounds: DEFAULT_RELAXATION_ROUNDS,
            play_mode: PlayMode::Heuristic,
            target_per_bucket: 250,
            games: 1000,
            max_games: 0,
            seed: 42,
            swap_rule: false,
            progress_interval: 100,
        }
    }
}

impl SimConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the lookback.
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Set relaxation rounds.
    pub fn with_relaxation_rounds(mut self, rounds: u32) -> Self {
        self.relaxation_rounds = rounds;
        self
    }

    /// Set the play mode.
    pub fn with_play_mode(mut self, mode: PlayMode) -> Self {
        self.play_mode = mode;
        self
    }

    /// Set the per-bucket target.
    pub fn with_target_per_bucket(mut self, target: usize) -> Self {
        self.target_per_bucket = target;
        self
    }

    /// Set the number of games for batch simulation.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Cap the balanced sampler's game count.
    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = max_games;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the swap-rule flag.
    pub fn with_swap_rule(mut self, swap_rule: bool) -> Self {
        self.swap_rule = swap_rule;
        self
    }

    /// Set the progress log interval.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in 1..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.relaxation_rounds == 0 {
            return Err(ConfigError::Validation(
                "relaxation_rounds must be > 0".to_string(),
            ));
        }
        if self.target_per_bucket == 0 {
            return Err(ConfigError::Validation(
                "target_per_bucket must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus the limits under which balanced
    /// sampling can fill all four buckets.
    ///
    /// The first stone on a 1×1 board always wins, and a game that fills the
    /// board is always won by the same side relative to the starter, so the
    /// lookback must stay below the cell count.
    pub fn validate_balanced(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.board_size < 2 {
            return Err(ConfigError::Validation(format!(
                "balanced sampling needs board_size >= 2, got {}",
                self.board_size
            )));
        }
        let cells = self.board_size * self.board_size;
        if self.lookback >= cells {
            return Err(ConfigError::Validation(format!(
                "balanced sampling needs lookback < {cells} on a {0}x{0} board, got {1}",
                self.board_size, self.lookback
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.board_size, 3);
        assert_eq!(config.lookback, 2);
        assert_eq!(config.relaxation_rounds, 6);
        assert_eq!(config.play_mode, PlayMode::Heuristic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimConfig::new()
            .with_board_size(11)
            .with_lookback(4)
            .with_play_mode(PlayMode::Random)
            .with_seed(123);

        assert_eq!(config.board_size, 11);
        assert_eq!(config.lookback, 4);
        assert_eq!(config.play_mode, PlayMode::Random);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_validation() {
        assert!(SimConfig::new().with_board_size(0).validate().is_err());
        assert!(SimConfig::new().with_board_size(27).validate().is_err());
        assert!(SimConfig::new().with_relaxation_rounds(0).validate().is_err());
        assert!(SimConfig::new().with_target_per_bucket(0).validate().is_err());
    }

    #[test]
    fn test_balanced_validation() {
        // Plain validation allows what balanced sampling can never finish
        let one_cell = SimConfig::new().with_board_size(1).with_lookback(0);
        assert!(one_cell.validate().is_ok());
        assert!(one_cell.validate_balanced().is_err());

        let long = SimConfig::new().with_board_size(3).with_lookback(10);
        assert!(long.validate().is_ok());
        assert!(long.validate_balanced().is_err());

        // A full-board lookback leaves two buckets empty
        assert!(SimConfig::new().with_board_size(3).with_lookback(9).validate_balanced().is_err());
        assert!(SimConfig::new().with_board_size(3).with_lookback(8).validate_balanced().is_ok());
        assert!(SimConfig::new().with_board_size(2).with_lookback(0).validate_balanced().is_ok());

        // Plain limits still apply
        assert!(SimConfig::new().with_target_per_bucket(0).validate_balanced().is_err());
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = SimConfig::from_json(r#"{"board_size": 5, "play_mode": "random"}"#).unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.play_mode, PlayMode::Random);
        assert_eq!(config.lookback, 2);

        assert!(SimConfig::from_json(r#"{"board_size": 0}"#).is_err());
        assert!(SimConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_play_mode_from_str() {
        assert_eq!("Random".parse::<PlayMode>(), Ok(PlayMode::Random));
        assert_eq!("heuristic".parse::<PlayMode>(), Ok(PlayMode::Heuristic));
        assert!("greedy".parse::<PlayMode>().is_err());
    }
}
