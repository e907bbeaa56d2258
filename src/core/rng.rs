//! Deterministic random number generation for self-play.
//!
//! A batch owns one root stream and hands each game a fork of it. Game `i`
//! always gets fork `i + 1`, whatever order games are actually played in,
//! which is what makes a parallel batch match a sequential one.
//!
//! ```
//! use hex_selfplay::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let first_game = root.fork();
//! assert_eq!(first_game.seed(), GameRng::fork_seed(42, 1));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the tie-breaking jitter added to move scores.
pub const JITTER_SCALE: f64 = 0.1;

/// ChaCha8 stream threaded through the game driver and move sources.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Root stream for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Derive the seed of the `n`-th fork of a stream seeded with `seed`.
    ///
    /// `GameRng::new(GameRng::fork_seed(s, n))` equals the `n`-th `fork()`
    /// of `GameRng::new(s)`, which lets parallel workers reproduce a
    /// sequential batch without sharing an RNG.
    #[must_use]
    pub fn fork_seed(seed: u64, n: u64) -> u64 {
        seed.wrapping_add(n.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Next child stream. Does not consume any randomness from `self`.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(Self::fork_seed(self.seed, self.fork_counter))
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Uniform tie-breaking noise in `[0, JITTER_SCALE)`.
    pub fn jitter(&mut self) -> f64 {
        self.inner.gen::<f64>() * JITTER_SCALE
    }

    /// Uniform pick from `slice`, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Snapshot of the stream position and fork count.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Where a stream stands, so a capped sampling run can be resumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    /// Forks handed out so far.
    pub fork_counter: u64,
}
