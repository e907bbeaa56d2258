//! Simulation bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameRng, PlayMode, SimConfig};
use crate::training::{
    move_source, simulate_games_parallel, BalancedSampler, GameDriver, LabeledExample,
};

type Arrays<'py> = (Bound<'py, PyArray2<i8>>, Bound<'py, PyArray1<i8>>);

fn build_config(
    size: usize,
    lookback: usize,
    mode: &str,
    seed: u64,
    rounds: u32,
) -> PyResult<SimConfig> {
    let mode: PlayMode = mode
        .parse()
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
    Ok(SimConfig::default()
        .with_board_size(size)
        .with_lookback(lookback)
        .with_play_mode(mode)
        .with_seed(seed)
        .with_relaxation_rounds(rounds))
}

/// Stack examples into `(boards[N, size*size], winners[N])`.
fn to_arrays<'py>(
    py: Python<'py>,
    size: usize,
    examples: &[LabeledExample],
) -> PyResult<Arrays<'py>> {
    let n = examples.len();
    let width = size * size;

    let mut boards: Vec<i8> = Vec::with_capacity(n * width);
    let mut winners: Vec<i8> = Vec::with_capacity(n);
    for example in examples {
        boards.extend(example.board.to_codes());
        winners.push(example.winner.code());
    }

    let boards = PyArray1::from_vec_bound(py, boards)
        .reshape([n, width])
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
    let winners = PyArray1::from_vec_bound(py, winners);
    Ok((boards, winners))
}

/// Generate a dataset balanced over (starting color, winner).
///
/// # Arguments
/// - size: Board side length (default: 3)
/// - target_per_bucket: Examples per scenario (default: 250)
/// - lookback: Plies before the winning move to sample (default: 2)
/// - mode: "heuristic" or "random" (default: "heuristic")
/// - seed: RNG seed (default: 42)
/// - rounds: Potential-field relaxation rounds (default: 6)
///
/// Returns (boards, winners) as int8 numpy arrays.
#[pyfunction]
#[pyo3(signature = (
    size = 3,
    target_per_bucket = 250,
    lookback = 2,
    mode = "heuristic",
    seed = 42,
    rounds = 6
))]
pub fn generate_balanced<'py>(
    py: Python<'py>,
    size: usize,
    target_per_bucket: usize,
    lookback: usize,
    mode: &str,
    seed: u64,
    rounds: u32,
) -> PyResult<Arrays<'py>> {
    let config = build_config(size, lookback, mode, seed, rounds)?
        .with_target_per_bucket(target_per_bucket);
    config
        .validate_balanced()
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;

    let mut rng = GameRng::new(seed);
    let dataset = py
        .allow_threads(|| BalancedSampler::new(config).run(&mut rng))
        .map_err(|e| PyErr::new::<PyRuntimeError, _>(format!("{}", e)))?;
    to_arrays(py, size, &dataset.examples)
}

/// Simulate a fixed number of games in parallel.
///
/// Returns (boards, winners) for every game long enough for the lookback.
#[pyfunction]
#[pyo3(signature = (
    size = 3,
    games = 1000,
    lookback = 2,
    mode = "heuristic",
    seed = 42,
    rounds = 6
))]
pub fn simulate<'py>(
    py: Python<'py>,
    size: usize,
    games: usize,
    lookback: usize,
    mode: &str,
    seed: u64,
    rounds: u32,
) -> PyResult<Arrays<'py>> {
    let config = build_config(size, lookback, mode, seed, rounds)?.with_games(games);
    config
        .validate()
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;

    let mut rng = GameRng::new(seed);
    let result = py
        .allow_threads(|| simulate_games_parallel(&config, &mut rng))
        .map_err(|e| PyErr::new::<PyRuntimeError, _>(format!("{}", e)))?;
    to_arrays(py, size, &result.examples)
}

/// Play one game and return its full history.
///
/// Returns (boards[moves + 1, size*size], winner, starting) where winner and
/// starting are color codes (1 = Red, -1 = Blue, winner 0 = no winner).
#[pyfunction]
#[pyo3(signature = (size = 3, mode = "heuristic", seed = 42, rounds = 6))]
pub fn play_game<'py>(
    py: Python<'py>,
    size: usize,
    mode: &str,
    seed: u64,
    rounds: u32,
) -> PyResult<(Bound<'py, PyArray2<i8>>, i8, i8)> {
    let config = build_config(size, 0, mode, seed, rounds)?;
    config
        .validate()
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;

    let source = move_source(config.play_mode, config.relaxation_rounds);
    let mut rng = GameRng::new(seed);
    let record = GameDriver::with_random_start(size, source.as_ref(), &mut rng)
        .run(&mut rng)
        .map_err(|e| PyErr::new::<PyRuntimeError, _>(format!("{}", e)))?;

    let rows = record.history.len();
    let flat: Vec<i8> = record.history.iter().flat_map(|g| g.to_codes()).collect();
    let boards = PyArray1::from_vec_bound(py, flat)
        .reshape([rows, size * size])
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;

    Ok((boards, record.status.code(), record.starting_color.code()))
}
