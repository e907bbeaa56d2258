//! Python bindings for the Hex self-play generator.
//!
//! # Quick Start
//!
//! ```python
//! import hex_selfplay as hs
//!
//! # 4 x 250 balanced examples on a 5x5 board, two plies before the end
//! boards, winners = hs.generate_balanced(size=5, target_per_bucket=250, lookback=2)
//!
//! # Unbalanced batch, simulated in parallel
//! boards, winners = hs.simulate(size=7, games=10000, mode="random")
//! ```

use pyo3::prelude::*;

mod py_sim;

pub use py_sim::*;

/// hex_selfplay: heuristic Hex self-play for dataset generation.
#[pymodule]
fn hex_selfplay(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_balanced, m)?)?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(play_game, m)?)?;
    Ok(())
}
