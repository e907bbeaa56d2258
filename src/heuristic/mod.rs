//! Shallow move heuristic: potential field plus greedy selection.
//!
//! - `potential`: per-cell cost-to-edge estimates by iterative relaxation
//! - `selector`: lowest-cost empty cell for the side to move
//!
//! O(rounds × N²) per decision. No lookahead.

pub mod potential;
pub mod selector;

pub use potential::{
    compute_potentials, Edge, PotentialField, EDGE_POTENTIAL, STEP_COST, SWEEPS_PER_ROUND,
    UNREACHABLE,
};
pub use selector::select_move;
