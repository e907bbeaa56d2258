//! Potential field: estimated cost for each cell to reach each board edge.
//!
//! ## Computation
//!
//! 1. Every component starts at [`UNREACHABLE`].
//! 2. Cells on an edge get [`EDGE_POTENTIAL`] for that edge if empty, or 0 if
//!    they hold the edge's owning color. Stones of the other color stay
//!    unreachable.
//! 3. Relaxation: for a fixed number of rounds, each color in turn sweeps the
//!    board twice. A color's two components are relaxed as a pair: the cell
//!    takes the lowest value found in either component, its own or a
//!    neighbour's, and writes it into both. A stone of the propagating color
//!    takes that value for free; an empty cell pays [`STEP_COST`] on top of
//!    the neighbour's. Enemy stones are never updated.
//!
//! After relaxation both components of a pair hold the cost of reaching the
//! nearer of the color's two edges, so [`PotentialField::connection_cost`]
//! is twice that distance. Components only ever decrease, and sweeps update
//! in place, so one sweep can carry an improvement several cells along the
//! scan direction.
//!
//! The field is a pure function of the grid and the round budget.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, Grid, Position};

/// Sentinel for "no known route".
pub const UNREACHABLE: u32 = 20_000;

/// Potential of an empty cell lying on an edge.
pub const EDGE_POTENTIAL: u32 = 128;

/// Cost of claiming one empty cell along a route.
pub const STEP_COST: u32 = 64;

/// In-place sweeps per color per round.
pub const SWEEPS_PER_ROUND: usize = 2;

/// A board edge. Top/Bottom belong to Red, Left/Right to Blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Component index within a potential vector.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Bottom => 1,
            Edge::Left => 2,
            Edge::Right => 3,
        }
    }

    /// The color trying to reach this edge.
    #[must_use]
    pub const fn owner(self) -> Color {
        match self {
            Edge::Top | Edge::Bottom => Color::Red,
            Edge::Left | Edge::Right => Color::Blue,
        }
    }

    /// The pair of edges `color` must join.
    #[must_use]
    pub const fn targets(color: Color) -> [Edge; 2] {
        match color {
            Color::Red => [Edge::Top, Edge::Bottom],
            Color::Blue => [Edge::Left, Edge::Right],
        }
    }

    /// Whether `pos` lies on this edge.
    #[must_use]
    pub fn touches(self, grid: &Grid, pos: Position) -> bool {
        let last = grid.size() - 1;
        match self {
            Edge::Top => pos.row == 0,
            Edge::Bottom => pos.row == last,
            Edge::Left => pos.col == 0,
            Edge::Right => pos.col == last,
        }
    }
}

/// Per-cell potentials, one component per [`Edge`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialField {
    size: usize,
    values: Vec<[u32; 4]>,
}

impl PotentialField {
    /// Seed the edge potentials for `grid` without any relaxation.
    #[must_use]
    pub fn initialize(grid: &Grid) -> Self {
        let size = grid.size();
        let mut values = vec![[UNREACHABLE; 4]; size * size];

        for pos in grid.positions() {
            let cell = grid.cell(pos);
            let slot = &mut values[pos.row * size + pos.col];
            for edge in Edge::ALL {
                if !edge.touches(grid, pos) {
                    continue;
                }
                match cell {
                    Cell::Empty => slot[edge.index()] = EDGE_POTENTIAL,
                    _ if cell == edge.owner().stone() => slot[edge.index()] = 0,
                    _ => {}
                }
            }
        }

        Self { size, values }
    }

    /// Run one outer round: both colors, [`SWEEPS_PER_ROUND`] sweeps each.
    ///
    /// Returns whether any component improved.
    pub fn relax_round(&mut self, grid: &Grid) -> bool {
        debug_assert_eq!(grid.size(), self.size);
        let mut changed = false;
        for color in Color::ALL {
            for _ in 0..SWEEPS_PER_ROUND {
                changed |= self.sweep(grid, color);
            }
        }
        changed
    }

    fn sweep(&mut self, grid: &Grid, color: Color) -> bool {
        let own = color.stone();
        let enemy = color.opposite().stone();
        let [a, b] = Edge::targets(color).map(Edge::index);
        let pair_min = |v: &[u32; 4]| v[a].min(v[b]);
        let mut changed = false;

        for pos in grid.positions() {
            let cell = grid.cell(pos);
            if cell == enemy {
                continue;
            }
            let step = if cell == own { 0 } else { STEP_COST };
            let idx = self.index(pos);

            // Enemy neighbours sit at UNREACHABLE for this pair and never win.
            let best = grid
                .neighbors(pos)
                .into_iter()
                .map(|n| pair_min(&self.values[self.index(n)]) + step)
                .fold(pair_min(&self.values[idx]), u32::min);

            for k in [a, b] {
                if best < self.values[idx][k] {
                    self.values[idx][k] = best;
                    changed = true;
                }
            }
        }

        changed
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// One component.
    #[must_use]
    pub fn get(&self, pos: Position, edge: Edge) -> u32 {
        self.values[self.index(pos)][edge.index()]
    }

    /// All four components, indexed by [`Edge::index`].
    #[must_use]
    pub fn values(&self, pos: Position) -> [u32; 4] {
        self.values[self.index(pos)]
    }

    /// Estimated total cost for `color` to connect through `pos`.
    #[must_use]
    pub fn connection_cost(&self, pos: Position, color: Color) -> u32 {
        let [a, b] = Edge::targets(color);
        self.get(pos, a) + self.get(pos, b)
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

/// Compute the potential field for `grid` from scratch.
///
/// Runs at most `rounds` relaxation rounds, stopping early once a round
/// changes nothing (further rounds would be no-ops).
#[must_use]
pub fn compute_potentials(grid: &Grid, rounds: u32) -> PotentialField {
    let mut field = PotentialField::initialize(grid);
    for round in 0..rounds {
        if !field.relax_round(grid) {
            log::trace!("potentials converged after {} rounds", round + 1);
            break;
        }
    }
    field
}
