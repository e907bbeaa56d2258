//! Greedy move choice over a potential field.

use crate::core::{Color, GameRng, Grid, Position};

use super::potential::PotentialField;

/// Pick the empty cell with the lowest connection cost for `color`.
///
/// Each candidate's score is its cost plus [`GameRng::jitter`], which only
/// breaks exact ties since it is far below the step cost. Returns `None` on a
/// full board. Never mutates anything but the RNG.
pub fn select_move(
    grid: &Grid,
    field: &PotentialField,
    color: Color,
    rng: &mut GameRng,
) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;

    for pos in grid.empty_cells() {
        let score = f64::from(field.connection_cost(pos, color)) + rng.jitter();
        if best.map_or(true, |(_, s)| score < s) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::compute_potentials;

    #[test]
    fn test_full_board_returns_none() {
        let grid = Grid::parse(2, "rb br").unwrap();
        let field = compute_potentials(&grid, 6);
        let mut rng = GameRng::new(1);
        assert_eq!(select_move(&grid, &field, Color::Red, &mut rng), None);
    }

    #[test]
    fn test_jitter_spreads_exact_ties() {
        // The six edge-row cells of an empty 3x3 tie at 256 for Red; jitter decides
        let grid = Grid::new(3);
        let field = compute_potentials(&grid, 6);
        let picks: std::collections::HashSet<_> = (0..50)
            .filter_map(|seed| select_move(&grid, &field, Color::Red, &mut GameRng::new(seed)))
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn test_jitter_only_picks_among_cheapest() {
        let grid = Grid::new(3);
        let field = compute_potentials(&grid, 6);
        for seed in 0..50 {
            let pos = select_move(&grid, &field, Color::Red, &mut GameRng::new(seed)).unwrap();
            assert_ne!(pos.row, 1, "middle row costs more than the edge rows");
        }
    }

    #[test]
    fn test_extends_from_own_edge_stone() {
        // Red's top stone is hemmed in by Blue except towards (1,1)
        let grid = Grid::parse(3, "brb b.. ...").unwrap();
        let field = compute_potentials(&grid, 6);
        assert_eq!(field.connection_cost(Position::new(1, 1), Color::Red), 128);
        assert_eq!(field.connection_cost(Position::new(1, 2), Color::Red), 256);

        let mut rng = GameRng::new(9);
        assert_eq!(
            select_move(&grid, &field, Color::Red, &mut rng),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let grid = Grid::parse(3, "rbr b.b rbr").unwrap();
        let field = compute_potentials(&grid, 6);
        let mut rng = GameRng::new(4);
        assert_eq!(
            select_move(&grid, &field, Color::Blue, &mut rng),
            Some(Position::new(1, 1))
        );
    }
}
