//! Edge-to-edge connectivity.
//!
//! Two checks that always agree on outcome:
//!
//! - [`path_exists`]: breadth-first flood fill from every stone of the color
//!   on its start edge. Used to verify a finished board from scratch.
//! - [`wins_through`]: depth-first walk over the chain containing one stone,
//!   succeeding once that chain touches both of its color's edges. The game
//!   driver calls this after each move, since a new connection can only
//!   appear through the stone just placed.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Color, Grid, Position};

/// Whether `color` connects its two edges anywhere on the board.
///
/// Red must join top and bottom, Blue left and right.
pub fn path_exists(grid: &Grid, color: Color) -> bool {
    let stone = color.stone();
    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut frontier = VecDeque::new();

    for pos in grid.positions() {
        if grid.on_start_edge(pos, color) && grid.cell(pos) == stone {
            visited[pos.row * size + pos.col] = true;
            frontier.push_back(pos);
        }
    }

    while let Some(pos) = frontier.pop_front() {
        if grid.on_end_edge(pos, color) {
            return true;
        }
        for n in grid.neighbors(pos) {
            let idx = n.row * size + n.col;
            if !visited[idx] && grid.cell(n) == stone {
                visited[idx] = true;
                frontier.push_back(n);
            }
        }
    }

    false
}

/// Whether the chain containing the stone at `pos` touches both edges of its color.
///
/// Returns false for an empty or off-board `pos`.
pub fn wins_through(grid: &Grid, pos: Position) -> bool {
    let Some(color) = grid.get(pos).and_then(|c| c.color()) else {
        return false;
    };
    let stone = color.stone();

    let mut stack = vec![pos];
    let mut visited = FxHashSet::default();
    let mut touches_start = false;
    let mut touches_end = false;

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        touches_start |= grid.on_start_edge(current, color);
        touches_end |= grid.on_end_edge(current, color);
        if touches_start && touches_end {
            return true;
        }

        stack.extend(
            grid.neighbors(current)
                .into_iter()
                .filter(|&n| grid.cell(n) == stone && !visited.contains(&n)),
        );
    }

    false
}

/// The color that connects its edges, if any.
///
/// At most one color can connect on a legal board; Red is checked first.
pub fn winner(grid: &Grid) -> Option<Color> {
    Color::ALL.into_iter().find(|&c| path_exists(grid, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: usize, text: &str) -> Grid {
        Grid::parse(size, text).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_path() {
        let g = Grid::new(5);
        assert!(!path_exists(&g, Color::Red));
        assert!(!path_exists(&g, Color::Blue));
        assert_eq!(winner(&g), None);
    }

    #[test]
    fn test_single_cell_board() {
        let g = grid(1, "r");
        assert!(path_exists(&g, Color::Red));
        assert!(!path_exists(&g, Color::Blue));
        assert!(wins_through(&g, Position::new(0, 0)));
    }

    #[test]
    fn test_red_column() {
        let g = grid(3, ".r. .r. .r.");
        assert!(path_exists(&g, Color::Red));
        assert!(!path_exists(&g, Color::Blue));
        assert!(wins_through(&g, Position::new(1, 1)));
    }

    #[test]
    fn test_anti_diagonal_connects() {
        // (0,2) -> (1,1) -> (2,0) are adjacent through the (+1, -1) direction
        let g = grid(3, "..r .r. r..");
        assert!(path_exists(&g, Color::Red));

        let g = grid(3, "..b .b. b..");
        assert!(path_exists(&g, Color::Blue));
    }

    #[test]
    fn test_main_diagonal_does_not_connect() {
        // (0,0) -> (1,1) is not a hex neighbour
        let g = grid(3, "r.. .r. ..r");
        assert!(!path_exists(&g, Color::Red));
        assert!(!wins_through(&g, Position::new(1, 1)));

        let g = grid(3, "b.. .b. ..b");
        assert!(!path_exists(&g, Color::Blue));
    }

    #[test]
    fn test_blue_row_is_not_a_red_win() {
        let g = grid(3, "... bbb ...");
        assert!(path_exists(&g, Color::Blue));
        assert!(!path_exists(&g, Color::Red));
        assert_eq!(winner(&g), Some(Color::Blue));
    }

    #[test]
    fn test_wins_through_ignores_other_chains() {
        // Red's winning column is on the left; the stone at (0,2) is not part of it
        let g = grid(3, "r.r r.. r..");
        assert!(wins_through(&g, Position::new(1, 0)));
        assert!(!wins_through(&g, Position::new(0, 2)));
        assert!(!wins_through(&g, Position::new(1, 1)));
        assert!(!wins_through(&g, Position::new(9, 9)));
    }
}
