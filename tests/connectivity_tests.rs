//! Connectivity properties.
//!
//! These tests check the board-level facts the game driver relies on:
//! - A full board has exactly one connected color
//! - Connectivity depends only on the final board, not on move order
//! - The incremental check agrees with the full flood fill

use proptest::prelude::*;

use hex_selfplay::core::{Color, Grid, Position};
use hex_selfplay::rules::{path_exists, winner, wins_through};

fn colors_from_bits(bits: &[bool]) -> Vec<Color> {
    bits.iter()
        .map(|&b| if b { Color::Red } else { Color::Blue })
        .collect()
}

fn fill(size: usize, colors: &[Color]) -> Grid {
    let mut grid = Grid::new(size);
    for (pos, &color) in grid.clone().positions().zip(colors) {
        grid.place(pos, color).unwrap();
    }
    grid
}

/// A board size and a random color for every cell.
fn full_board() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (1usize..=7).prop_flat_map(|size| {
        (Just(size), prop::collection::vec(any::<bool>(), size * size))
    })
}

/// A board size and a random order over all of its cells.
fn move_order() -> impl Strategy<Value = (usize, Vec<Position>)> {
    (1usize..=6).prop_flat_map(|size| {
        let cells: Vec<Position> = Grid::new(size).positions().collect();
        (Just(size), Just(cells).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn full_board_has_exactly_one_connection((size, bits) in full_board()) {
        let grid = fill(size, &colors_from_bits(&bits));
        let red = path_exists(&grid, Color::Red);
        let blue = path_exists(&grid, Color::Blue);
        prop_assert!(red != blue, "red={} blue={}\n{}", red, blue, grid);
    }

    #[test]
    fn partial_board_never_connects_both((size, order) in move_order(), stop in 0usize..=36) {
        let mut grid = Grid::new(size);
        for (i, &pos) in order.iter().take(stop).enumerate() {
            let color = if i % 2 == 0 { Color::Red } else { Color::Blue };
            grid.place(pos, color).unwrap();
            prop_assert!(!(path_exists(&grid, Color::Red) && path_exists(&grid, Color::Blue)));
        }
    }

    #[test]
    fn result_ignores_move_order((size, order) in move_order(), seed in any::<u64>()) {
        // Assign colors by position so both orders place the same stones
        let color_of = |p: Position| {
            if (seed >> ((p.row * size + p.col) % 64)) & 1 == 1 { Color::Red } else { Color::Blue }
        };

        let mut forward = Grid::new(size);
        for &pos in &order {
            forward.place(pos, color_of(pos)).unwrap();
        }
        let mut backward = Grid::new(size);
        for &pos in order.iter().rev() {
            backward.place(pos, color_of(pos)).unwrap();
        }

        prop_assert_eq!(&forward, &backward);
        for color in Color::ALL {
            prop_assert_eq!(path_exists(&forward, color), path_exists(&backward, color));
        }
    }

    #[test]
    fn incremental_check_matches_flood_fill((size, order) in move_order()) {
        let mut grid = Grid::new(size);
        for (i, &pos) in order.iter().enumerate() {
            let color = if i % 2 == 0 { Color::Red } else { Color::Blue };
            let before = path_exists(&grid, color);
            grid.place(pos, color).unwrap();
            let after = path_exists(&grid, color);

            if wins_through(&grid, pos) {
                prop_assert!(after);
            }
            if after && !before {
                prop_assert!(wins_through(&grid, pos));
            }
            if after {
                break;
            }
        }
    }
}

#[test]
fn test_single_cell_board() {
    let mut grid = Grid::new(1);
    assert_eq!(winner(&grid), None);

    grid.place(Position::new(0, 0), Color::Blue).unwrap();
    assert!(path_exists(&grid, Color::Blue));
    assert!(!path_exists(&grid, Color::Red));
    assert!(wins_through(&grid, Position::new(0, 0)));
}

#[test]
fn test_edges_are_color_specific() {
    // A full top row of red touches only one red edge
    let grid = Grid::parse(3, "rrr ... ...").unwrap();
    assert!(!path_exists(&grid, Color::Red));
    // The same row is a left-to-right chain, but those are blue's edges
    assert!(!path_exists(&grid, Color::Blue));

    let grid = Grid::parse(3, "bbb ... ...").unwrap();
    assert!(path_exists(&grid, Color::Blue));
    assert_eq!(winner(&grid), Some(Color::Blue));
}
