use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hex_selfplay::core::{Color, GameRng, Grid};
use hex_selfplay::heuristic::compute_potentials;
use hex_selfplay::training::{play_game, HeuristicPlay};

/// A half-filled board from random alternating play.
fn midgame(size: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(size);
    let mut rng = GameRng::new(seed);
    let mut color = Color::Red;
    for _ in 0..size * size / 2 {
        let empty: Vec<_> = grid.empty_cells().collect();
        if let Some(&pos) = rng.choose(&empty) {
            let _ = grid.place(pos, color);
        }
        color = color.opposite();
    }
    grid
}

fn bench_potentials(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_potentials");
    for size in [5, 7, 11, 13] {
        let grid = midgame(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| compute_potentials(black_box(grid), 6))
        });
    }
    group.finish();
}

fn bench_heuristic_game(c: &mut Criterion) {
    let source = HeuristicPlay::default();
    c.bench_function("heuristic_game_7x7", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| play_game(7, &source, &mut rng.fork()))
    });
}

criterion_group!(benches, bench_potentials, bench_heuristic_game);
criterion_main!(benches);
