//! Benchmarks for board generation and connectivity tracking
//!
//! Generation includes the regeneration retry loop, so small boards show the
//! cost of rejected pre-solved layouts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wirehack_engine::{check_connections, generate_board, Board, GenConfig};

fn bench_generate_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_board");

    for (rows, cols) in [(2, 2), (4, 6), (8, 12), (16, 24)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(rows, cols),
            |b, &(rows, cols)| {
                let config = GenConfig::default();
                let mut rng = StdRng::seed_from_u64(42);
                let mut board = Board::new(rows, cols);

                b.iter(|| {
                    generate_board(black_box(&mut board), &config, &mut rng);
                    black_box(board.chain.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_check_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_connections");

    for (rows, cols) in [(4, 6), (8, 12), (16, 24)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(rows, cols),
            |b, &(rows, cols)| {
                let config = GenConfig::default();
                let mut rng = StdRng::seed_from_u64(42);
                let mut board = Board::new(rows, cols);
                generate_board(&mut board, &config, &mut rng);

                b.iter(|| {
                    let row = rng.random_range(0..rows);
                    let col = rng.random_range(0..cols);
                    let cell = board.cell_mut(row, col);
                    cell.pipe = cell.pipe.rotated();
                    black_box(check_connections(&mut board, row, col))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate_board, bench_check_connections);
criterion_main!(benches);
