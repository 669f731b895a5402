//! Performance benchmarks for the bitgrid simulation core.
//!
//! Run with: `cargo bench`
//! Or for specific bench: `cargo bench --bench step_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitgrid::{Board, BoardConfig, ComponentConfig};

/// Builds a board with one clock and a chain of `gates` inverters, each
/// reading the previous stage's link.
fn chain_board(gates: usize) -> Board {
    let mut config = BoardConfig::new(gates + 1)
        .with_component(ComponentConfig::new("CLK", vec![], vec![0]).with_clk_speed(1));
    for stage in 0..gates {
        config = config.with_component(ComponentConfig::new("NOT", vec![stage], vec![stage + 1]));
    }

    let board = Board::new();
    board.init(&config).unwrap();
    board
}

/// Builds a board with one clock fanning out to `gates` independent AND gates.
fn fanout_board(gates: usize) -> Board {
    let mut config = BoardConfig::new(gates + 2)
        .with_component(ComponentConfig::new("CLK", vec![], vec![0]).with_clk_speed(1))
        .with_component(ComponentConfig::new("NOT", vec![1], vec![1]));
    for gate in 0..gates {
        config = config.with_component(ComponentConfig::new("AND", vec![0, 1], vec![gate + 2]));
    }

    let board = Board::new();
    board.init(&config).unwrap();
    board
}

fn bench_chain_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_step");

    for gates in [10, 100, 1000] {
        group.throughput(Throughput::Elements(gates as u64));
        group.bench_with_input(BenchmarkId::from_parameter(gates), &gates, |b, &gates| {
            let board = chain_board(gates);
            b.iter(|| {
                board.step().unwrap();
                black_box(board.tick());
            });
        });
    }

    group.finish();
}

fn bench_fanout_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout_step");

    for gates in [10, 100, 1000] {
        group.throughput(Throughput::Elements(gates as u64));
        group.bench_with_input(BenchmarkId::from_parameter(gates), &gates, |b, &gates| {
            let board = fanout_board(gates);
            b.iter(|| {
                board.step().unwrap();
                black_box(board.tick());
            });
        });
    }

    group.finish();
}

fn bench_status_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_snapshot");

    for gates in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(gates), &gates, |b, &gates| {
            let board = fanout_board(gates);
            board.step().unwrap();
            b.iter(|| black_box(board.status().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chain_step,
    bench_fanout_step,
    bench_status_snapshot
);
criterion_main!(benches);
