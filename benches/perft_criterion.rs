//! Benchmarks for move generation, perft, evaluation, and search.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::{find_best_move, Board};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves()))
    });

    let middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves()))
    });

    let kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_moves()))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("positional", |b| b.iter(|| black_box(kiwipete.evaluate())));
    group.bench_function("material", |b| {
        b.iter(|| black_box(kiwipete.evaluate_material()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for budget_ms in [50u64, 200] {
        group.bench_with_input(
            BenchmarkId::new("startpos", budget_ms),
            &budget_ms,
            |b, &budget_ms| {
                let board = Board::new();
                b.iter(|| find_best_move(&board, Duration::from_millis(black_box(budget_ms))))
            },
        );
    }

    let tactical =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    group.bench_function("tactical_200ms", |b| {
        b.iter(|| find_best_move(&tactical, Duration::from_millis(200)))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_eval, bench_search);
criterion_main!(benches);
