use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use wildchess::position::Position;
use wildchess::smith::parse_warren_smith;

#[derive(Clone, Copy)]
struct FenCase {
    name: &'static str,
    fen: &'static str,
}

const FEN_CASES: &[FenCase] = &[
    FenCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    FenCase {
        name: "middlegame",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    },
    FenCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
];

// The opening of an Italian game in Warren Smith notation, including a
// castling move, replayed from the initial position on every iteration.
const ITALIAN_GAME: &[&str] = &[
    "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "e1g1c", "g8f6", "d2d3", "d7d6", "c2c3",
    "c8g4",
];

fn bench_set_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_fen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    for case in FEN_CASES {
        // Correctness guard before benchmarking.
        let mut probe = Position::new();
        probe.set_fen(case.fen).expect("benchmark FEN should parse");

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &case.fen, |b, fen| {
            let mut position = Position::new();
            b.iter(|| {
                position
                    .set_fen(black_box(fen))
                    .expect("benchmark FEN should parse");
                black_box(position.current_player())
            });
        });
    }

    group.finish();
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    // Correctness guard before benchmarking.
    let mut probe = Position::new();
    for text in ITALIAN_GAME {
        let mv = parse_warren_smith(text, &probe, None).expect("benchmark move should parse");
        probe.make_move(&mv);
    }

    group.throughput(Throughput::Elements(ITALIAN_GAME.len() as u64));
    group.bench_function("italian_game", |b| {
        b.iter(|| {
            let mut position = Position::new();
            for text in ITALIAN_GAME {
                let mv = parse_warren_smith(black_box(text), &position, None)
                    .expect("benchmark move should parse");
                position.make_move(&mv);
            }
            black_box(position.current_player())
        });
    });

    group.finish();
}

criterion_group!(position_benches, bench_set_fen, bench_make_move);
criterion_main!(position_benches);
