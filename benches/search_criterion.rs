use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use volley_chess::game_state::chess_rules::{board_from_layout, STARTING_LAYOUT};
use volley_chess::game_state::chess_types::Color;
use volley_chess::search::board_scoring::VolleyScorer;
use volley_chess::search::minimax::{best_move, SearchConfig};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: [&'static str; 8],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        layout: STARTING_LAYOUT,
    },
    BenchCase {
        name: "open_middlegame",
        layout: [
            "r..qk..r", "ppp..ppp", "..n.....", "...np...", "..B.P.b.", ".....N..", "PPP..PPP",
            "R.BQK..R",
        ],
    },
    BenchCase {
        name: "sparse_endgame",
        layout: [
            "....k...", "........", "..r.....", "........", "....P...", "........", ".R......",
            "....K...",
        ],
    },
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_search");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for case in CASES {
        let board = board_from_layout(case.layout).expect("bench layout should parse");

        for depth in [1u8, 2, 3] {
            group.bench_with_input(
                BenchmarkId::new(case.name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let mut scratch = board.clone();
                        let result = best_move(
                            black_box(&mut scratch),
                            Color::Dark,
                            &VolleyScorer,
                            SearchConfig { depth },
                        );
                        black_box(result.best_score)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
