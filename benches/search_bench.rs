use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use keibot::ai::choose_move;
use keibot::core::{Difficulty, GameConfig, GameState};
use keibot::heuristics::NaiveHeuristic;
use keibot::utils::seeded_rng;

fn search_benchmark(c: &mut Criterion) {
    let config = GameConfig {
        difficulty: Difficulty::Hard,
        ..GameConfig::default()
    };
    let state = GameState::new(&config);
    let depth = config.difficulty.depth();
    let mut rng = seeded_rng(0);

    c.bench_function(&format!("search_depth_{}", depth), |b| {
        b.iter(|| {
            choose_move(
                black_box(&state),
                black_box(depth),
                &NaiveHeuristic,
                &mut rng,
            )
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = search_benchmark
}
criterion_main!(benches);
