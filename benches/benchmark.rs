use criterion::{black_box, criterion_group, criterion_main, Criterion};
use golfguard_core::evaluate::{evaluate_round, evaluate_rounds};
use golfguard_core::probability::probability_range;
use golfguard_core::round::RoundInput;
use golfguard_core::simulation::simulate_tail_probability;
use golfguard_core::variance::variance_band;

fn create_test_round() -> RoundInput {
    RoundInput::new(10.0, 72.0, 125.0, 77.0)
}

fn create_batch(n: usize) -> Vec<(String, RoundInput)> {
    (0..n)
        .map(|i| {
            let handicap = (i % 36) as f64 - 4.0;
            let score = 70.0 + (i % 25) as f64;
            (
                format!("Player{}", i),
                RoundInput::new(handicap, 72.0, 113.0 + (i % 30) as f64, score),
            )
        })
        .collect()
}

fn bench_evaluate_round(c: &mut Criterion) {
    let input = create_test_round();

    c.bench_function("evaluate_round", |b| {
        b.iter(|| evaluate_round(black_box("Player"), black_box(&input)))
    });
}

fn bench_probability_range(c: &mut Criterion) {
    let band = variance_band(10.0);

    c.bench_function("probability_range", |b| {
        b.iter(|| probability_range(black_box(5.0), black_box(band)))
    });
}

fn bench_evaluate_rounds_batch(c: &mut Criterion) {
    let rounds = create_batch(1_000);

    c.bench_function("evaluate_rounds_1000", |b| {
        b.iter(|| evaluate_rounds(black_box(&rounds)))
    });
}

fn bench_simulate_tail_probability(c: &mut Criterion) {
    let input = create_test_round();

    c.bench_function("simulate_tail_probability_10k", |b| {
        b.iter(|| simulate_tail_probability(black_box(&input), 10_000, Some(42)))
    });
}

criterion_group!(
    benches,
    bench_evaluate_round,
    bench_probability_range,
    bench_evaluate_rounds_batch,
    bench_simulate_tail_probability
);
criterion_main!(benches);
