use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;
use survey_confidence::{BootstrapMean, ConfidenceLevel};

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_bootstrap_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("BootstrapMean");
    // Survey columns have tens of rows; the larger sizes bound the cost.
    let sizes = [20, 60, 500];

    for &size in &sizes {
        let data = generate_normal_data(size, -10.0, 15.0, 42);

        for &n_resamples in &[1000, 2000] {
            let bootstrap = BootstrapMean::new().with_resamples(n_resamples);
            group.bench_with_input(
                BenchmarkId::new(format!("resamples_{n_resamples}"), size),
                &data,
                |b, data| {
                    let mut rng = StdRng::seed_from_u64(7);
                    b.iter(|| bootstrap.estimate(black_box(data), &[2.5, 97.5], &mut rng))
                },
            );
        }
    }

    group.finish();
}

fn bench_confidence_interval(c: &mut Criterion) {
    let data = generate_normal_data(60, 0.0, 1.0, 3);
    let bootstrap = BootstrapMean::new();

    c.bench_function("confidence_interval_95", |b| {
        let mut rng = StdRng::seed_from_u64(11);
        b.iter(|| bootstrap.confidence_interval(black_box(&data), ConfidenceLevel::NINETY_FIVE, &mut rng))
    });
}

criterion_group!(benches, bench_bootstrap_mean, bench_confidence_interval);
criterion_main!(benches);
