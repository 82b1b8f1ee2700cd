// benches/percolation_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use percolation::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_percolation(c: &mut Criterion) {
    c.bench_function("trial_n64", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| run_trial(black_box(64), &mut rng).unwrap());
    });

    c.bench_function("open_all_n128", |b| {
        b.iter(|| {
            let n = black_box(128);
            let mut grid = ConnectivityGrid::new(n).unwrap();
            for r in 1..=n {
                for c in 1..=n {
                    grid.open(r, c).unwrap();
                }
            }
            grid.percolates()
        });
    });

    c.bench_function("estimate_n32_t100", |b| {
        b.iter(|| {
            let config = EstimatorConfig::new(black_box(32), 100).with_seed(7);
            ThresholdEstimator::from_config(&config).unwrap().mean()
        });
    });
}

criterion_group!(benches, benchmark_percolation);
criterion_main!(benches);
