//! Benchmarks for the Monte Carlo path generator.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratekit_core::market_data::FlatCurve;
use ratekit_models::hull_white::HullWhiteModel;
use ratekit_pricing::simulation::{ShortRateSimulator, SimulationScenario};

fn bench_path_generation(c: &mut Criterion) {
    let model = HullWhiteModel::new(0.1, 0.01, Arc::new(FlatCurve::new(0.03))).unwrap();
    let simulator = ShortRateSimulator::new(model);

    let mut group = c.benchmark_group("short_rate_paths");
    for &num_paths in &[100usize, 1_000, 10_000] {
        let scenario = SimulationScenario::new(num_paths, 1.0, 0.01).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_paths),
            &scenario,
            |b, scenario| b.iter(|| simulator.simulate_seeded(black_box(scenario), 42)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_path_generation);
criterion_main!(benches);
