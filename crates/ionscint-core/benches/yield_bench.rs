// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Yield Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use ionscint_core::distortion_map::GridDistortionMap;
use ionscint_core::IonScintCalculator;
use ionscint_types::config::DetectorConstants;
use ionscint_types::deposit::{EnergyDepositStep, Point3, Vector3};
use std::hint::black_box;

fn make_steps(n: usize) -> Vec<EnergyDepositStep> {
    let species = [13, -13, 11, 22, 2212, 211, 1_000_020_040];
    (0..n)
        .map(|i| {
            let f = i as f64;
            EnergyDepositStep::new(
                0.05 + (f * 0.37) % 3.0,
                0.03 + (f * 0.11) % 0.5,
                Point3::new((f * 1.3) % 250.0, (f * 0.7) % 600.0 - 300.0, (f * 2.9) % 1000.0),
                species[i % species.len()],
            )
        })
        .collect()
}

fn bench_single_deposit(c: &mut Criterion) {
    let calc = IonScintCalculator::uniform(&DetectorConstants::default())
        .expect("default constants should validate");
    let step = EnergyDepositStep::new(2.0, 0.3, Point3::new(10.0, 0.0, 100.0), 13);
    c.bench_function("compute_single_deposit", |b| {
        b.iter(|| black_box(calc.compute(black_box(&step))))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut cfg = DetectorConstants::default();
    cfg.drift.enable_efield_distortion = true;
    cfg.scintillation.scint_by_particle_type = true;
    let map = GridDistortionMap::uniform(
        [0.0, -300.0, 0.0],
        [10.0, 10.0, 10.0],
        [26, 61, 101],
        Vector3::new(0.02, -0.01, 0.005),
    )
    .expect("map should validate");
    let calc = IonScintCalculator::initialize(&cfg, map).expect("constants should validate");
    let mut group = c.benchmark_group("compute_batch");

    for &n in &[1_000usize, 10_000, 100_000] {
        let steps = make_steps(n);
        let label = format!("{n}_deposits_with_map");
        group.bench_function(&label, |b| {
            b.iter(|| {
                let results = calc.compute_batch(&steps);
                black_box(results[n / 2].num_electrons);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_deposit, bench_batch);
criterion_main!(benches);
