// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast layout engine.
//!
//! The offset table is recomputed synchronously on every show, dismiss, and
//! height measurement, so it has to stay cheap even for unreasonably deep
//! stacks.

use criterion::{criterion_group, criterion_main, Criterion};
use satellite_toast::ui::toasts::layout::compute_offsets;
use satellite_toast::ui::toasts::{ContainerConfig, Manager, Position, ToastConfig};
use std::hint::black_box;
use std::time::Instant;

fn bench_compute_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let container = ContainerConfig::default();

    for count in [4_usize, 32, 256] {
        let heights: Vec<f32> = (0..count).map(|i| 80.0 + (i % 5) as f32 * 12.0).collect();
        group.bench_function(format!("compute_offsets_{count}"), |b| {
            b.iter(|| {
                black_box(compute_offsets(
                    black_box(&heights),
                    &container,
                    Position::BottomRight,
                ));
            });
        });
    }

    group.finish();
}

fn bench_manager_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    group.bench_function("show_measure_dismiss_cycle", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            let now = Instant::now();
            for _ in 0..16 {
                manager.show_notification(ToastConfig::new("bench", "payload"));
            }
            manager.tick(now);
            black_box(manager.offsets(Position::BottomRight).len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_offsets, bench_manager_churn);
criterion_main!(benches);
