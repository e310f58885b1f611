// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast store and container operations.
//!
//! Measures the performance of:
//! - Publishing to a store with several watchers
//! - Pushing toasts into a container and expiring them with ticks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toast::ui::toasts::{Status, ToastContainer, ToastData, ToastStore};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark publishing while watchers are registered.
fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");

    for watchers in [1usize, 8, 32] {
        let store = ToastStore::new();
        let mut watches: Vec<_> = (0..watchers).map(|_| store.watch()).collect();

        group.bench_with_input(
            BenchmarkId::new("publish", watchers),
            &watchers,
            |b, _| {
                b.iter(|| {
                    store.info(black_box("benchmark message"), None, None);
                    for watch in &mut watches {
                        black_box(watch.try_recv());
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a burst of toasts living out their timers.
fn bench_push_and_expire(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_container");

    for count in [10usize, 100] {
        group.bench_with_input(
            BenchmarkId::new("push_and_expire", count),
            &count,
            |b, &count| {
                b.iter(|| {
                    let mut container = ToastContainer::new(ToastStore::new());
                    let start = Instant::now();
                    for i in 0..count {
                        let timer = Duration::from_millis(500 + (i as u64 % 10) * 100);
                        container.push(
                            ToastData::new(Status::ALL[i % 4], "burst").with_timer(timer),
                            start,
                        );
                    }
                    let mut elapsed = Duration::ZERO;
                    while !container.is_empty() {
                        elapsed += Duration::from_millis(50);
                        container.tick(start + elapsed);
                    }
                    black_box(elapsed);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_publish, bench_push_and_expire);
criterion_main!(benches);
