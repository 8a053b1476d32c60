// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use slideout_ghostclick::GhostClickFilter;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point(&mut self, w: f64, h: f64) -> Point {
        Point::new(self.next_f64() * w, self.next_f64() * h)
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// A filter holding `n` live records spread over a phone-sized viewport.
fn filled(n: usize, seed: u64) -> GhostClickFilter {
    let mut rng = Rng::new(seed);
    let mut f = GhostClickFilter::new();
    for i in 0..n {
        f.record_synthetic(rng.point(400.0, 800.0), ms(i as u64));
    }
    f
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_synthetic");
    for &n in &[8_usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("burst_{n}"), |b| {
            b.iter_batched(
                || Rng::new(7),
                |mut rng| {
                    let mut f = GhostClickFilter::new();
                    for i in 0..n {
                        f.record_synthetic(rng.point(400.0, 800.0), ms(i as u64));
                    }
                    black_box(f.len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_on_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("on_click");
    for &n in &[8_usize, 64, 512] {
        let base = filled(n, 11);
        let mut rng = Rng::new(3);
        let clicks: Vec<Point> = (0..256).map(|_| rng.point(400.0, 800.0)).collect();
        group.throughput(Throughput::Elements(clicks.len() as u64));
        group.bench_function(format!("live_{n}"), |b| {
            b.iter(|| {
                let mut suppressed = 0_usize;
                for &p in &clicks {
                    if !base.should_allow(black_box(p)) {
                        suppressed += 1;
                    }
                }
                black_box(suppressed)
            });
        });
    }
    group.finish();
}

fn bench_expire(c: &mut Criterion) {
    let mut group = c.benchmark_group("expire");
    for &n in &[64_usize, 512] {
        group.bench_function(format!("all_{n}"), |b| {
            b.iter_batched(
                || filled(n, 5),
                |mut f| black_box(f.expire(ms(10_000))),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("half_{n}"), |b| {
            b.iter_batched(
                || filled(n, 5),
                |mut f| black_box(f.expire(ms(1000 + n as u64 / 2))),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_record, bench_on_click, bench_expire);
criterion_main!(benches);
