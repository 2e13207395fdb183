// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel_damage::merge_damage;
use kurbo::Rect;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_f64(&mut self, upper: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * upper
    }
}

/// Rects scattered over a large surface; mostly disjoint, little merging.
fn scattered(n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let x = rng.next_f64(4000.0);
            let y = rng.next_f64(4000.0);
            Rect::new(x, y, x + 20.0, y + 20.0)
        })
        .collect()
}

/// Rects packed into a small area; heavy overlap, collapses to few regions.
fn clustered(n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let x = rng.next_f64(100.0);
            let y = rng.next_f64(100.0);
            Rect::new(x, y, x + 50.0, y + 50.0)
        })
        .collect()
}

/// A diagonal chain where only adjacent rects overlap, exercising the
/// multi-pass fixed point.
fn chained(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let offset = i as f64 * 8.0;
            Rect::new(offset, offset, offset + 10.0, offset + 10.0)
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_damage_merge");
    group.sample_size(50);

    for &n in &[8_usize, 64, 256] {
        group.bench_function(format!("scattered(n={n})"), |b| {
            b.iter_batched(
                || scattered(n, 0xEA5E_0000_0000_0001),
                |regions| black_box(merge_damage(regions)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("clustered(n={n})"), |b| {
            b.iter_batched(
                || clustered(n, 0xEA5E_0000_0000_0002),
                |regions| black_box(merge_damage(regions)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("chained(n={n})"), |b| {
            b.iter_batched(
                || chained(n),
                |regions| black_box(merge_damage(regions)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
