// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_tab_strip::{TabStrip, closest_index, position_for_index};

fn widths(len: usize) -> Vec<f64> {
    // Deterministic variable widths in [48, 112).
    (0..len).map(|i| 48.0 + ((i * 37) % 64) as f64).collect()
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab_strip/closest_index");

    // Hypothesis: tab bars are short, so a linear prefix walk stays cheap
    // even when it runs on every pointer move.
    for len in [4usize, 8, 32] {
        let widths = widths(len);
        let total: f64 = widths.iter().sum();
        let pointers: Vec<f64> = (0..256_u32).map(|i| total * f64::from(i) / 255.0).collect();
        group.throughput(Throughput::Elements(pointers.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &widths, |b, widths| {
            b.iter(|| {
                for &x in &pointers {
                    black_box(closest_index(x, widths));
                }
            });
        });
    }

    group.finish();
}

fn bench_indicator_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab_strip/indicator");

    for len in [4usize, 8, 32] {
        let widths = widths(len);
        let frames: Vec<f64> = (0..240_u32)
            .map(|i| (len - 1) as f64 * f64::from(i) / 239.0)
            .collect();
        group.throughput(Throughput::Elements(frames.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("position_for_index", len),
            &widths,
            |b, widths| {
                b.iter(|| {
                    for &index in &frames {
                        black_box(position_for_index(index, widths));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("indicator_rect", len),
            &widths,
            |b, widths| {
                let strip = TabStrip::new(widths);
                b.iter(|| {
                    for &index in &frames {
                        black_box(strip.indicator_rect(index, 32.0));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pointer_sweep, bench_indicator_animation);
criterion_main!(benches);
