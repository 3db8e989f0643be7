// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use peniko::Color;
use understory_material::{
    Brightness, MaterialBlend, MaterialLayer, MaterialStyle, Rgba8, blend, color_dodge_rgba8,
    overlay_rgba8, resolve_layer,
};

fn gradient(len: usize) -> Vec<Color> {
    (0..len)
        .map(|i| {
            let t = i as f32 / len as f32;
            Color::new([t, 1.0 - t, (t * 3.0).fract(), 0.5 + t * 0.5])
        })
        .collect()
}

fn bench_blend_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("material/blend_f32");
    let tint = Color::new([0.25, 0.25, 0.25, 0.82]);

    for len in [256usize, 4_096] {
        let bases = gradient(len);
        group.throughput(Throughput::Elements(len as u64));

        for mode in [MaterialBlend::ColorDodge, MaterialBlend::Overlay] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), len),
                &bases,
                |b, bases| {
                    b.iter(|| {
                        for &base in bases {
                            black_box(blend(mode, base, tint));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_blend_rgba8(c: &mut Criterion) {
    let mut group = c.benchmark_group("material/blend_rgba8");
    let tint = Rgba8 {
        r: 64,
        g: 64,
        b: 64,
        a: 209,
    };

    // Every byte value as a grey base, which covers both overlay branches.
    let bases: Vec<Rgba8> = (0..=255_u8)
        .map(|v| Rgba8 {
            r: v,
            g: v,
            b: v,
            a: 255,
        })
        .collect();
    group.throughput(Throughput::Elements(bases.len() as u64));

    group.bench_function("color_dodge", |b| {
        b.iter(|| {
            for &base in &bases {
                black_box(color_dodge_rgba8(base, tint));
            }
        });
    });
    group.bench_function("overlay", |b| {
        b.iter(|| {
            for &base in &bases {
                black_box(overlay_rgba8(base, tint));
            }
        });
    });

    group.finish();
}

fn bench_resolve_layer(c: &mut Criterion) {
    let style = MaterialStyle::new(
        MaterialLayer::new(
            Color::from_rgba8(64, 64, 64, 255),
            Color::from_rgba8(250, 250, 250, 209),
            MaterialBlend::ColorDodge,
        ),
        MaterialLayer::new(
            Color::from_rgba8(140, 140, 140, 255),
            Color::from_rgba8(37, 37, 37, 209),
            MaterialBlend::Overlay,
        ),
    );

    c.bench_function("material/resolve_layer", |b| {
        b.iter(|| {
            black_box(resolve_layer(black_box(&style), Brightness::Light));
            black_box(resolve_layer(black_box(&style), Brightness::Dark));
        });
    });
}

criterion_group!(
    benches,
    bench_blend_float,
    bench_blend_rgba8,
    bench_resolve_layer
);
criterion_main!(benches);
