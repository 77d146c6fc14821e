//! Benchmarks for devdex color conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use devdex_color::{format, parse, Color, Converter, Notation};
use devdex_models as models;

/// Normalized RGB samples spread over the cube.
fn unit_samples(size: usize) -> Vec<[f64; 3]> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            [t, (t * 7.0).fract(), (t * 13.0).fract()]
        })
        .collect()
}

/// Benchmark the numeric RGB <-> model conversions.
fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("models");

    for size in [1000, 10000, 100000].iter() {
        let values = unit_samples(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("hsl_roundtrip", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| models::hsl_to_rgb(models::rgb_to_hsl(black_box(x))))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("hsv_roundtrip", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| models::hsv_to_rgb(models::rgb_to_hsv(black_box(x))))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("hwb_roundtrip", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| models::hwb_to_rgb(models::rgb_to_hwb(black_box(x))))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("cmyk_roundtrip", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| models::cmyk_to_rgb(models::rgb_to_cmyk(black_box(x))))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark building a [`Color`] with every derived space.
fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    group.throughput(Throughput::Elements(4096));

    group.bench_function("from_rgb_4096", |b| {
        b.iter(|| {
            (0..4096)
                .map(|i| Color::from_rgb(black_box(i & 0xff), black_box(i >> 4), 128))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark each parser on a representative input.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let inputs = [
        (Notation::Hex, "#336699"),
        (Notation::Rgb, "rgb(51, 102, 153)"),
        (Notation::Hsl, "hsl(210, 50%, 40%)"),
        (Notation::Hsv, "hsv(210, 67%, 60%)"),
        (Notation::Hwb, "hwb(210, 20%, 40%)"),
        (Notation::Cmy, "cmy(80%, 60%, 40%)"),
        (Notation::Cmyk, "cmyk(0.67, 0.33, 0, 0.4)"),
    ];

    for (notation, text) in inputs {
        group.bench_with_input(BenchmarkId::new("parse", notation), &text, |b, t| {
            b.iter(|| parse::parse(black_box(t), notation))
        });
    }

    group.finish();
}

/// Benchmark the string-level facade, tags included.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let converter = Converter::default();

    group.bench_function("hex_to_hsl", |b| {
        b.iter(|| converter.convert(black_box("#336699"), "hex", "hsl"))
    });

    group.bench_function("hsl_to_cmyk", |b| {
        b.iter(|| converter.convert(black_box("hsl(210, 50%, 40%)"), "hsl", "cmyk"))
    });

    let color = Color::from_rgb(51, 102, 153);
    group.bench_function("format_all", |b| b.iter(|| format::format_all(black_box(&color))));

    group.finish();
}

criterion_group!(benches, bench_models, bench_color, bench_parse, bench_convert);

criterion_main!(benches);
