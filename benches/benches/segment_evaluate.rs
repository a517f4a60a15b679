// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use causeway_geometry::{Cubic, ParamPoly3, ParamRange, Placement, Poly3, Segment, clothoid};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

const SAMPLES: usize = 1024;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // xorshift64*
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let bits = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
        bits as f64 / (1_u64 << 53) as f64
    }
}

fn offsets(length: f64) -> Vec<f64> {
    let mut rng = Rng::new(0x5EED_0FC1_0740_1D00);
    (0..SAMPLES).map(|_| rng.next_f64() * length).collect()
}

fn placement(length: f64) -> Placement {
    Placement::new(120.0, 35.0, -12.0, 0.7, length)
}

fn bench_segments(c: &mut Criterion) {
    let length = 80.0;
    let ds = offsets(length);
    let segments = [
        ("line", Segment::line(placement(length))),
        ("arc", Segment::arc(placement(length), 0.015).unwrap()),
        (
            "spiral",
            Segment::spiral(placement(length), -0.004, 0.018).unwrap(),
        ),
        (
            "poly3",
            Segment::poly3(placement(length), Poly3::new(0.0, 0.05, 0.002, -1e-5)),
        ),
        (
            "param_poly3",
            Segment::param_poly3(
                placement(length),
                ParamPoly3::new(
                    Cubic::new(0.0, 80.0, 0.0, 0.0),
                    Cubic::new(0.0, 0.0, 12.0, -4.0),
                    ParamRange::Normalized,
                ),
            )
            .unwrap(),
        ),
    ];

    let mut group = c.benchmark_group("segment_evaluate");
    group.throughput(Throughput::Elements(SAMPLES as u64));
    for (name, segment) in &segments {
        group.bench_function(*name, |b| {
            b.iter(|| {
                for &offset in &ds {
                    black_box(segment.evaluate(black_box(offset)));
                }
            });
        });
    }
    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_construct");
    group.bench_function("spiral", |b| {
        b.iter(|| Segment::spiral(black_box(placement(50.0)), black_box(0.01), black_box(0.03)));
    });
    group.bench_function("arc", |b| {
        b.iter(|| Segment::arc(black_box(placement(50.0)), black_box(0.02)));
    });
    group.finish();
}

fn bench_clothoid(c: &mut Criterion) {
    let ds = offsets(400.0);
    let mut group = c.benchmark_group("clothoid");
    group.throughput(Throughput::Elements(SAMPLES as u64));
    // Short arguments stay in the power series branch, long ones reach the auxiliary functions.
    for (name, cdot) in [("series", 1e-5), ("auxiliary", 0.05)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &s in &ds {
                    black_box(clothoid(black_box(s), cdot));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segments, bench_construct, bench_clothoid);
criterion_main!(benches);
