// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of flattening and hit testing.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use silhouette::{BezPath, Point, Silhouette};

// A phone-like outline with rounded corners.
const OUTLINE: &str = "M20 0 L180 0 C191 0 200 9 200 20 L200 380 C200 391 191 400 180 400 \
                       L20 400 C9 400 0 391 0 380 L0 20 C0 9 9 0 20 0 Z";

fn bench_flatten(cc: &mut Criterion) {
    let path = BezPath::from_svg(OUTLINE).unwrap();

    cc.bench_function("flatten coarse", |bb| {
        bb.iter(|| black_box(&path).flatten(black_box(50.0)).unwrap());
    });
    cc.bench_function("flatten fine", |bb| {
        bb.iter(|| black_box(&path).flatten(black_box(0.01)).unwrap());
    });
}

fn bench_hit_test(cc: &mut Criterion) {
    let path = BezPath::from_svg(OUTLINE).unwrap();
    let shape = Silhouette::from_path(&path, 0.1, |c| c).unwrap();
    let inside = Point::new(100.0, 200.0);
    let corner = Point::new(1.0, 1.0);
    let outside = Point::new(300.0, 200.0);

    cc.bench_function("hit test inside", |bb| {
        bb.iter(|| shape.hit_test(black_box(inside)));
    });
    cc.bench_function("hit test corner", |bb| {
        bb.iter(|| shape.hit_test(black_box(corner)));
    });
    cc.bench_function("hit test rejected by bounds", |bb| {
        bb.iter(|| shape.hit_test(black_box(outside)));
    });
}

criterion_group!(benches, bench_flatten, bench_hit_test);
criterion_main!(benches);
