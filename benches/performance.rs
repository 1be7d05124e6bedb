// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{Point3, Vector3};
use yuhe::grid::{count_inside, generate_test_grid};
use yuhe::{generate_function, parse_coordinate, Language, OrientedBox};

fn rotated_box() -> OrientedBox {
    OrientedBox::new(
        Vector3::new(0.2, -0.3, 0.1),
        Vector3::new(30.0, -60.0, 120.0),
        Vector3::new(1.5, 1.0, 0.75),
        0.1,
    )
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["3", "-12.5e-3", "1.5abc", "abc"] {
        group.bench_with_input(BenchmarkId::new("coordinate", input), &input, |b, text| {
            b.iter(|| parse_coordinate(black_box(text)));
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let obb = rotated_box();
    let point = Point3::new(0.3, 0.1, -0.2);

    c.bench_function("oriented_contains", |b| {
        b.iter(|| obb.contains(black_box(&point)));
    });
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let obb = rotated_box();

    for n in [10usize, 50] {
        let grid = generate_test_grid(-2.0, 2.0, n).unwrap();
        group.bench_with_input(BenchmarkId::new("count_inside", n), &grid, |b, points| {
            b.iter(|| count_inside(&obb, black_box(points)));
        });
    }

    group.finish();
}

fn bench_codegen(c: &mut Criterion) {
    let obb = rotated_box();

    c.bench_function("generate_cpp", |b| {
        b.iter(|| generate_function(black_box(&obb), Language::Cpp));
    });
}

criterion_group!(benches, bench_parse, bench_contains, bench_grid, bench_codegen);
criterion_main!(benches);
