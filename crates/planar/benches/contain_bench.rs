//! Criterion benchmarks for the O(n) polygon predicates.
//! Focus sizes: n in {8, 64, 512} vertices of a convex polygon.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::{
    convex_polygon_contains_point, polygon_contains_point, polygon_intersects_line_segment,
    polygon_is_convex, rotate_point, Point,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Regular n-gon of radius 10,000 around the origin.
fn regular_polygon(n: usize) -> Vec<Point> {
    let start = Point::new(10_000, 0);
    (0..n)
        .map(|i| rotate_point(Point::default(), 360.0 * i as f64 / n as f64, start))
        .collect()
}

fn probes(seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..64)
        .map(|_| Point::new(rng.gen_range(-12_000..=12_000), rng.gen_range(-12_000..=12_000)))
        .collect()
}

fn bench_polygon(c: &mut Criterion) {
    let qs = probes(21);
    let mut group = c.benchmark_group("polygon");
    for &n in &[8usize, 64, 512] {
        let poly = regular_polygon(n);
        group.bench_with_input(BenchmarkId::new("is_convex", n), &poly, |b, poly| {
            b.iter(|| black_box(polygon_is_convex(poly)))
        });
        group.bench_with_input(BenchmarkId::new("contains_convex", n), &poly, |b, poly| {
            b.iter(|| {
                for &q in &qs {
                    black_box(convex_polygon_contains_point(poly, q));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("contains_winding", n), &poly, |b, poly| {
            b.iter(|| {
                for &q in &qs {
                    black_box(polygon_contains_point(poly, q));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("intersects_segment", n), &poly, |b, poly| {
            b.iter(|| {
                for w in qs.windows(2) {
                    black_box(polygon_intersects_line_segment(poly, w[0], w[1]));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
