//! Criterion benchmarks: narrow (i32) vs wide (i64/i128) primitives.
//! Inputs stay within the narrow ceilings so both paths compute the same thing.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p planar

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::cfg::INTERSECT_LINE_SEGMENTS_MAX;
use planar::{
    calc_line, calc_line_wide, intersect_line_segments, intersect_line_segments_wide,
    intersect_lines, intersect_lines_wide, vector_cross_product, vector_cross_product_wide, Point,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const BATCH: usize = 256;

fn random_quads(n: usize, seed: u64) -> Vec<[Point; 4]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = INTERSECT_LINE_SEGMENTS_MAX;
    let mut p = move || Point::new(rng.gen_range(-m..=m), rng.gen_range(-m..=m));
    (0..n).map(|_| [p(), p(), p(), p()]).collect()
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for precision in ["narrow", "wide"] {
        group.bench_with_input(
            BenchmarkId::new("line_segments", precision),
            &precision,
            |b, &precision| {
                b.iter_batched(
                    || random_quads(BATCH, 11),
                    |quads| {
                        for [p1, p2, p3, p4] in quads {
                            let r = if precision == "narrow" {
                                intersect_line_segments(p1, p2, p3, p4)
                            } else {
                                intersect_line_segments_wide(p1, p2, p3, p4)
                            };
                            black_box(r);
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(
            BenchmarkId::new("lines", precision),
            &precision,
            |b, &precision| {
                b.iter_batched(
                    || random_quads(BATCH, 12),
                    |quads| {
                        for [p1, p2, p3, p4] in quads {
                            let r = if precision == "narrow" {
                                intersect_lines(calc_line(p1, p2), calc_line(p3, p4))
                            } else {
                                intersect_lines_wide(calc_line_wide(p1, p2), calc_line_wide(p3, p4))
                            };
                            black_box(r);
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_cross(c: &mut Criterion) {
    let quads = random_quads(BATCH, 13);
    let mut group = c.benchmark_group("cross_product");
    group.bench_function("narrow", |b| {
        b.iter(|| {
            for &[p1, p2, p3, _] in &quads {
                black_box(vector_cross_product(p1, p2, p3));
            }
        })
    });
    group.bench_function("wide", |b| {
        b.iter(|| {
            for &[p1, p2, p3, _] in &quads {
                black_box(vector_cross_product_wide(p1, p2, p3));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_intersect, bench_cross);
criterion_main!(benches);
