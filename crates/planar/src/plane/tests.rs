use super::*;
use crate::cfg::{
    CALC_LINE_MAX, CALC_PERPENDICULAR_BISECTOR_MAX, INTERSECT_LINE_SEGMENTS_MAX,
    VECTOR_CROSS_PRODUCT_MAX, VECTOR_DOT_PRODUCT_MAX,
};
use proptest::prelude::*;

const SCALES: [i32; 6] = [1, 10, 100, 1_000, 10_000, 100_000];

fn pt(range: i32) -> impl Strategy<Value = Point> {
    (-range..=range, -range..=range).prop_map(|(x, y)| Point::new(x, y))
}

fn add(p: Point, d: Point, k: i32) -> Point {
    Point::new(p.x + k * d.x, p.y + k * d.y)
}

/// Two non-parallel directions through a common grid point `q`.
fn crossing_setup() -> impl Strategy<Value = (Point, Point, Point)> {
    (pt(20), pt(20), pt(20)).prop_filter("non-parallel directions", |(_, d1, d2)| {
        vector_cross_product_wide(Point::default(), *d1, *d2) != 0
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn cross_product_scales_quadratically(a in pt(100), b in pt(100), c in pt(100)) {
        let base = vector_cross_product_wide(a, b, c);
        for k in SCALES {
            let kk = i64::from(k) * i64::from(k);
            prop_assert_eq!(
                vector_cross_product_wide(a.scaled(k), b.scaled(k), c.scaled(k)),
                base * kk
            );
            if 100 * k <= VECTOR_CROSS_PRODUCT_MAX {
                prop_assert_eq!(
                    i64::from(vector_cross_product(a.scaled(k), b.scaled(k), c.scaled(k))),
                    base * kk
                );
            }
        }
    }

    #[test]
    fn grid_crossings_scale_linearly((q, d1, d2) in crossing_setup()) {
        let (s1, s2, s3, s4) = (add(q, d1, -1), add(q, d1, 1), add(q, d2, -1), add(q, d2, 1));
        for k in SCALES {
            let pts = [s1.scaled(k), s2.scaled(k), s3.scaled(k), s4.scaled(k)];
            let expect = q.scaled(k);
            prop_assert_eq!(intersect_line_segments_wide(pts[0], pts[1], pts[2], pts[3]), expect);
            prop_assert_eq!(
                intersect_line_with_line_segment_wide(pts[0], pts[1], pts[2], pts[3]),
                expect
            );
            prop_assert_eq!(
                intersect_lines_wide(calc_line_wide(pts[0], pts[1]), calc_line_wide(pts[2], pts[3])),
                expect
            );
            // coordinates are at most 40k
            if 40 * k <= INTERSECT_LINE_SEGMENTS_MAX {
                prop_assert_eq!(intersect_line_segments(pts[0], pts[1], pts[2], pts[3]), expect);
                prop_assert_eq!(
                    intersect_lines(calc_line(pts[0], pts[1]), calc_line(pts[2], pts[3])),
                    expect
                );
            }
        }
    }

    // every point-product ceiling is at least INTERSECT_LINE_SEGMENTS_MAX
    #[test]
    fn narrow_equals_wide_within_ceilings(
        a in pt(INTERSECT_LINE_SEGMENTS_MAX),
        b in pt(INTERSECT_LINE_SEGMENTS_MAX),
        c in pt(INTERSECT_LINE_SEGMENTS_MAX),
        d in pt(INTERSECT_LINE_SEGMENTS_MAX),
    ) {
        prop_assert_eq!(intersect_line_segments(a, b, c, d), intersect_line_segments_wide(a, b, c, d));
        prop_assert_eq!(
            intersect_line_with_line_segment(a, b, c, d),
            intersect_line_with_line_segment_wide(a, b, c, d)
        );
        prop_assert_eq!(i64::from(vector_cross_product(a, b, c)), vector_cross_product_wide(a, b, c));
        prop_assert_eq!(i64::from(vector_dot_product3(a, b, c)), vector_dot_product3_wide(a, b, c));
        prop_assert_eq!(
            i64::from(vector_dot_product4(a, b, c, d)),
            vector_dot_product4_wide(a, b, c, d)
        );
        prop_assert_eq!(i64::from(distance_point_point_fast(a, b)), distance_point_point_fast_wide(a, b));
    }

    #[test]
    fn line_constructors_agree_within_ceilings(
        a in pt(CALC_LINE_MAX),
        b in pt(CALC_LINE_MAX),
        u in pt(VECTOR_DOT_PRODUCT_MAX),
        v in pt(VECTOR_DOT_PRODUCT_MAX),
        m in pt(CALC_PERPENDICULAR_BISECTOR_MAX),
        n in pt(CALC_PERPENDICULAR_BISECTOR_MAX),
    ) {
        prop_assert_eq!(calc_line(a, b).widen(), calc_line_wide(a, b));
        prop_assert_eq!(calc_perpendicular_line(a, b).widen(), calc_perpendicular_line_wide(a, b));
        prop_assert_eq!(i64::from(vector_dot_product(u, v)), vector_dot_product_wide(u, v));
        prop_assert_eq!(
            calc_perpendicular_bisector(m, n).widen(),
            calc_perpendicular_bisector_wide(m, n)
        );
    }

    #[test]
    fn crossing_does_not_depend_on_the_defining_points(
        (q, d1, d2) in crossing_setup(),
        (i, j) in (-5i32..=5, -5i32..=5).prop_filter("distinct", |(i, j)| i != j),
        (r, s) in (-5i32..=5, -5i32..=5).prop_filter("distinct", |(r, s)| r != s),
    ) {
        let l1 = calc_line_wide(add(q, d1, -1), add(q, d1, 1));
        let l1b = calc_line_wide(add(q, d1, i), add(q, d1, j));
        let l2 = calc_line_wide(add(q, d2, -1), add(q, d2, 1));
        let l2b = calc_line_wide(add(q, d2, r), add(q, d2, s));
        prop_assert!(l1.same_line_as(&l1b));
        prop_assert!(l2.same_line_as(&l2b));
        prop_assert_eq!(intersect_lines_wide(l1, l2), q);
        prop_assert_eq!(intersect_lines_wide(l1b, l2b), q);
        prop_assert_eq!(intersect_lines_wide(l2b, l1), q);
        let narrow = intersect_lines(calc_line(add(q, d1, i), add(q, d1, j)), calc_line(add(q, d2, r), add(q, d2, s)));
        prop_assert_eq!(narrow, q);
    }
}

#[test]
fn reference_values() {
    assert_eq!(
        calc_line(Point::new(-1, -1), Point::new(1, 1)),
        Line::new(-2, 2, 0)
    );
    assert_eq!(
        calc_perpendicular_line(Point::new(-1, -1), Point::new(1, 1)),
        Line::new(-2, -2, -4)
    );
    assert_eq!(
        calc_nearest_point_of_line_segment(Point::new(-4, 0), Point::new(4, 0), Point::new(-8, 3)),
        Point::new(-4, 0)
    );
    assert_eq!(
        vector_cross_product(Point::new(3, -4), Point::new(6, 8), Point::new(-12, 0)),
        192
    );
}

#[test]
fn segments_through_shared_vertex_meet_there() {
    let q = Point::new(7, -3);
    assert_eq!(
        intersect_line_segments(q, Point::new(20, 5), Point::new(-4, 9), q),
        q
    );
    assert!(line_segments_intersect(q, Point::new(20, 5), Point::new(-4, 9), q));
}
