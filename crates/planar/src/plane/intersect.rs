//! Intersection family: line ∩ line, line ∩ segment, segment ∩ segment.
//!
//! Conventions
//! - Results are `Point`; `Point::INVALID` means "no intersection" (parallel,
//!   coincident, degenerate, outside the segment, or not representable).
//! - Integer results are exact when the true intersection is on the grid,
//!   otherwise rounded half away from zero with integer division.
//! - Segment bounds are tested on the exact rational intersection, inclusive
//!   of endpoints, against the segment's box only. The first pair of a
//!   line/segment call is therefore infinite and the second is not.
//! - Narrow variants keep coefficients and the determinant in wrapping i32;
//!   only the `coefficient·c` numerators are widened. Valid up to
//!   `cfg::INTERSECT_*_MAX`. Wide variants are exact over `±cfg::COORDINATE_MAX`.

use std::num::Wrapping;

use nalgebra::Matrix2;

use super::line::{calc_line, calc_line_wide};
use super::types::{Line, Point, PointF, WideLine};
use super::util::{cross3, div_round, on_segment, ratio_within, to_coord};

/// Cramer numerators and determinant: `x = xn / det`, `y = yn / det`.
#[derive(Clone, Copy, Debug)]
struct Crossing {
    xn: i128,
    yn: i128,
    det: i128,
}

impl Crossing {
    fn point(&self) -> Point {
        match (
            to_coord(div_round(self.xn, self.det)),
            to_coord(div_round(self.yn, self.det)),
        ) {
            (Some(x), Some(y)) => Point::new(x, y),
            _ => Point::INVALID,
        }
    }

    fn within(&self, s1: Point, s2: Point) -> bool {
        ratio_within(self.xn, self.det, s1.x, s2.x) && ratio_within(self.yn, self.det, s1.y, s2.y)
    }
}

fn crossing(l1: Line, l2: Line) -> Option<Crossing> {
    let det = Wrapping(l1.a) * Wrapping(l2.b) - Wrapping(l2.a) * Wrapping(l1.b);
    if det.0 == 0 {
        return None;
    }
    let (b1, c1, b2, c2) = (
        i128::from(l1.b),
        i128::from(l1.c),
        i128::from(l2.b),
        i128::from(l2.c),
    );
    let (a1, a2) = (i128::from(l1.a), i128::from(l2.a));
    Some(Crossing {
        xn: b1 * c2 - b2 * c1,
        yn: a2 * c1 - a1 * c2,
        det: i128::from(det.0),
    })
}

fn crossing_wide(l1: WideLine, l2: WideLine) -> Option<Crossing> {
    let (a1, b1, c1) = (i128::from(l1.a), i128::from(l1.b), i128::from(l1.c));
    let (a2, b2, c2) = (i128::from(l2.a), i128::from(l2.b), i128::from(l2.c));
    let det = a1 * b2 - a2 * b1;
    if det == 0 {
        return None;
    }
    Some(Crossing {
        xn: b1 * c2 - b2 * c1,
        yn: a2 * c1 - a1 * c2,
        det,
    })
}

/// Infinite line ∩ infinite line. Parallel or coincident lines give the sentinel.
pub fn intersect_lines(l1: Line, l2: Line) -> Point {
    crossing(l1, l2).map_or(Point::INVALID, |c| c.point())
}

pub fn intersect_lines_wide(l1: WideLine, l2: WideLine) -> Point {
    crossing_wide(l1, l2).map_or(Point::INVALID, |c| c.point())
}

/// Infinite line through `l1`,`l2` ∩ closed segment `s1`–`s2`.
pub fn intersect_line_with_line_segment(l1: Point, l2: Point, s1: Point, s2: Point) -> Point {
    match crossing(calc_line(l1, l2), calc_line(s1, s2)) {
        Some(c) if c.within(s1, s2) => c.point(),
        _ => Point::INVALID,
    }
}

pub fn intersect_line_with_line_segment_wide(
    l1: Point,
    l2: Point,
    s1: Point,
    s2: Point,
) -> Point {
    match crossing_wide(calc_line_wide(l1, l2), calc_line_wide(s1, s2)) {
        Some(c) if c.within(s1, s2) => c.point(),
        _ => Point::INVALID,
    }
}

/// Closed segment `s1`–`s2` ∩ closed segment `s3`–`s4`.
///
/// Parallel, collinear-overlapping and degenerate segments give the sentinel;
/// use `line_segments_intersect` for a yes/no answer that includes overlaps.
pub fn intersect_line_segments(s1: Point, s2: Point, s3: Point, s4: Point) -> Point {
    match crossing(calc_line(s1, s2), calc_line(s3, s4)) {
        Some(c) if c.within(s1, s2) && c.within(s3, s4) => c.point(),
        _ => Point::INVALID,
    }
}

pub fn intersect_line_segments_wide(s1: Point, s2: Point, s3: Point, s4: Point) -> Point {
    match crossing_wide(calc_line_wide(s1, s2), calc_line_wide(s3, s4)) {
        Some(c) if c.within(s1, s2) && c.within(s3, s4) => c.point(),
        _ => Point::INVALID,
    }
}

/// Exact predicate: do the closed segments share at least one point?
/// Touching endpoints and collinear overlaps count.
pub fn line_segments_intersect(s1: Point, s2: Point, s3: Point, s4: Point) -> bool {
    let d1 = cross3(s3, s4, s1).signum();
    let d2 = cross3(s3, s4, s2).signum();
    let d3 = cross3(s1, s2, s3).signum();
    let d4 = cross3(s1, s2, s4).signum();
    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    (d1 == 0 && on_segment(s3, s4, s1))
        || (d2 == 0 && on_segment(s3, s4, s2))
        || (d3 == 0 && on_segment(s1, s2, s3))
        || (d4 == 0 && on_segment(s1, s2, s4))
}

/// Parameters `(t, u)` with `p1 + t·(p2-p1) == p3 + u·(p4-p3)`; `None` if
/// (nearly) parallel.
fn params_f(p1: PointF, p2: PointF, p3: PointF, p4: PointF) -> Option<(f64, f64)> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let m = Matrix2::from_columns(&[d1, -d2]);
    if m.determinant().abs() <= f64::EPSILON * d1.norm() * d2.norm() {
        return None;
    }
    let tu = m.try_inverse()? * (p3 - p1);
    Some((tu.x, tu.y))
}

/// Float overload of `intersect_lines` on two-point lines.
pub fn intersect_lines_f(p1: PointF, p2: PointF, p3: PointF, p4: PointF) -> Option<PointF> {
    let (t, _) = params_f(p1, p2, p3, p4)?;
    Some(p1 + (p2 - p1) * t)
}

/// Float overload of `intersect_line_segments` (closed, with a 1e-9 parameter slack).
pub fn intersect_line_segments_f(
    p1: PointF,
    p2: PointF,
    p3: PointF,
    p4: PointF,
) -> Option<PointF> {
    const SLACK: f64 = 1e-9;
    let (t, u) = params_f(p1, p2, p3, p4)?;
    let inside = |s: f64| (-SLACK..=1.0 + SLACK).contains(&s);
    if inside(t) && inside(u) {
        Some(p1 + (p2 - p1) * t)
    } else {
        None
    }
}
