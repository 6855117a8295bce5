//! Distances, nearest points and perpendicular feet.
//!
//! All integer work is done in i64/i128, so these are valid over the whole
//! coordinate range. The one narrow entry point is `distance_point_point_fast`.

use std::num::Wrapping;

use super::types::Point;
use super::util::{cross3, dist2, div_round, dot3, to_coord};

/// Euclidean distance.
pub fn distance_point_point(p1: Point, p2: Point) -> f64 {
    (dist2(p1, p2) as f64).sqrt()
}

/// Squared distance in i32: cheap comparisons on small diagrams.
///
/// Valid for coordinates within `cfg::DISTANCE_POINT_POINT_FAST_MAX`.
pub fn distance_point_point_fast(p1: Point, p2: Point) -> i32 {
    let dx = Wrapping(p2.x) - Wrapping(p1.x);
    let dy = Wrapping(p2.y) - Wrapping(p1.y);
    (dx * dx + dy * dy).0
}

/// Squared distance in i64.
pub fn distance_point_point_fast_wide(p1: Point, p2: Point) -> i64 {
    dist2(p1, p2)
}

/// Distance from `p` to the line through `l1`,`l2`.
///
/// With `is_segment`, a foot of the perpendicular outside the segment yields
/// the (larger) distance to the nearer endpoint instead. A degenerate line
/// (`l1 == l2`) is treated as the point `l1`.
pub fn distance_point_line(p: Point, l1: Point, l2: Point, is_segment: bool) -> f64 {
    if l1 == l2 {
        return distance_point_point(p, l1);
    }
    if is_segment {
        if dot3(l1, l2, p) < 0 {
            return distance_point_point(p, l1);
        }
        if dot3(l2, l1, p) < 0 {
            return distance_point_point(p, l2);
        }
    }
    (cross3(l1, l2, p) as f64).abs() / (dist2(l1, l2) as f64).sqrt()
}

/// Is `p` within `tolerance` of the line (or segment) through `l1`,`l2`?
pub fn line_contains_point(l1: Point, l2: Point, is_segment: bool, tolerance: u32, p: Point) -> bool {
    distance_point_line(p, l1, l2, is_segment) <= f64::from(tolerance)
}

/// Projection of `p` onto the line through `l1`,`l2` at parameter `num/den`,
/// rounded to the grid.
fn project(l1: Point, l2: Point, num: i64, den: i64) -> Point {
    let dx = i128::from(l2.x) - i128::from(l1.x);
    let dy = i128::from(l2.y) - i128::from(l1.y);
    let (num, den) = (i128::from(num), i128::from(den));
    let x = i128::from(l1.x) + div_round(num * dx, den);
    let y = i128::from(l1.y) + div_round(num * dy, den);
    match (to_coord(x), to_coord(y)) {
        (Some(x), Some(y)) => Point::new(x, y),
        _ => Point::INVALID,
    }
}

/// Point of the closed segment `s1`–`s2` nearest to `p`. The projection is
/// clamped to the endpoints; a degenerate segment returns `s1`.
pub fn calc_nearest_point_of_line_segment(s1: Point, s2: Point, p: Point) -> Point {
    let len2 = dist2(s1, s2);
    if len2 == 0 {
        return s1;
    }
    let t = dot3(s1, s2, p);
    if t <= 0 {
        s1
    } else if t >= len2 {
        s2
    } else {
        project(s1, s2, t, len2)
    }
}

/// Foot of the perpendicular dropped from `p` onto the infinite line through
/// `l1`,`l2` (not clamped). Sentinel for a degenerate line.
pub fn calc_dropped_perpendicular_foot(p: Point, l1: Point, l2: Point) -> Point {
    let len2 = dist2(l1, l2);
    if len2 == 0 {
        return Point::INVALID;
    }
    project(l1, l2, dot3(l1, l2, p), len2)
}
