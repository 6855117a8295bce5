//! Point-in-shape predicates used for hit-testing.
//!
//! Boundaries count as inside. Polygon predicates are exact (i64 orientation
//! tests); ellipse and arc predicates work in f64. Degenerate shapes answer
//! `false`; non-positive sizes are argument errors.

use nalgebra::Rotation2;

use super::arc::CircularArc;
use super::proximity::{distance_point_line, distance_point_point};
use super::types::{Point, Rectangle};
use super::util::{cross3, dist2, on_segment};
use crate::error::{ensure_finite, ensure_positive, Result};

/// Twice the signed area (shoelace), exact.
pub(crate) fn signed_area2(points: &[Point]) -> i128 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
        })
        .sum()
}

#[inline]
fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Triangle `a`,`b`,`c` (either orientation) contains `p`. Collinear corners
/// describe no triangle and contain nothing.
pub fn triangle_contains_point(a: Point, b: Point, c: Point, p: Point) -> bool {
    let area = cross3(a, b, c);
    if area == 0 {
        return false;
    }
    let d = [cross3(a, b, p), cross3(b, c, p), cross3(c, a, p)];
    if area > 0 {
        d.iter().all(|&v| v >= 0)
    } else {
        d.iter().all(|&v| v <= 0)
    }
}

/// Simple-and-convex test: every turn has the same sign (collinear vertices
/// allowed) and the outline winds exactly once.
pub fn polygon_is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut turn = 0i64;
    for i in 0..n {
        let s = cross3(points[i], points[(i + 1) % n], points[(i + 2) % n]).signum();
        if s == 0 {
            continue;
        }
        if turn == 0 {
            turn = s;
        } else if s != turn {
            return false;
        }
    }
    if turn == 0 {
        return false;
    }
    // A star winds more than once with consistent turns; the edge directions
    // of a convex outline change sign at most twice per axis.
    let flips = |axis: fn(Point, Point) -> i64| {
        let (mut first, mut prev, mut count) = (0, 0, 0);
        for s in edges(points).map(|(a, b)| axis(a, b).signum()) {
            if s == 0 {
                continue;
            }
            if first == 0 {
                first = s;
            } else if s != prev {
                count += 1;
            }
            prev = s;
        }
        // closing pair, last edge back to the first
        if prev != first {
            count += 1;
        }
        count
    };
    flips(|a, b| i64::from(b.x) - i64::from(a.x)) <= 2
        && flips(|a, b| i64::from(b.y) - i64::from(a.y)) <= 2
}

/// Fast path for convex polygons (either orientation): `p` is on the inner
/// side of every edge. Answers are meaningless for non-convex input; check
/// with `polygon_is_convex` first.
pub fn convex_polygon_contains_point(points: &[Point], p: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    let orientation = signed_area2(points).signum() as i64;
    if orientation == 0 {
        return false;
    }
    edges(points).all(|(a, b)| {
        let s = cross3(a, b, p).signum();
        s == 0 || s == orientation
    })
}

/// General polygon (self-intersections allowed) with the non-zero winding rule.
pub fn polygon_contains_point(points: &[Point], p: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut winding = 0i32;
    for (a, b) in edges(points) {
        if on_segment(a, b, p) {
            return true;
        }
        if a.y <= p.y {
            if b.y > p.y && cross3(a, b, p) > 0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross3(a, b, p) < 0 {
            winding -= 1;
        }
    }
    winding != 0
}

pub(crate) fn ensure_rectangle(rect: &Rectangle) -> Result<()> {
    ensure_positive("width", rect.width)?;
    ensure_positive("height", rect.height)
}

/// Axis-aligned rectangle contains `p` (edges inclusive).
pub fn rectangle_contains_point(rect: &Rectangle, p: Point) -> Result<bool> {
    ensure_rectangle(rect)?;
    Ok(rect.left() <= p.x && p.x <= rect.right() && rect.top() <= p.y && p.y <= rect.bottom())
}

/// Closed disk contains `p`, exact.
pub fn circle_contains_point(center: Point, radius: i32, p: Point) -> Result<bool> {
    ensure_positive("radius", radius)?;
    let r = i64::from(radius);
    Ok(dist2(center, p) <= r * r)
}

/// Ellipse with full axis lengths `width`×`height`, rotated by `angle_deg`
/// around `center`, contains `p`.
pub fn ellipse_contains_point(
    center: Point,
    width: i32,
    height: i32,
    angle_deg: f64,
    p: Point,
) -> Result<bool> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    ensure_finite("angle", angle_deg)?;
    let local = Rotation2::new(-angle_deg.to_radians()) * (p.to_f() - center.to_f());
    let (rx, ry) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let q = (local.x / rx).powi(2) + (local.y / ry).powi(2);
    Ok(q <= 1.0 + 1e-12)
}

/// `p` is within `tolerance` of the arc from `start` through `mid` to `end`.
/// Collinear control points describe a straight segment from `start` to `end`.
pub fn arc_contains_point(start: Point, mid: Point, end: Point, tolerance: u32, p: Point) -> bool {
    let tol = f64::from(tolerance);
    let Some(arc) = CircularArc::through(start, mid, end) else {
        return distance_point_line(p, start, end, true) <= tol;
    };
    if distance_point_point(p, start) <= tol || distance_point_point(p, end) <= tol {
        return true;
    }
    let v = p.to_f();
    ((v - arc.center).norm() - arc.radius).abs() <= tol && arc.contains_angle(arc.angle_of(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn square() -> Vec<Point> {
        vec![p(0, 0), p(10, 0), p(10, 10), p(0, 10)]
    }

    #[test]
    fn triangle_either_orientation_and_degenerate() {
        let (a, b, c) = (p(0, 0), p(10, 0), p(0, 10));
        assert!(triangle_contains_point(a, b, c, p(2, 2)));
        assert!(triangle_contains_point(c, b, a, p(2, 2)));
        assert!(triangle_contains_point(a, b, c, p(5, 5)));
        assert!(!triangle_contains_point(a, b, c, p(6, 6)));
        assert!(!triangle_contains_point(a, p(5, 0), b, p(3, 0)));
    }

    #[test]
    fn convexity() {
        assert!(polygon_is_convex(&square()));
        let mut rev = square();
        rev.reverse();
        assert!(polygon_is_convex(&rev));
        // collinear vertex on an edge is still convex
        assert!(polygon_is_convex(&[p(0, 0), p(5, 0), p(10, 0), p(10, 10), p(0, 10)]));
        let dart = [p(0, 0), p(10, 5), p(0, 10), p(3, 5)];
        assert!(!polygon_is_convex(&dart));
        let star = [p(0, -10), p(6, 8), p(-9, -3), p(9, -3), p(-6, 8)];
        assert!(!polygon_is_convex(&star));
        assert!(!polygon_is_convex(&[p(0, 0), p(1, 1), p(2, 2)]));
    }

    #[test]
    fn convex_fast_path_matches_general() {
        let sq = square();
        for q in [p(5, 5), p(0, 5), p(10, 10), p(11, 5), p(-1, -1)] {
            assert_eq!(
                convex_polygon_contains_point(&sq, q),
                polygon_contains_point(&sq, q),
                "{q:?}"
            );
        }
    }

    #[test]
    fn general_polygon_uses_nonzero_winding() {
        let dart = [p(0, 0), p(10, 5), p(0, 10), p(3, 5)];
        assert!(polygon_contains_point(&dart, p(5, 5)));
        assert!(!polygon_contains_point(&dart, p(1, 5)));
        assert!(polygon_contains_point(&dart, p(3, 5)));
        // pentagram center is wound twice
        let star = [p(0, -10), p(6, 8), p(-9, -3), p(9, -3), p(-6, 8)];
        assert!(polygon_contains_point(&star, p(0, 0)));
        assert!(!polygon_contains_point(&[p(0, 0), p(1, 1)], p(0, 0)));
    }

    #[test]
    fn rectangle_and_circle_reject_bad_sizes() {
        let r = Rectangle::new(0, 0, 10, 5);
        assert!(rectangle_contains_point(&r, p(10, 5)).unwrap());
        assert!(!rectangle_contains_point(&r, p(10, 6)).unwrap());
        let err = rectangle_contains_point(&Rectangle::new(0, 0, 0, 5), p(0, 0)).unwrap_err();
        assert_eq!(err.arg(), "width");
        assert!(circle_contains_point(p(0, 0), 5, p(3, 4)).unwrap());
        assert!(!circle_contains_point(p(0, 0), 5, p(4, 4)).unwrap());
        assert_eq!(circle_contains_point(p(0, 0), 0, p(0, 0)).unwrap_err().arg(), "radius");
    }

    #[test]
    fn rotated_ellipse() {
        let c = p(0, 0);
        assert!(ellipse_contains_point(c, 20, 10, 0.0, p(10, 0)).unwrap());
        assert!(!ellipse_contains_point(c, 20, 10, 0.0, p(0, 6)).unwrap());
        assert!(ellipse_contains_point(c, 20, 10, 90.0, p(0, 9)).unwrap());
        assert!(!ellipse_contains_point(c, 20, 10, 90.0, p(9, 0)).unwrap());
        assert!(ellipse_contains_point(c, 20, 10, f64::NAN, c).is_err());
    }

    #[test]
    fn arc_hit_test() {
        let (s, m, e) = (p(10, 0), p(0, 10), p(-10, 0));
        assert!(arc_contains_point(s, m, e, 1, p(7, 7)));
        assert!(!arc_contains_point(s, m, e, 1, p(0, -10)));
        assert!(!arc_contains_point(s, m, e, 1, p(0, 0)));
        assert!(arc_contains_point(s, m, e, 1, p(11, 0)));
        // straight "arc"
        assert!(arc_contains_point(p(0, 0), p(5, 0), p(10, 0), 0, p(7, 0)));
        assert!(!arc_contains_point(p(0, 0), p(5, 0), p(10, 0), 0, p(12, 0)));
    }
}
