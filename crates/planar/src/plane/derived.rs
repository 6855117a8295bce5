//! Derived points and rectangles for shape editing: handle offsets, bounds,
//! centroids, Bézier samples, rotations and arc tangents.

use nalgebra::{Rotation2, Vector2};

use super::arc::CircularArc;
use super::contain::ensure_rectangle;
use super::line::calc_line_wide;
use super::types::{Point, PointF, Rectangle, WideLine};
use super::util::{div_round, norm_angle, to_coord};
use crate::error::{ensure_finite, ensure_positive, Result};

/// Distance below which a point counts as lying on an arc's circle.
const ON_CIRCLE: f64 = 0.5;

fn offset(p: Point, dir: PointF, distance: f64) -> Point {
    Point::from_f_rounded(p.to_f() + dir * distance)
}

/// `p` moved by `distance` along the left normal `(l1.y - l2.y, l2.x - l1.x)`
/// of the directed line `l1 → l2`. Sentinel for a degenerate line.
pub fn calc_normal_vector_of_line(l1: Point, l2: Point, p: Point, distance: i32) -> Point {
    let n = Vector2::new(
        f64::from(l1.y) - f64::from(l2.y),
        f64::from(l2.x) - f64::from(l1.x),
    );
    let len = n.norm();
    if len == 0.0 {
        return Point::INVALID;
    }
    offset(p, n / len, f64::from(distance))
}

/// `p` moved outward by `distance` across the rectangle edge nearest to it,
/// measured to the edge segments. Ties go to the first of left, top, right,
/// bottom.
pub fn calc_normal_vector_of_rectangle(rect: &Rectangle, p: Point, distance: i32) -> Result<Point> {
    ensure_rectangle(rect)?;
    let (px, py) = (i64::from(p.x), i64::from(p.y));
    let (l, t) = (i64::from(rect.left()), i64::from(rect.top()));
    let (r, b) = (l + i64::from(rect.width), t + i64::from(rect.height));
    let (cx, cy) = (px.clamp(l, r), py.clamp(t, b));
    let d2 = |dx: i64, dy: i64| i128::from(dx) * i128::from(dx) + i128::from(dy) * i128::from(dy);
    let edges = [
        (d2(l - px, cy - py), (-1, 0)),
        (d2(cx - px, t - py), (0, -1)),
        (d2(r - px, cy - py), (1, 0)),
        (d2(cx - px, b - py), (0, 1)),
    ];
    let mut best = edges[0];
    for e in &edges[1..] {
        if e.0 < best.0 {
            best = *e;
        }
    }
    let (nx, ny) = best.1;
    let d = i64::from(distance);
    let moved = (to_coord(i128::from(px + nx * d)), to_coord(i128::from(py + ny * d)));
    Ok(match moved {
        (Some(x), Some(y)) => Point::new(x, y),
        _ => Point::INVALID,
    })
}

/// Point at `radius + distance` from `center` in the direction of `p`.
/// Sentinel when `p` is the center.
pub fn calc_normal_vector_of_circle(
    center: Point,
    radius: i32,
    p: Point,
    distance: i32,
) -> Result<Point> {
    ensure_positive("radius", radius)?;
    let v = p.to_f() - center.to_f();
    let len = v.norm();
    if len == 0.0 {
        return Ok(Point::INVALID);
    }
    Ok(offset(center, v / len, f64::from(radius) + f64::from(distance)))
}

/// Smallest axis-aligned rectangle holding all points; `None` when empty.
/// A single point gives a zero-sized rectangle.
pub fn calc_bounding_rectangle(points: &[Point]) -> Option<Rectangle> {
    let first = *points.first()?;
    let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        l = l.min(p.x);
        t = t.min(p.y);
        r = r.max(p.x);
        b = b.max(p.y);
    }
    Some(Rectangle::from_ltrb(l, t, r, b))
}

/// Bounds of the points after rotating them by `angle_deg` about `pivot`.
pub fn calc_bounding_rectangle_rotated(
    points: &[Point],
    pivot: Point,
    angle_deg: f64,
) -> Result<Option<Rectangle>> {
    ensure_finite("angle", angle_deg)?;
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for &p in points {
        let q = rotate_point(pivot, angle_deg, p);
        if !q.is_valid() {
            return Ok(None);
        }
        bounds = Some(match bounds {
            None => (q.x, q.y, q.x, q.y),
            Some((l, t, r, b)) => (l.min(q.x), t.min(q.y), r.max(q.x), b.max(q.y)),
        });
    }
    Ok(bounds.map(|(l, t, r, b)| Rectangle::from_ltrb(l, t, r, b)))
}

/// Integer rectangle covering the rotated ellipse with full axes `width`×`height`.
pub fn calc_bounding_rectangle_of_ellipse(
    center: Point,
    width: i32,
    height: i32,
    angle_deg: f64,
) -> Result<Rectangle> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    ensure_finite("angle", angle_deg)?;
    let (rx, ry) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let (s, c) = angle_deg.to_radians().sin_cos();
    let ex = ((rx * c).powi(2) + (ry * s).powi(2)).sqrt();
    let ey = ((rx * s).powi(2) + (ry * c).powi(2)).sqrt();
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));
    let lo = |v: f64| (v + 1e-9).floor() as i32;
    let hi = |v: f64| (v - 1e-9).ceil() as i32;
    Ok(Rectangle::from_ltrb(
        lo(cx - ex),
        lo(cy - ey),
        hi(cx + ex),
        hi(cy + ey),
    ))
}

/// Average of the vertices, rounded half away from zero. Sentinel when empty.
pub fn calc_polygon_balance_point(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::INVALID;
    }
    let n = points.len() as i128;
    let (sx, sy) = points.iter().fold((0i128, 0i128), |(sx, sy), p| {
        (sx + i128::from(p.x), sy + i128::from(p.y))
    });
    match (to_coord(div_round(sx, n)), to_coord(div_round(sy, n))) {
        (Some(x), Some(y)) => Point::new(x, y),
        _ => Point::INVALID,
    }
}

/// Cubic Bézier at parameter `t` (Bernstein form).
pub fn bezier_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> PointF {
    let u = 1.0 - t;
    p0.to_f() * (u * u * u)
        + p1.to_f() * (3.0 * u * u * t)
        + p2.to_f() * (3.0 * u * t * t)
        + p3.to_f() * (t * t * t)
}

/// `p` rotated by `angle_deg` about `center` (`x' = x·cos - y·sin`,
/// `y' = x·sin + y·cos`). Multiples of 90° are exact. Sentinel if the angle
/// is not finite or the result does not fit.
pub fn rotate_point(center: Point, angle_deg: f64, p: Point) -> Point {
    if !angle_deg.is_finite() {
        return Point::INVALID;
    }
    let quarter = angle_deg / 90.0;
    if quarter == quarter.round() {
        let dx = i128::from(p.x) - i128::from(center.x);
        let dy = i128::from(p.y) - i128::from(center.y);
        let (rx, ry) = match (quarter as i64).rem_euclid(4) {
            0 => (dx, dy),
            1 => (-dy, dx),
            2 => (-dx, -dy),
            _ => (dy, -dx),
        };
        return match (
            to_coord(i128::from(center.x) + rx),
            to_coord(i128::from(center.y) + ry),
        ) {
            (Some(x), Some(y)) => Point::new(x, y),
            _ => Point::INVALID,
        };
    }
    let v = Rotation2::new(angle_deg.to_radians()) * (p.to_f() - center.to_f());
    Point::from_f_rounded(center.to_f() + v)
}

/// Direction from `center` to `p` in degrees, in `[0, 360)`; 0 when they coincide.
pub fn calc_angle(center: Point, p: Point) -> f64 {
    let v = p.to_f() - center.to_f();
    norm_angle(v.y.atan2(v.x)).to_degrees()
}

/// Tangent to the arc `start → mid → end` that passes through `p`.
///
/// On the arc (within half a unit of its circle) this is the tangent at `p`.
/// From outside the circle the touching point nearest to `start` along the
/// sweep is used. `None` for collinear control points, for `p` inside the
/// circle, and when no touching point lies on the arc.
pub fn calc_arc_tangent_through_point(
    start: Point,
    mid: Point,
    end: Point,
    p: Point,
) -> Option<WideLine> {
    let arc = CircularArc::through(start, mid, end)?;
    let v = p.to_f() - arc.center;
    let d = v.norm();
    let base = v.y.atan2(v.x);
    if (d - arc.radius).abs() <= ON_CIRCLE {
        if !arc.contains_angle(base) {
            return None;
        }
        let along = Vector2::new(-v.y, v.x) / d;
        let q = offset(p, along, arc.radius.max(1.0));
        return (q.is_valid() && q != p).then(|| calc_line_wide(p, q));
    }
    if d < arc.radius {
        return None;
    }
    let alpha = (arc.radius / d).acos();
    let angle = [base + alpha, base - alpha]
        .into_iter()
        .filter(|&a| arc.contains_angle(a))
        .min_by(|a, b| arc.offset_along(*a).total_cmp(&arc.offset_along(*b)))?;
    let touch = Point::from_f_rounded(arc.point_at(angle));
    (touch.is_valid() && touch != p).then(|| calc_line_wide(p, touch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn normal_offsets() {
        assert_eq!(calc_normal_vector_of_line(p(0, 0), p(10, 0), p(5, 0), 4), p(5, 4));
        assert_eq!(calc_normal_vector_of_line(p(10, 0), p(0, 0), p(5, 0), 4), p(5, -4));
        assert_eq!(calc_normal_vector_of_line(p(1, 1), p(1, 1), p(1, 1), 4), Point::INVALID);

        let r = Rectangle::new(0, 0, 10, 10);
        assert_eq!(calc_normal_vector_of_rectangle(&r, p(10, 5), 3).unwrap(), p(13, 5));
        assert_eq!(calc_normal_vector_of_rectangle(&r, p(3, 0), 3).unwrap(), p(3, -3));
        assert_eq!(calc_normal_vector_of_rectangle(&r, p(5, 9), 3).unwrap(), p(5, 12));
        // off the outline the nearest edge segment wins, not the nearest edge line
        assert_eq!(calc_normal_vector_of_rectangle(&r, p(5, 100), 3).unwrap(), p(5, 103));
        assert_eq!(calc_normal_vector_of_rectangle(&r, p(-50, 4), 3).unwrap(), p(-53, 4));
        assert_eq!(calc_normal_vector_of_rectangle(&r, p(20, 20), 3).unwrap(), p(23, 20));
        assert!(calc_normal_vector_of_rectangle(&Rectangle::new(0, 0, -1, 1), p(0, 0), 1).is_err());

        assert_eq!(calc_normal_vector_of_circle(p(0, 0), 5, p(3, 4), 5).unwrap(), p(6, 8));
        assert_eq!(calc_normal_vector_of_circle(p(0, 0), 5, p(0, 0), 5).unwrap(), Point::INVALID);
        assert_eq!(calc_normal_vector_of_circle(p(0, 0), 0, p(1, 0), 5).unwrap_err().arg(), "radius");
    }

    #[test]
    fn bounds_of_points() {
        assert_eq!(calc_bounding_rectangle(&[]), None);
        assert_eq!(
            calc_bounding_rectangle(&[p(3, -2), p(-1, 7), p(0, 0)]),
            Some(Rectangle::from_ltrb(-1, -2, 3, 7))
        );
        assert_eq!(
            calc_bounding_rectangle(&[p(4, 4)]),
            Some(Rectangle::new(4, 4, 0, 0))
        );
    }

    #[test]
    fn rotated_bounds() {
        let sq = [p(0, 0), p(10, 0), p(10, 10), p(0, 10)];
        assert_eq!(
            calc_bounding_rectangle_rotated(&sq, p(0, 0), 90.0).unwrap(),
            Some(Rectangle::from_ltrb(-10, 0, 0, 10))
        );
        assert_eq!(
            calc_bounding_rectangle_rotated(&sq, p(0, 0), 45.0).unwrap(),
            Some(Rectangle::from_ltrb(-7, 0, 7, 14))
        );
        assert!(calc_bounding_rectangle_rotated(&sq, p(0, 0), f64::NAN).is_err());
    }

    #[test]
    fn ellipse_bounds() {
        let c = p(0, 0);
        assert_eq!(
            calc_bounding_rectangle_of_ellipse(c, 20, 10, 0.0).unwrap(),
            Rectangle::from_ltrb(-10, -5, 10, 5)
        );
        assert_eq!(
            calc_bounding_rectangle_of_ellipse(c, 20, 10, 90.0).unwrap(),
            Rectangle::from_ltrb(-5, -10, 5, 10)
        );
        // circle-like extents at 45°: sqrt(62.5) ≈ 7.9
        assert_eq!(
            calc_bounding_rectangle_of_ellipse(c, 20, 10, 45.0).unwrap(),
            Rectangle::from_ltrb(-8, -8, 8, 8)
        );
        assert!(calc_bounding_rectangle_of_ellipse(c, 0, 10, 0.0).is_err());
    }

    #[test]
    fn balance_point_and_bezier() {
        let sq = [p(0, 0), p(10, 0), p(10, 10), p(0, 10)];
        assert_eq!(calc_polygon_balance_point(&sq), p(5, 5));
        assert_eq!(calc_polygon_balance_point(&[p(0, 0), p(1, 0), p(0, 1)]), p(0, 0));
        assert_eq!(calc_polygon_balance_point(&[]), Point::INVALID);

        let b = bezier_point(p(0, 0), p(0, 10), p(10, 10), p(10, 0), 0.5);
        assert!((b.x - 5.0).abs() < 1e-12 && (b.y - 7.5).abs() < 1e-12);
        assert_eq!(bezier_point(p(0, 0), p(0, 10), p(10, 10), p(10, 0), 1.0), p(10, 0).to_f());
    }

    #[test]
    fn rotation_and_angle() {
        let c = p(1, 1);
        assert_eq!(rotate_point(c, 90.0, p(3, 1)), p(1, 3));
        assert_eq!(rotate_point(c, -90.0, p(3, 1)), p(1, -1));
        assert_eq!(rotate_point(c, 180.0, p(3, 1)), p(-1, 1));
        assert_eq!(rotate_point(c, 720.0, p(3, 1)), p(3, 1));
        assert_eq!(rotate_point(p(0, 0), 45.0, p(10, 0)), p(7, 7));
        assert_eq!(rotate_point(c, f64::INFINITY, p(3, 1)), Point::INVALID);
        let m = 1_000_000;
        assert_eq!(rotate_point(p(-m, -m), 90.0, p(m, m)), p(-3 * m, m));
        assert_eq!(calc_angle(p(0, 0), p(0, 5)), 90.0);
        assert_eq!(calc_angle(p(0, 0), p(0, -5)), 270.0);
        assert_eq!(calc_angle(p(2, 2), p(2, 2)), 0.0);
    }

    #[test]
    fn arc_tangents() {
        let (s, m, e) = (p(10, 0), p(0, 10), p(-10, 0));
        // touches at 60°: (5, 8.66)
        assert_eq!(
            calc_arc_tangent_through_point(s, m, e, p(20, 0)),
            Some(WideLine::new(9, 15, -180))
        );
        // touching points at 30° and 150°; the first along the sweep wins
        assert_eq!(
            calc_arc_tangent_through_point(s, m, e, p(0, 20)),
            Some(WideLine::new(15, 9, -180))
        );
        assert_eq!(
            calc_arc_tangent_through_point(s, m, e, p(0, 10)),
            Some(WideLine::new(0, -10, 100))
        );
        assert_eq!(calc_arc_tangent_through_point(s, m, e, p(1, 1)), None);
        assert_eq!(calc_arc_tangent_through_point(s, m, e, p(0, -10)), None);
        assert_eq!(calc_arc_tangent_through_point(s, m, e, p(0, -20)), None);
        assert_eq!(calc_arc_tangent_through_point(p(0, 0), p(1, 1), p(2, 2), p(5, 0)), None);
    }
}
