//! Lines and segments against areas: rectangles, disks, ellipses, arcs and polygons.
//!
//! Areas are filled: a segment lying wholly inside a disk "intersects" it.
//! The `intersect_*` functions that return a point instead report where the
//! segment crosses the outline, nearest to the segment start.
//!
//! Rectangles, disks and polygons are decided exactly; ellipses and arcs use
//! a float unit-circle frame with a small slack.

use nalgebra::{Rotation2, Vector2};

use super::arc::CircularArc;
use super::contain::{ensure_rectangle, polygon_contains_point, rectangle_contains_point};
use super::intersect::{
    intersect_line_segments_wide, intersect_line_with_line_segment_wide, line_segments_intersect,
};
use super::types::{Point, PointF, Rectangle};
use super::util::{cross3, dist2, dot3, on_segment};
use crate::error::{ensure_finite, ensure_positive, Result};

/// Slack on squared unit radii and segment parameters.
const EPS: f64 = 1e-9;

/// Affine frame in which an ellipse (or circle) is the unit circle.
/// Segment parameters are preserved by the mapping.
struct UnitFrame {
    center: PointF,
    rotation: Rotation2<f64>,
    rx: f64,
    ry: f64,
}

impl UnitFrame {
    fn circle(center: Point, radius: i32) -> Result<Self> {
        ensure_positive("radius", radius)?;
        let r = f64::from(radius);
        Ok(Self {
            center: center.to_f(),
            rotation: Rotation2::identity(),
            rx: r,
            ry: r,
        })
    }

    fn ellipse(center: Point, width: i32, height: i32, angle_deg: f64) -> Result<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_finite("angle", angle_deg)?;
        Ok(Self {
            center: center.to_f(),
            rotation: Rotation2::new(-angle_deg.to_radians()),
            rx: f64::from(width) / 2.0,
            ry: f64::from(height) / 2.0,
        })
    }

    fn to_local(&self, p: PointF) -> PointF {
        let v = self.rotation * (p - self.center);
        Vector2::new(v.x / self.rx, v.y / self.ry)
    }

    /// Origin and direction of `p1 + t·(p2 - p1)` in the local frame.
    fn ray(&self, p1: Point, p2: Point) -> (PointF, PointF) {
        let a = self.to_local(p1.to_f());
        (a, self.to_local(p2.to_f()) - a)
    }
}

/// Smallest `|a + t·d|²` over all `t`, or over `t ∈ [0, 1]` when `clamp`.
fn min_norm2(a: PointF, d: PointF, clamp: bool) -> f64 {
    let dd = d.norm_squared();
    if dd == 0.0 {
        return a.norm_squared();
    }
    let mut t = -a.dot(&d) / dd;
    if clamp {
        t = t.clamp(0.0, 1.0);
    }
    (a + d * t).norm_squared()
}

/// Roots `t1 <= t2` of `|a + t·d|² = 1`.
fn unit_circle_params(a: PointF, d: PointF) -> Option<(f64, f64)> {
    let qa = d.norm_squared();
    if qa == 0.0 {
        return None;
    }
    let qb = a.dot(&d);
    let qc = a.norm_squared() - 1.0;
    let disc = qb * qb - qa * qc;
    if disc < -EPS * qa {
        return None;
    }
    let s = disc.max(0.0).sqrt();
    Some(((-qb - s) / qa, (-qb + s) / qa))
}

#[inline]
fn on_unit_interval(t: f64) -> bool {
    (-EPS..=1.0 + EPS).contains(&t)
}

/// Infinite line through `l1`,`l2` touches the closed segment `a`–`b`,
/// collinear overlap included. A degenerate line is the point `l1`.
fn line_touches_segment(l1: Point, l2: Point, a: Point, b: Point) -> bool {
    if l1 == l2 {
        return on_segment(a, b, l1);
    }
    let (sa, sb) = (cross3(l1, l2, a).signum(), cross3(l1, l2, b).signum());
    sa * sb <= 0
}

#[inline]
fn along(p1: Point, p2: Point, t: f64) -> PointF {
    p1.to_f() + (p2.to_f() - p1.to_f()) * t
}

/// Infinite line through `l1`,`l2` touches the rectangle. A degenerate line
/// is the point `l1`.
pub fn line_intersects_rectangle(l1: Point, l2: Point, rect: &Rectangle) -> Result<bool> {
    ensure_rectangle(rect)?;
    if l1 == l2 {
        return rectangle_contains_point(rect, l1);
    }
    let sides = rect.corners().map(|c| cross3(l1, l2, c).signum());
    Ok(sides.iter().any(|&s| s >= 0) && sides.iter().any(|&s| s <= 0))
}

pub fn line_segment_intersects_rectangle(s1: Point, s2: Point, rect: &Rectangle) -> Result<bool> {
    if rectangle_contains_point(rect, s1)? || rectangle_contains_point(rect, s2)? {
        return Ok(true);
    }
    let c = rect.corners();
    Ok((0..4).any(|i| line_segments_intersect(s1, s2, c[i], c[(i + 1) % 4])))
}

/// Closed rectangles overlap (shared edges count).
pub fn rectangles_intersect(r1: &Rectangle, r2: &Rectangle) -> Result<bool> {
    ensure_rectangle(r1)?;
    ensure_rectangle(r2)?;
    Ok(r1.left() <= r2.right()
        && r2.left() <= r1.right()
        && r1.top() <= r2.bottom()
        && r2.top() <= r1.bottom())
}

/// Infinite line through `l1`,`l2` touches the closed disk. Exact.
pub fn line_intersects_circle(l1: Point, l2: Point, center: Point, radius: i32) -> Result<bool> {
    ensure_positive("radius", radius)?;
    let r2 = i128::from(radius) * i128::from(radius);
    if l1 == l2 {
        return Ok(i128::from(dist2(l1, center)) <= r2);
    }
    let cr = i128::from(cross3(l1, l2, center));
    Ok(cr * cr <= r2 * i128::from(dist2(l1, l2)))
}

/// Closed segment touches the closed disk. Exact.
pub fn line_segment_intersects_circle(
    s1: Point,
    s2: Point,
    center: Point,
    radius: i32,
) -> Result<bool> {
    ensure_positive("radius", radius)?;
    let r2 = i128::from(radius) * i128::from(radius);
    if s1 == s2 || dot3(s1, s2, center) <= 0 {
        return Ok(i128::from(dist2(s1, center)) <= r2);
    }
    if dot3(s2, s1, center) <= 0 {
        return Ok(i128::from(dist2(s2, center)) <= r2);
    }
    let cr = i128::from(cross3(s1, s2, center));
    Ok(cr * cr <= r2 * i128::from(dist2(s1, s2)))
}

/// Both crossings of the infinite line with the circle, ordered along
/// `l1 → l2`. A tangent line yields the touching point twice.
pub fn intersect_circle_with_line(
    l1: Point,
    l2: Point,
    center: Point,
    radius: i32,
) -> Result<Option<(PointF, PointF)>> {
    let frame = UnitFrame::circle(center, radius)?;
    let (a, d) = frame.ray(l1, l2);
    Ok(unit_circle_params(a, d).map(|(t1, t2)| (along(l1, l2, t1), along(l1, l2, t2))))
}

/// Crossing of the segment with the circle nearest to `s1`, rounded to the
/// grid. Sentinel if the segment stays strictly inside or outside.
pub fn intersect_circle_with_line_segment(
    s1: Point,
    s2: Point,
    center: Point,
    radius: i32,
) -> Result<Point> {
    let frame = UnitFrame::circle(center, radius)?;
    let (a, d) = frame.ray(s1, s2);
    let hit = unit_circle_params(a, d).and_then(|(t1, t2)| {
        [t1, t2].into_iter().find(|&t| on_unit_interval(t))
    });
    Ok(hit.map_or(Point::INVALID, |t| Point::from_f_rounded(along(s1, s2, t))))
}

/// Infinite line touches the filled ellipse (`width`×`height` full axes,
/// rotated by `angle_deg` about `center`).
pub fn line_intersects_ellipse(
    l1: Point,
    l2: Point,
    center: Point,
    width: i32,
    height: i32,
    angle_deg: f64,
) -> Result<bool> {
    let frame = UnitFrame::ellipse(center, width, height, angle_deg)?;
    let (a, d) = frame.ray(l1, l2);
    Ok(min_norm2(a, d, false) <= 1.0 + EPS)
}

pub fn line_segment_intersects_ellipse(
    s1: Point,
    s2: Point,
    center: Point,
    width: i32,
    height: i32,
    angle_deg: f64,
) -> Result<bool> {
    let frame = UnitFrame::ellipse(center, width, height, angle_deg)?;
    let (a, d) = frame.ray(s1, s2);
    Ok(min_norm2(a, d, true) <= 1.0 + EPS)
}

/// Both crossings of the infinite line with the ellipse outline, ordered
/// along `l1 → l2`.
pub fn intersect_ellipse_with_line(
    l1: Point,
    l2: Point,
    center: Point,
    width: i32,
    height: i32,
    angle_deg: f64,
) -> Result<Option<(PointF, PointF)>> {
    let frame = UnitFrame::ellipse(center, width, height, angle_deg)?;
    let (a, d) = frame.ray(l1, l2);
    Ok(unit_circle_params(a, d).map(|(t1, t2)| (along(l1, l2, t1), along(l1, l2, t2))))
}

/// Crossing of the segment with the ellipse outline nearest to `s1`, rounded
/// to the grid. Sentinel if the segment stays strictly inside or outside.
pub fn intersect_ellipse_with_line_segment(
    s1: Point,
    s2: Point,
    center: Point,
    width: i32,
    height: i32,
    angle_deg: f64,
) -> Result<Point> {
    let frame = UnitFrame::ellipse(center, width, height, angle_deg)?;
    let (a, d) = frame.ray(s1, s2);
    let hit = unit_circle_params(a, d).and_then(|(t1, t2)| {
        [t1, t2].into_iter().find(|&t| on_unit_interval(t))
    });
    Ok(hit.map_or(Point::INVALID, |t| Point::from_f_rounded(along(s1, s2, t))))
}

/// Parameter along `p1 → p2` of the first crossing with the arc stroke,
/// restricted to `t ∈ [0, 1]` when `clamp`.
fn arc_hit(arc: &CircularArc, p1: Point, p2: Point, clamp: bool) -> Option<f64> {
    let a = (p1.to_f() - arc.center) / arc.radius;
    let d = (p2.to_f() - p1.to_f()) / arc.radius;
    let (t1, t2) = unit_circle_params(a, d)?;
    [t1, t2].into_iter().find(|&t| {
        (!clamp || on_unit_interval(t)) && arc.contains_angle(arc.angle_of(along(p1, p2, t)))
    })
}

/// Segment crosses the arc from `start` through `mid` to `end`. Collinear
/// control points describe the segment `start`–`end`.
pub fn arc_intersects_line_segment(start: Point, mid: Point, end: Point, s1: Point, s2: Point) -> bool {
    match CircularArc::through(start, mid, end) {
        Some(arc) => arc_hit(&arc, s1, s2, true).is_some(),
        None => line_segments_intersect(start, end, s1, s2),
    }
}

/// Crossing of the segment with the arc nearest to `s1`; sentinel if none.
pub fn intersect_arc_with_line_segment(
    start: Point,
    mid: Point,
    end: Point,
    s1: Point,
    s2: Point,
) -> Point {
    match CircularArc::through(start, mid, end) {
        Some(arc) => arc_hit(&arc, s1, s2, true)
            .map_or(Point::INVALID, |t| Point::from_f_rounded(along(s1, s2, t))),
        None => intersect_line_segments_wide(start, end, s1, s2),
    }
}

/// Infinite line through `l1`,`l2` crosses the arc.
pub fn arc_intersects_line(start: Point, mid: Point, end: Point, l1: Point, l2: Point) -> bool {
    match CircularArc::through(start, mid, end) {
        Some(arc) => arc_hit(&arc, l1, l2, false).is_some(),
        None => line_touches_segment(l1, l2, start, end),
    }
}

/// First crossing of the infinite line with the arc along `l1 → l2`;
/// sentinel if the line meets the circle only outside the sweep.
pub fn intersect_arc_with_line(start: Point, mid: Point, end: Point, l1: Point, l2: Point) -> Point {
    match CircularArc::through(start, mid, end) {
        Some(arc) => arc_hit(&arc, l1, l2, false)
            .map_or(Point::INVALID, |t| Point::from_f_rounded(along(l1, l2, t))),
        None => intersect_line_with_line_segment_wide(l1, l2, start, end),
    }
}

fn outline(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Segment touches the filled polygon (non-zero winding).
pub fn polygon_intersects_line_segment(points: &[Point], s1: Point, s2: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    polygon_contains_point(points, s1)
        || outline(points).any(|(a, b)| line_segments_intersect(a, b, s1, s2))
}

/// Crossing of the segment with the polygon outline nearest to `s1`.
/// Edges collinear with the segment contribute no point.
pub fn intersect_polygon_with_line_segment(points: &[Point], s1: Point, s2: Point) -> Point {
    if points.len() < 3 {
        return Point::INVALID;
    }
    outline(points)
        .map(|(a, b)| intersect_line_segments_wide(s1, s2, a, b))
        .filter(|p| p.is_valid())
        .min_by_key(|&p| dist2(s1, p))
        .unwrap_or(Point::INVALID)
}

/// Infinite line touches the filled polygon. A bounded area is met only
/// through its outline, so this checks the edges.
pub fn polygon_intersects_line(points: &[Point], l1: Point, l2: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    if l1 == l2 {
        return polygon_contains_point(points, l1);
    }
    outline(points).any(|(a, b)| line_touches_segment(l1, l2, a, b))
}

/// First crossing of the infinite line with the polygon outline along
/// `l1 → l2`. Edges collinear with the line contribute no point.
pub fn intersect_polygon_with_line(points: &[Point], l1: Point, l2: Point) -> Point {
    if points.len() < 3 || l1 == l2 {
        return Point::INVALID;
    }
    outline(points)
        .map(|(a, b)| intersect_line_with_line_segment_wide(l1, l2, a, b))
        .filter(|p| p.is_valid())
        .min_by_key(|&p| dot3(l1, l2, p))
        .unwrap_or(Point::INVALID)
}

/// Filled polygon and closed rectangle share a point.
pub fn polygon_intersects_rectangle(points: &[Point], rect: &Rectangle) -> Result<bool> {
    ensure_rectangle(rect)?;
    if points.len() < 3 {
        return Ok(false);
    }
    if rectangle_contains_point(rect, points[0])? {
        return Ok(true);
    }
    let corners = rect.corners();
    if polygon_contains_point(points, corners[0]) {
        return Ok(true);
    }
    Ok(outline(points).any(|(a, b)| {
        (0..4).any(|i| line_segments_intersect(a, b, corners[i], corners[(i + 1) % 4]))
    }))
}
