//! Circular arcs through three points (start, a point on the arc, end).
//!
//! Angles are `atan2(dy, dx)` in radians in the coordinate system of the
//! points; the arc runs from `start` through `mid` to `end`, so its signed
//! sweep is positive when the angle increases along the way.

use nalgebra::{Matrix2, Vector2};

use super::types::{Point, PointF};
use super::util::{cross3, norm_angle};

/// Slack for angle comparisons (radians).
const ANGLE_EPS: f64 = 1e-12;

/// Arc on the circle through three non-collinear points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularArc {
    pub center: PointF,
    pub radius: f64,
    /// Angle of the start point.
    pub start_angle: f64,
    /// Signed sweep from start to end, in `(-2π, 2π)`.
    pub sweep_angle: f64,
}

impl CircularArc {
    /// `None` if the points are collinear (including coincident points).
    pub fn through(start: Point, mid: Point, end: Point) -> Option<Self> {
        let center = calc_arc_center(start, mid, end)?;
        let radius = (start.to_f() - center).norm();
        let angle = |p: Point| {
            let v = p.to_f() - center;
            v.y.atan2(v.x)
        };
        let s = angle(start);
        let m = norm_angle(angle(mid) - s);
        let e = norm_angle(angle(end) - s);
        let sweep_angle = if m <= e {
            e
        } else {
            -(std::f64::consts::TAU - e)
        };
        Some(Self {
            center,
            radius,
            start_angle: s,
            sweep_angle,
        })
    }

    /// Angle of `p` as seen from the center.
    #[inline]
    pub fn angle_of(&self, p: PointF) -> f64 {
        let v = p - self.center;
        v.y.atan2(v.x)
    }

    /// Point on the circle at `angle`.
    #[inline]
    pub fn point_at(&self, angle: f64) -> PointF {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Offset of `angle` from the start, measured along the sweep direction.
    /// Values within `[0, |sweep|]` lie on the arc.
    pub fn offset_along(&self, angle: f64) -> f64 {
        let t = norm_angle(angle - self.start_angle);
        if self.sweep_angle >= 0.0 || t == 0.0 {
            t
        } else {
            std::f64::consts::TAU - t
        }
    }

    /// Does the ray from the center at `angle` hit the arc?
    pub fn contains_angle(&self, angle: f64) -> bool {
        let off = self.offset_along(angle);
        off <= self.sweep_angle.abs() + ANGLE_EPS || off >= std::f64::consts::TAU - ANGLE_EPS
    }
}

/// Center of the circle through three points; `None` if collinear.
pub fn calc_arc_center(start: Point, mid: Point, end: Point) -> Option<PointF> {
    if cross3(start, mid, end) == 0 {
        return None;
    }
    // Solve relative to `start` to keep magnitudes small.
    let b = mid.to_f() - start.to_f();
    let c = end.to_f() - start.to_f();
    let m = Matrix2::new(b.x, b.y, c.x, c.y);
    let rhs = Vector2::new(b.norm_squared() / 2.0, c.norm_squared() / 2.0);
    let u = m.try_inverse()? * rhs;
    Some(start.to_f() + u)
}

/// Radius of the circle through three points; `None` if collinear.
pub fn calc_arc_radius(start: Point, mid: Point, end: Point) -> Option<f64> {
    CircularArc::through(start, mid, end).map(|a| a.radius)
}
