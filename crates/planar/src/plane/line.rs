//! Line construction: implicit form through two points, perpendiculars, bisectors.
//!
//! Sign conventions (fixed per function; callers compare sign patterns)
//! - `calc_line` flips `(a, b, c)` iff both `a < 0` and `b < 0`.
//! - `calc_perpendicular_line` and `calc_perpendicular_bisector` never flip.
//!
//! Narrow variants use wrapping i32 arithmetic; see `cfg::CALC_LINE_MAX` and
//! siblings for the input range where they agree with the `_wide` variants.

use std::num::Wrapping;

use super::types::{Line, Point, SlopeLine, WideLine};

#[inline]
fn wrap(p: Point) -> (Wrapping<i32>, Wrapping<i32>) {
    (Wrapping(p.x), Wrapping(p.y))
}

/// Line through `p1` and `p2`: `a = y1 - y2`, `b = x2 - x1`, `c = -(a·x1 + b·y1)`.
///
/// `p1 == p2` yields `(0, 0, 0)`. If both `a` and `b` come out negative the
/// whole triple is negated; mixed or non-negative signs are kept as computed.
///
/// Valid for coordinates within `cfg::CALC_LINE_MAX`.
pub fn calc_line(p1: Point, p2: Point) -> Line {
    let (x1, y1) = wrap(p1);
    let (x2, y2) = wrap(p2);
    let a = y1 - y2;
    let b = x2 - x1;
    let c = -(a * x1 + b * y1);
    if a.0 < 0 && b.0 < 0 {
        Line::new((-a).0, (-b).0, (-c).0)
    } else {
        Line::new(a.0, b.0, c.0)
    }
}

/// `calc_line` with a 64-bit `c`; same normalization.
pub fn calc_line_wide(p1: Point, p2: Point) -> WideLine {
    let a = p1.y.wrapping_sub(p2.y);
    let b = p2.x.wrapping_sub(p1.x);
    let c = -(i64::from(a) * i64::from(p1.x) + i64::from(b) * i64::from(p1.y));
    if a < 0 && b < 0 {
        WideLine::new(-a, -b, -c)
    } else {
        WideLine::new(a, b, c)
    }
}

/// Slope-intercept form through `p1` and `p2`; `None` for a vertical line
/// (including `p1 == p2`).
pub fn calc_line_f(p1: Point, p2: Point) -> Option<SlopeLine> {
    let dx = f64::from(p2.x) - f64::from(p1.x);
    if dx == 0.0 {
        return None;
    }
    let slope = (f64::from(p2.y) - f64::from(p1.y)) / dx;
    Some(SlopeLine {
        slope,
        intercept: f64::from(p1.y) - slope * f64::from(p1.x),
    })
}

/// Line through `p1` perpendicular to `p1`–`p2`:
/// `a = x1 - x2`, `b = y1 - y2`, `c = -(a·x1 + b·y1)`. Never normalized.
///
/// Valid for coordinates within `cfg::CALC_PERPENDICULAR_LINE_MAX`.
pub fn calc_perpendicular_line(p1: Point, p2: Point) -> Line {
    let (x1, y1) = wrap(p1);
    let (x2, y2) = wrap(p2);
    let a = x1 - x2;
    let b = y1 - y2;
    let c = -(a * x1 + b * y1);
    Line::new(a.0, b.0, c.0)
}

pub fn calc_perpendicular_line_wide(p1: Point, p2: Point) -> WideLine {
    let a = p1.x.wrapping_sub(p2.x);
    let b = p1.y.wrapping_sub(p2.y);
    let c = -(i64::from(a) * i64::from(p1.x) + i64::from(b) * i64::from(p1.y));
    WideLine::new(a, b, c)
}

/// Perpendicular bisector of `p1`–`p2`, never normalized.
///
/// The midpoint is not on the integer grid when a coordinate sum is odd, so the
/// triple is doubled to stay exact:
/// `a = 2(x1 - x2)`, `b = 2(y1 - y2)`, `c = x2² + y2² - x1² - y1²`.
///
/// Valid for coordinates within `cfg::CALC_PERPENDICULAR_BISECTOR_MAX`.
pub fn calc_perpendicular_bisector(p1: Point, p2: Point) -> Line {
    let (x1, y1) = wrap(p1);
    let (x2, y2) = wrap(p2);
    let two = Wrapping(2);
    let a = two * (x1 - x2);
    let b = two * (y1 - y2);
    let c = (x2 * x2 + y2 * y2) - (x1 * x1 + y1 * y1);
    Line::new(a.0, b.0, c.0)
}

pub fn calc_perpendicular_bisector_wide(p1: Point, p2: Point) -> WideLine {
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));
    let a = 2 * (x1 - x2);
    let b = 2 * (y1 - y2);
    let c = (x2 * x2 + y2 * y2) - (x1 * x1 + y1 * y1);
    WideLine::new(a as i32, b as i32, c)
}
