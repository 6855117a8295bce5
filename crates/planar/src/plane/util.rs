//! Exact integer helpers shared by the wide paths.

use super::types::{Point, PointF, Rectangle};

/// `num / den` rounded half away from zero. `den != 0`.
#[inline]
pub(crate) fn div_round(num: i128, den: i128) -> i128 {
    debug_assert!(den != 0);
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    if num >= 0 {
        (num + den / 2) / den
    } else {
        -((-num + den / 2) / den)
    }
}

/// Exact `lo <= num/den <= hi` without dividing. `den != 0`.
#[inline]
pub(crate) fn ratio_within(num: i128, den: i128, lo: i32, hi: i32) -> bool {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    i128::from(lo) * den <= num && num <= i128::from(hi) * den
}

/// `Some` iff `v` is a usable coordinate (fits i32 and is not the sentinel).
#[inline]
pub(crate) fn to_coord(v: i128) -> Option<i32> {
    i32::try_from(v).ok().filter(|&c| c != i32::MIN)
}

/// `(b - a) × (c - a)` in i64; exact for any pair of i32 points.
#[inline]
pub(crate) fn cross3(a: Point, b: Point, c: Point) -> i64 {
    let (abx, aby) = (i64::from(b.x) - i64::from(a.x), i64::from(b.y) - i64::from(a.y));
    let (acx, acy) = (i64::from(c.x) - i64::from(a.x), i64::from(c.y) - i64::from(a.y));
    abx * acy - aby * acx
}

/// `(b - a) · (c - a)` in i64.
#[inline]
pub(crate) fn dot3(a: Point, b: Point, c: Point) -> i64 {
    let (abx, aby) = (i64::from(b.x) - i64::from(a.x), i64::from(b.y) - i64::from(a.y));
    let (acx, acy) = (i64::from(c.x) - i64::from(a.x), i64::from(c.y) - i64::from(a.y));
    abx * acx + aby * acy
}

/// Squared distance in i64.
#[inline]
pub(crate) fn dist2(a: Point, b: Point) -> i64 {
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    dx * dx + dy * dy
}

/// `p` lies in the closed bounding box of `a`–`b`.
#[inline]
pub(crate) fn in_box(a: Point, b: Point, p: Point) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// `p` lies on the closed segment `a`–`b`.
#[inline]
pub(crate) fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross3(a, b, p) == 0 && in_box(a, b, p)
}

/// Float rectangle test with the same inclusive edges as `Rectangle`.
#[inline]
pub(crate) fn rect_contains_f(r: &Rectangle, p: PointF) -> bool {
    f64::from(r.left()) <= p.x
        && p.x <= f64::from(r.right())
        && f64::from(r.top()) <= p.y
        && p.y <= f64::from(r.bottom())
}

/// Normalize an angle in radians to `[0, 2π)`.
#[inline]
pub(crate) fn norm_angle(a: f64) -> f64 {
    let r = a.rem_euclid(std::f64::consts::TAU);
    if r >= std::f64::consts::TAU {
        0.0
    } else {
        r
    }
}
