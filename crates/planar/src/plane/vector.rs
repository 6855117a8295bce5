//! Cross and dot products with narrow (i32, wrapping) and wide (i64) accumulators.
//!
//! Narrow results equal the wide ones up to `cfg::VECTOR_CROSS_PRODUCT_MAX`,
//! `cfg::VECTOR_DOT_PRODUCT_MAX` and `cfg::VECTOR_DOT_PRODUCT_POINTS_MAX`;
//! beyond those the narrow value is unspecified.

use std::num::Wrapping;

use super::types::Point;

#[inline]
fn diff(from: Point, to: Point) -> (Wrapping<i32>, Wrapping<i32>) {
    (Wrapping(to.x) - Wrapping(from.x), Wrapping(to.y) - Wrapping(from.y))
}

#[inline]
fn diff_wide(from: Point, to: Point) -> (i64, i64) {
    (
        i64::from(to.x) - i64::from(from.x),
        i64::from(to.y) - i64::from(from.y),
    )
}

/// `(p2 - p1) × (p3 - p1)`: zero iff the three points are collinear, positive
/// for a counterclockwise turn in y-up coordinates.
pub fn vector_cross_product(p1: Point, p2: Point, p3: Point) -> i32 {
    let (ux, uy) = diff(p1, p2);
    let (vx, vy) = diff(p1, p3);
    (ux * vy - uy * vx).0
}

pub fn vector_cross_product_wide(p1: Point, p2: Point, p3: Point) -> i64 {
    let (ux, uy) = diff_wide(p1, p2);
    let (vx, vy) = diff_wide(p1, p3);
    ux * vy - uy * vx
}

/// `v1 · v2` of two position vectors.
pub fn vector_dot_product(v1: Point, v2: Point) -> i32 {
    (Wrapping(v1.x) * Wrapping(v2.x) + Wrapping(v1.y) * Wrapping(v2.y)).0
}

pub fn vector_dot_product_wide(v1: Point, v2: Point) -> i64 {
    i64::from(v1.x) * i64::from(v2.x) + i64::from(v1.y) * i64::from(v2.y)
}

/// `(p2 - p1) · (p3 - p1)`: sign tells whether the angle at `p1` is acute.
pub fn vector_dot_product3(p1: Point, p2: Point, p3: Point) -> i32 {
    let (ux, uy) = diff(p1, p2);
    let (vx, vy) = diff(p1, p3);
    (ux * vx + uy * vy).0
}

pub fn vector_dot_product3_wide(p1: Point, p2: Point, p3: Point) -> i64 {
    let (ux, uy) = diff_wide(p1, p2);
    let (vx, vy) = diff_wide(p1, p3);
    ux * vx + uy * vy
}

/// `(p2 - p1) · (p4 - p3)`: dot product of two independent segments.
pub fn vector_dot_product4(p1: Point, p2: Point, p3: Point, p4: Point) -> i32 {
    let (ux, uy) = diff(p1, p2);
    let (vx, vy) = diff(p3, p4);
    (ux * vx + uy * vy).0
}

pub fn vector_dot_product4_wide(p1: Point, p2: Point, p3: Point, p4: Point) -> i64 {
    let (ux, uy) = diff_wide(p1, p2);
    let (vx, vy) = diff_wide(p3, p4);
    ux * vx + uy * vy
}
