//! Magnitude ceilings for the narrow (i32) entry points.
//!
//! Policy
//! - Every multiplication-heavy primitive has a `narrow` i32 overload and a
//!   `_wide` overload. The narrow one is the hot path for ordinary diagrams and
//!   does not detect its own overflow; past its ceiling the result is
//!   unspecified (wrapping, never a panic).
//! - A ceiling is the largest `|x|`/`|y|` of any input point for which the
//!   narrow result is guaranteed to equal the wide one. Values are rounded down
//!   from the bound implied by the narrow arithmetic (noted per constant).
//! - The kernel never chooses for the caller. `Precision::select` is the
//!   documented way to turn a ceiling into a decision at the call site.

use serde::Serialize;

use crate::plane::Point;

/// Supported coordinate range of the wide overloads: `-COORDINATE_MAX..=COORDINATE_MAX`.
pub const COORDINATE_MAX: i32 = 1_000_000;

/// `vector_cross_product`: two products of differences, `8m² <= i32::MAX` (m ≈ 16,383).
pub const VECTOR_CROSS_PRODUCT_MAX: i32 = 10_000;
/// `vector_dot_product` of two vectors: `2m² <= i32::MAX` (m ≈ 32,767).
pub const VECTOR_DOT_PRODUCT_MAX: i32 = 30_000;
/// `vector_dot_product3`/`vector_dot_product4`: products of differences, `8m²`.
pub const VECTOR_DOT_PRODUCT_POINTS_MAX: i32 = 10_000;
/// `calc_line`: `c = -(a·x + b·y)` with `|a|,|b| <= 2m`, so `4m²` (m ≈ 23,170).
pub const CALC_LINE_MAX: i32 = 20_000;
/// `calc_perpendicular_line`: same shape as `calc_line`.
pub const CALC_PERPENDICULAR_LINE_MAX: i32 = 20_000;
/// `calc_perpendicular_bisector`: `c` is a difference of two `x² + y²` terms, `2m²`.
pub const CALC_PERPENDICULAR_BISECTOR_MAX: i32 = 30_000;
/// `intersect_lines` on lines built by `calc_line` from points within this bound.
/// The i32 determinant is `8m²`.
pub const INTERSECT_LINES_MAX: i32 = 10_000;
/// `intersect_line_with_line_segment`: both lines and the determinant stay narrow.
pub const INTERSECT_LINE_WITH_LINE_SEGMENT_MAX: i32 = 10_000;
/// `intersect_line_segments`: same arithmetic as `intersect_line_with_line_segment`.
pub const INTERSECT_LINE_SEGMENTS_MAX: i32 = 10_000;
/// `distance_point_point_fast`: squared distance `dx² + dy² <= 8m²`.
pub const DISTANCE_POINT_POINT_FAST_MAX: i32 = 10_000;

/// Which overload family a call site should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// i32 accumulation; valid up to the function's ceiling.
    Narrow,
    /// i64/i128 accumulation; valid over `±COORDINATE_MAX`.
    Wide,
}

impl Precision {
    /// Narrow iff every coordinate magnitude is within `ceiling`.
    #[inline]
    pub fn select(max_abs: i64, ceiling: i32) -> Self {
        if max_abs <= i64::from(ceiling) {
            Precision::Narrow
        } else {
            Precision::Wide
        }
    }

    /// Convenience: `select(max_abs_coordinate(points), ceiling)`.
    #[inline]
    pub fn for_points(points: &[Point], ceiling: i32) -> Self {
        Self::select(max_abs_coordinate(points), ceiling)
    }
}

/// Largest `|x|` or `|y|` over `points` (0 for an empty slice).
///
/// Returned as i64 so that `i32::MIN` does not overflow.
pub fn max_abs_coordinate(points: &[Point]) -> i64 {
    points
        .iter()
        .map(|p| i64::from(p.x).abs().max(i64::from(p.y).abs()))
        .max()
        .unwrap_or(0)
}

/// One row of the ceiling table (name, constant value).
pub const CEILINGS: [(&str, i32); 10] = [
    ("vector_cross_product", VECTOR_CROSS_PRODUCT_MAX),
    ("vector_dot_product", VECTOR_DOT_PRODUCT_MAX),
    ("vector_dot_product3", VECTOR_DOT_PRODUCT_POINTS_MAX),
    ("calc_line", CALC_LINE_MAX),
    ("calc_perpendicular_line", CALC_PERPENDICULAR_LINE_MAX),
    ("calc_perpendicular_bisector", CALC_PERPENDICULAR_BISECTOR_MAX),
    ("intersect_lines", INTERSECT_LINES_MAX),
    (
        "intersect_line_with_line_segment",
        INTERSECT_LINE_WITH_LINE_SEGMENT_MAX,
    ),
    ("intersect_line_segments", INTERSECT_LINE_SEGMENTS_MAX),
    ("distance_point_point_fast", DISTANCE_POINT_POINT_FAST_MAX),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_switches_exactly_at_ceiling() {
        assert_eq!(Precision::select(10_000, VECTOR_CROSS_PRODUCT_MAX), Precision::Narrow);
        assert_eq!(Precision::select(10_001, VECTOR_CROSS_PRODUCT_MAX), Precision::Wide);
    }

    #[test]
    fn max_abs_handles_sentinel_and_empty() {
        assert_eq!(max_abs_coordinate(&[]), 0);
        let pts = [Point::new(-3, 2), Point::new(1, i32::MIN)];
        assert_eq!(max_abs_coordinate(&pts), 2_147_483_648);
        assert_eq!(
            Precision::for_points(&pts, COORDINATE_MAX),
            Precision::Wide
        );
    }

    #[test]
    fn ceilings_fit_their_arithmetic() {
        let m = i64::from(VECTOR_CROSS_PRODUCT_MAX);
        assert!(8 * m * m <= i64::from(i32::MAX));
        let m = i64::from(VECTOR_DOT_PRODUCT_MAX);
        assert!(2 * m * m <= i64::from(i32::MAX));
        let m = i64::from(CALC_LINE_MAX);
        assert!(4 * m * m <= i64::from(i32::MAX));
        let m = i64::from(CALC_PERPENDICULAR_BISECTOR_MAX);
        assert!(2 * m * m <= i64::from(i32::MAX));
        let m = i64::from(INTERSECT_LINE_SEGMENTS_MAX);
        assert!(8 * m * m <= i64::from(i32::MAX));
    }
}
