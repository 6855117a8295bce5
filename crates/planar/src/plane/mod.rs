//! Integer plane geometry for diagram editing.
//!
//! Purpose
//! - Exact-integer line construction, intersection and vector products over
//!   coordinates in `±cfg::COORDINATE_MAX`, with a narrow (i32) and a wide
//!   (i64/i128) entry point wherever a product of two coordinates appears.
//! - Hit-testing, proximity and shape-editing helpers on top of those.
//!
//! Conventions
//! - "No result" is `Point::INVALID`, `false` or `None`. `GeometryError` is
//!   reserved for invalid shape parameters (non-positive sizes, NaN angles).
//! - Narrow functions never check their ceiling: past it the result wraps.
//!   Pick the overload with `cfg::Precision::select`.
//! - `calc_line` canonicalizes the both-negative sign pattern; the
//!   perpendicular constructors never do.
//!
//! Code cross-refs: `cfg`, `Point`, `Line`, `WideLine`, `CircularArc`.

mod arc;
mod contain;
mod derived;
mod intersect;
mod line;
mod proximity;
mod region;
mod types;
mod util;
mod vector;

pub use arc::{calc_arc_center, calc_arc_radius, CircularArc};
pub use contain::{
    arc_contains_point, circle_contains_point, convex_polygon_contains_point,
    ellipse_contains_point, polygon_contains_point, polygon_is_convex, rectangle_contains_point,
    triangle_contains_point,
};
pub use derived::{
    bezier_point, calc_angle, calc_arc_tangent_through_point, calc_bounding_rectangle,
    calc_bounding_rectangle_of_ellipse, calc_bounding_rectangle_rotated,
    calc_normal_vector_of_circle, calc_normal_vector_of_line, calc_normal_vector_of_rectangle,
    calc_polygon_balance_point, rotate_point,
};
pub use intersect::{
    intersect_line_segments, intersect_line_segments_f, intersect_line_segments_wide,
    intersect_line_with_line_segment, intersect_line_with_line_segment_wide, intersect_lines,
    intersect_lines_f, intersect_lines_wide, line_segments_intersect,
};
pub use line::{
    calc_line, calc_line_f, calc_line_wide, calc_perpendicular_bisector,
    calc_perpendicular_bisector_wide, calc_perpendicular_line, calc_perpendicular_line_wide,
};
pub use proximity::{
    calc_dropped_perpendicular_foot, calc_nearest_point_of_line_segment, distance_point_line,
    distance_point_point, distance_point_point_fast, distance_point_point_fast_wide,
    line_contains_point,
};
pub use region::{
    arc_intersects_line, arc_intersects_line_segment, intersect_arc_with_line,
    intersect_arc_with_line_segment, intersect_circle_with_line,
    intersect_circle_with_line_segment, intersect_ellipse_with_line,
    intersect_ellipse_with_line_segment, intersect_polygon_with_line,
    intersect_polygon_with_line_segment, line_intersects_circle, line_intersects_ellipse,
    line_intersects_rectangle, line_segment_intersects_circle, line_segment_intersects_ellipse,
    line_segment_intersects_rectangle, polygon_intersects_line, polygon_intersects_line_segment,
    polygon_intersects_rectangle, rectangles_intersect,
};
pub use types::{Line, Point, PointF, Rectangle, SlopeLine, WideLine, INVALID_COORDINATE};
pub use vector::{
    vector_cross_product, vector_cross_product_wide, vector_dot_product, vector_dot_product3,
    vector_dot_product3_wide, vector_dot_product4, vector_dot_product4_wide,
    vector_dot_product_wide,
};

#[cfg(test)]
mod tests;
