//! Narrow/wide agreement harness.
//!
//! Purpose
//! - Draw reproducible random inputs at a given coordinate scale and count
//!   the samples where a narrow (i32) primitive disagrees with its wide twin.
//! - Within a primitive's ceiling the count must be zero; above it the
//!   report shows how quickly the narrow path breaks down.
//!
//! Inputs are uniform in `[-scale, scale]²`, drawn from `StdRng::seed_from_u64`.
//! The same config always yields the same report.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::cfg::{self, COORDINATE_MAX};
use crate::error::{ensure_positive, GeometryError, Result};
use crate::plane::*;

/// Every narrow primitive that has a wide twin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    VectorCrossProduct,
    VectorDotProduct,
    /// Covers both `vector_dot_product3` and `vector_dot_product4`.
    VectorDotProductPoints,
    CalcLine,
    CalcPerpendicularLine,
    CalcPerpendicularBisector,
    IntersectLines,
    IntersectLineWithLineSegment,
    IntersectLineSegments,
    DistancePointPointFast,
}

impl Primitive {
    pub const ALL: [Primitive; 10] = [
        Primitive::VectorCrossProduct,
        Primitive::VectorDotProduct,
        Primitive::VectorDotProductPoints,
        Primitive::CalcLine,
        Primitive::CalcPerpendicularLine,
        Primitive::CalcPerpendicularBisector,
        Primitive::IntersectLines,
        Primitive::IntersectLineWithLineSegment,
        Primitive::IntersectLineSegments,
        Primitive::DistancePointPointFast,
    ];

    /// Function name, matching the `cfg::CEILINGS` table.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::VectorCrossProduct => "vector_cross_product",
            Primitive::VectorDotProduct => "vector_dot_product",
            Primitive::VectorDotProductPoints => "vector_dot_product3",
            Primitive::CalcLine => "calc_line",
            Primitive::CalcPerpendicularLine => "calc_perpendicular_line",
            Primitive::CalcPerpendicularBisector => "calc_perpendicular_bisector",
            Primitive::IntersectLines => "intersect_lines",
            Primitive::IntersectLineWithLineSegment => "intersect_line_with_line_segment",
            Primitive::IntersectLineSegments => "intersect_line_segments",
            Primitive::DistancePointPointFast => "distance_point_point_fast",
        }
    }

    pub fn ceiling(self) -> i32 {
        match self {
            Primitive::VectorCrossProduct => cfg::VECTOR_CROSS_PRODUCT_MAX,
            Primitive::VectorDotProduct => cfg::VECTOR_DOT_PRODUCT_MAX,
            Primitive::VectorDotProductPoints => cfg::VECTOR_DOT_PRODUCT_POINTS_MAX,
            Primitive::CalcLine => cfg::CALC_LINE_MAX,
            Primitive::CalcPerpendicularLine => cfg::CALC_PERPENDICULAR_LINE_MAX,
            Primitive::CalcPerpendicularBisector => cfg::CALC_PERPENDICULAR_BISECTOR_MAX,
            Primitive::IntersectLines => cfg::INTERSECT_LINES_MAX,
            Primitive::IntersectLineWithLineSegment => cfg::INTERSECT_LINE_WITH_LINE_SEGMENT_MAX,
            Primitive::IntersectLineSegments => cfg::INTERSECT_LINE_SEGMENTS_MAX,
            Primitive::DistancePointPointFast => cfg::DISTANCE_POINT_POINT_FAST_MAX,
        }
    }

    /// Narrow result equals the wide one on these four points.
    pub fn agrees(self, [a, b, c, d]: [Point; 4]) -> bool {
        match self {
            Primitive::VectorCrossProduct => {
                i64::from(vector_cross_product(a, b, c)) == vector_cross_product_wide(a, b, c)
            }
            Primitive::VectorDotProduct => {
                i64::from(vector_dot_product(a, b)) == vector_dot_product_wide(a, b)
            }
            Primitive::VectorDotProductPoints => {
                i64::from(vector_dot_product3(a, b, c)) == vector_dot_product3_wide(a, b, c)
                    && i64::from(vector_dot_product4(a, b, c, d))
                        == vector_dot_product4_wide(a, b, c, d)
            }
            Primitive::CalcLine => calc_line(a, b).widen() == calc_line_wide(a, b),
            Primitive::CalcPerpendicularLine => {
                calc_perpendicular_line(a, b).widen() == calc_perpendicular_line_wide(a, b)
            }
            Primitive::CalcPerpendicularBisector => {
                calc_perpendicular_bisector(a, b).widen() == calc_perpendicular_bisector_wide(a, b)
            }
            Primitive::IntersectLines => {
                intersect_lines(calc_line(a, b), calc_line(c, d))
                    == intersect_lines_wide(calc_line_wide(a, b), calc_line_wide(c, d))
            }
            Primitive::IntersectLineWithLineSegment => {
                intersect_line_with_line_segment(a, b, c, d)
                    == intersect_line_with_line_segment_wide(a, b, c, d)
            }
            Primitive::IntersectLineSegments => {
                intersect_line_segments(a, b, c, d) == intersect_line_segments_wide(a, b, c, d)
            }
            Primitive::DistancePointPointFast => {
                i64::from(distance_point_point_fast(a, b)) == distance_point_point_fast_wide(a, b)
            }
        }
    }
}

/// Harness parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StressCfg {
    /// Largest coordinate magnitude drawn, in `1..=COORDINATE_MAX`.
    pub scale: i32,
    pub samples: u32,
    pub seed: u64,
}

impl Default for StressCfg {
    fn default() -> Self {
        Self {
            scale: 100_000,
            samples: 10_000,
            seed: 0,
        }
    }
}

impl StressCfg {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("scale", self.scale)?;
        if self.scale > COORDINATE_MAX {
            return Err(GeometryError::out_of_range("scale", self.scale, COORDINATE_MAX));
        }
        if self.samples == 0 {
            return Err(GeometryError::non_positive("samples", self.samples));
        }
        Ok(())
    }
}

/// Outcome for one primitive at one scale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AgreementReport {
    pub primitive: Primitive,
    pub name: &'static str,
    pub scale: i32,
    pub ceiling: i32,
    pub within_ceiling: bool,
    pub samples: u32,
    pub mismatches: u32,
    /// Inputs of the first disagreeing sample, for replay.
    pub first_mismatch: Option<[Point; 4]>,
}

fn draw(rng: &mut StdRng, scale: i32) -> [Point; 4] {
    let mut p = || Point::new(rng.gen_range(-scale..=scale), rng.gen_range(-scale..=scale));
    [p(), p(), p(), p()]
}

/// Run one primitive. Each call owns its RNG, seeded from `cfg.seed`.
pub fn run_agreement(primitive: Primitive, cfg: &StressCfg) -> Result<AgreementReport> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut mismatches = 0u32;
    let mut first_mismatch = None;
    for _ in 0..cfg.samples {
        let pts = draw(&mut rng, cfg.scale);
        if !primitive.agrees(pts) {
            mismatches += 1;
            first_mismatch.get_or_insert(pts);
        }
    }
    Ok(AgreementReport {
        primitive,
        name: primitive.name(),
        scale: cfg.scale,
        ceiling: primitive.ceiling(),
        within_ceiling: cfg.scale <= primitive.ceiling(),
        samples: cfg.samples,
        mismatches,
        first_mismatch,
    })
}

/// `run_agreement` for every primitive, in `Primitive::ALL` order.
pub fn run_all(cfg: &StressCfg) -> Result<Vec<AgreementReport>> {
    Primitive::ALL
        .iter()
        .map(|&p| run_agreement(p, cfg))
        .collect()
}
