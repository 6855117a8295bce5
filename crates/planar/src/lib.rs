//! Exact-integer planar geometry kernel for diagram editors.
//!
//! Every multiplication-heavy primitive comes as a narrow (i32) hot path and
//! a `_wide` (i64/i128) twin; `cfg` documents where the narrow one stops
//! being exact. "No result" is reported with `Point::INVALID`, `false` or
//! `None`; `GeometryError` only flags invalid shape parameters.
//!
//! API Policy
//! - The kernel is stateless: free functions over `Copy` value types, safe to
//!   call from any number of threads.
//! - Nothing here logs. Callers (the `planar` CLI) own observability.

pub mod cfg;
pub mod error;
pub mod plane;
pub mod stress;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Precision;
pub use error::GeometryError;
pub use plane::*;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{max_abs_coordinate, Precision, CEILINGS, COORDINATE_MAX};
    pub use crate::error::{GeometryError, Result as GeometryResult};
    pub use crate::plane::*;
    pub use crate::stress::{run_agreement, run_all, AgreementReport, Primitive, StressCfg};
    pub use nalgebra::Vector2 as Vec2;
}
