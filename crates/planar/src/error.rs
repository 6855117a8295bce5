//! Invalid-argument errors.
//!
//! "No result" (parallel lines, point outside a region, ...) is never an error:
//! it is `false`, `None` or `Point::INVALID`. Errors are reserved for shape
//! parameters that make the question meaningless, like a zero radius.

use std::fmt;

/// Error type shared by the region and containment predicates.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A radius, width or height that must be strictly positive.
    NonPositive { arg: &'static str, value: i64 },
    /// A float argument (angle, parameter) that is NaN or infinite.
    NotFinite { arg: &'static str, value: f64 },
    /// An integer argument above its documented maximum.
    OutOfRange {
        arg: &'static str,
        value: i64,
        max: i64,
    },
}

impl GeometryError {
    pub(crate) fn non_positive(arg: &'static str, value: impl Into<i64>) -> Self {
        Self::NonPositive {
            arg,
            value: value.into(),
        }
    }

    pub(crate) fn not_finite(arg: &'static str, value: f64) -> Self {
        Self::NotFinite { arg, value }
    }

    pub(crate) fn out_of_range(arg: &'static str, value: impl Into<i64>, max: impl Into<i64>) -> Self {
        Self::OutOfRange {
            arg,
            value: value.into(),
            max: max.into(),
        }
    }

    /// Name of the offending argument.
    pub fn arg(&self) -> &'static str {
        match self {
            Self::NonPositive { arg, .. }
            | Self::NotFinite { arg, .. }
            | Self::OutOfRange { arg, .. } => arg,
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { arg, value } => {
                write!(f, "invalid argument `{arg}`: must be > 0, got {value}")
            }
            Self::NotFinite { arg, value } => {
                write!(f, "invalid argument `{arg}`: must be finite, got {value}")
            }
            Self::OutOfRange { arg, value, max } => {
                write!(f, "invalid argument `{arg}`: must be <= {max}, got {value}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// `Ok(())` iff `value > 0`.
#[inline]
pub(crate) fn ensure_positive(arg: &'static str, value: i32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(GeometryError::non_positive(arg, value))
    }
}

#[inline]
pub(crate) fn ensure_finite(arg: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::not_finite(arg, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_argument() {
        let e = ensure_positive("radius", 0).unwrap_err();
        assert_eq!(e.arg(), "radius");
        assert_eq!(e.to_string(), "invalid argument `radius`: must be > 0, got 0");
        let e = ensure_finite("angle", f64::NAN).unwrap_err();
        assert!(e.to_string().contains("`angle`"));
    }
}
