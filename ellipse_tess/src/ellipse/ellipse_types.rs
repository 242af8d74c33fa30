//! Supporting public types used by the ellipse tessellation functions.

use crate::core::traits::Real;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default max angle error (in radians) used by [EllipseTessOptions::default].
pub const DEFAULT_MAX_ANGLE_ERROR: f64 = 0.1;

/// Default subdivision budget exponent used by [EllipseTessOptions].
///
/// A single quarter of the ellipse is split into at most `2^DEFAULT_MAX_DEPTH` intervals no matter
/// how small the max angle error is.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Largest accepted [EllipseTessOptions::max_depth].
pub const MAX_DEPTH_LIMIT: u32 = 20;

/// Struct to hold options parameters when tessellating an ellipse.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipseTessOptions<T> {
    /// Maximum allowed angle (in radians) between a polygon chord and the true ellipse tangent at
    /// either end of the chord. Must be finite and greater than zero.
    pub max_angle_error: T,
    /// Each quarter is split into at most `2^max_depth` intervals (the depth of a balanced
    /// bisection). Once that many exist the remaining intervals are accepted even if they do not
    /// meet `max_angle_error`, see [EllipsePoints::depth_limited]. Must not exceed
    /// [MAX_DEPTH_LIMIT].
    ///
    /// [EllipsePoints::depth_limited]: super::EllipsePoints::depth_limited
    pub max_depth: u32,
}

impl<T> EllipseTessOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new(max_angle_error: T) -> Self {
        Self {
            max_angle_error,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Builder style setter for [EllipseTessOptions::max_depth].
    #[inline]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check the options, returning the error that tessellating with them would produce.
    pub fn validate(&self) -> Result<(), EllipseError> {
        let err = self.max_angle_error;
        if !err.is_finite_value() || err <= T::zero() {
            return Err(EllipseError::InvalidTolerance {
                max_angle_error: err.to_f64_lossy(),
            });
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(EllipseError::InvalidDepth {
                max_depth: self.max_depth,
            });
        }

        Ok(())
    }
}

impl<T> Default for EllipseTessOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::from(DEFAULT_MAX_ANGLE_ERROR).unwrap())
    }
}

/// Invalid argument failures returned by the ellipse tessellation functions.
///
/// Numeric values are carried as `f64` (converted from the input number type) so the error type is
/// the same for every [Real] type.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum EllipseError {
    /// Width or height is not finite, not greater than zero, or their ratio degenerates to zero or
    /// infinity.
    #[error("invalid ellipse dimensions (width: {width}, height: {height})")]
    InvalidDimensions { width: f64, height: f64 },
    /// Max angle error is not finite or not greater than zero.
    #[error("invalid max angle error: {max_angle_error}, must be finite and greater than zero")]
    InvalidTolerance { max_angle_error: f64 },
    /// Max subdivision depth is above [MAX_DEPTH_LIMIT].
    #[error("invalid max subdivision depth: {max_depth}, must be at most {limit}", limit = MAX_DEPTH_LIMIT)]
    InvalidDepth { max_depth: u32 },
    /// Center point has a component that is infinite or NaN.
    #[error("invalid ellipse center: ({x}, {y})")]
    InvalidCenter { x: f64, y: f64 },
    /// The ellipse extents (center +/- semi axes) overflow the number type.
    #[error("ellipse extents are not finite")]
    NonFiniteExtents,
    /// Subdivision produced an angle that is infinite or NaN.
    #[error("non finite angle produced while subdividing at theta: {theta}")]
    NonFiniteAngle { theta: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = EllipseTessOptions::<f64>::default();
        assert_eq!(opts.max_angle_error, DEFAULT_MAX_ANGLE_ERROR);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(opts.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_tolerance() {
        for bad in [0.0f32, -0.1, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                EllipseTessOptions::new(bad).validate(),
                Err(EllipseError::InvalidTolerance { .. })
            ));
        }
    }

    #[test]
    fn validate_rejects_deep_subdivision() {
        let opts = EllipseTessOptions::new(0.1).with_max_depth(MAX_DEPTH_LIMIT + 1);
        assert_eq!(
            opts.validate(),
            Err(EllipseError::InvalidDepth {
                max_depth: MAX_DEPTH_LIMIT + 1
            })
        );
        assert!(opts.with_max_depth(MAX_DEPTH_LIMIT).validate().is_ok());
    }

    #[test]
    fn error_messages() {
        let err = EllipseError::InvalidDimensions {
            width: 0.0,
            height: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid ellipse dimensions (width: 0, height: 5)"
        );
        let err = EllipseError::InvalidDepth { max_depth: 99 };
        assert_eq!(
            err.to_string(),
            "invalid max subdivision depth: 99, must be at most 20"
        );
    }
}
