use super::{
    EllipseError, EllipsePoints, EllipseTessOptions,
    subdivide::{QUARTER_END_PRIME, QUARTER_START_PRIME, prime_angle, subdivide_quarter},
};
use crate::core::{
    math::{Vector2, midpoint, vec2},
    traits::Real,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned ellipse described by its center and its full width and height.
///
/// `width` and `height` are the full extents (twice the semi axes), so an ellipse built from a
/// rectangle with [Ellipse::from_rect] is inscribed in that rectangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse<T = f64> {
    pub center: Vector2<T>,
    pub width: T,
    pub height: T,
}

impl<T> Ellipse<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, width: T, height: T) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Ellipse inscribed in `rect` (center is the rectangle center, width and height are the
    /// rectangle width and height).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ellipse_tess::core::math::*;
    /// # use ellipse_tess::ellipse::*;
    /// # use ellipse_tess::AABB;
    /// let ellipse = Ellipse::from_rect(&AABB::new(-50.0f64, -25.0, 50.0, 25.0));
    /// assert_eq!(ellipse, Ellipse::new(vec2(0.0, 0.0), 100.0, 50.0));
    /// ```
    #[inline]
    pub fn from_rect(rect: &AABB<T>) -> Self {
        let min = vec2(rect.min_x, rect.min_y);
        let max = vec2(rect.max_x, rect.max_y);
        Self::new(midpoint(min, max), max.x - min.x, max.y - min.y)
    }

    /// Semi axis lengths `(a, b)` along x and y.
    #[inline]
    pub fn semi_axes(&self) -> (T, T) {
        (self.width * T::half(), self.height * T::half())
    }

    /// Ratio of width to height (equal to the ratio of the semi axes).
    #[inline]
    pub fn aspect_ratio(&self) -> T {
        self.width / self.height
    }

    /// Bounding rectangle of the ellipse.
    pub fn bounding_rect(&self) -> AABB<T> {
        let (a, b) = self.semi_axes();
        AABB::new(
            self.center.x - a,
            self.center.y - b,
            self.center.x + a,
            self.center.y + b,
        )
    }

    /// Point on the ellipse at parameter angle `theta`, `center + (a * cos(theta), b * sin(theta))`.
    #[inline]
    pub fn point_at(&self, theta: T) -> Vector2<T> {
        let (a, b) = self.semi_axes();
        vec2(
            self.center.x + a * theta.cos(),
            self.center.y + b * theta.sin(),
        )
    }

    /// Tangent direction angle at parameter `theta` in the first quarter (`[0, PI/2]`), measured
    /// with the tangent reflected across the y axis so it runs from `PI/2` (at `theta = 0`) down to
    /// `0` (at `theta = PI/2`).
    ///
    /// The quarter boundaries return exact constants rather than evaluating `tan` at them.
    pub fn prime_angle(&self, theta: T) -> T {
        if theta <= T::zero() {
            T::from(QUARTER_START_PRIME).unwrap()
        } else if theta >= T::half_pi() {
            T::from(QUARTER_END_PRIME).unwrap()
        } else {
            prime_angle(theta, self.aspect_ratio())
        }
    }

    /// Check the ellipse is valid for tessellation.
    ///
    /// Width and height must be finite and greater than zero (with a ratio that does not degenerate
    /// to zero or infinity), the center must be finite, and the extents must not overflow.
    pub fn validate(&self) -> Result<(), EllipseError> {
        let invalid_dims = || EllipseError::InvalidDimensions {
            width: self.width.to_f64_lossy(),
            height: self.height.to_f64_lossy(),
        };

        let dim_ok = |v: T| v.is_finite_value() && v > T::zero();
        if !dim_ok(self.width) || !dim_ok(self.height) || !dim_ok(self.aspect_ratio()) {
            return Err(invalid_dims());
        }

        if !self.center.is_finite() {
            return Err(EllipseError::InvalidCenter {
                x: self.center.x.to_f64_lossy(),
                y: self.center.y.to_f64_lossy(),
            });
        }

        let rect = self.bounding_rect();
        let extents_finite = [rect.min_x, rect.min_y, rect.max_x, rect.max_y]
            .iter()
            .all(|v| v.is_finite_value());
        if !extents_finite {
            return Err(EllipseError::NonFiniteExtents);
        }

        Ok(())
    }

    /// Tessellate the ellipse into boundary points such that every polygon chord is within
    /// `max_angle_error` radians of the ellipse tangent at both of its ends.
    ///
    /// See [Ellipse::tessellate_opt] for details.
    #[inline]
    pub fn tessellate(&self, max_angle_error: T) -> Result<EllipsePoints<T>, EllipseError> {
        self.tessellate_opt(&EllipseTessOptions::new(max_angle_error))
    }

    /// Tessellate the ellipse into boundary points using the options given.
    ///
    /// Only the first quarter is adaptively subdivided, the other three quarters are reflections
    /// of it so the result is exactly symmetric about both axes. All validation and subdivision
    /// happens here, the returned iterator cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ellipse_tess::core::math::*;
    /// # use ellipse_tess::ellipse::*;
    /// let ellipse = Ellipse::new(vec2(0.0, 0.0), 100.0, 50.0);
    /// let points: Vec<_> = ellipse.tessellate(0.1).unwrap().collect();
    /// assert_eq!(points.len() % 4, 0);
    /// assert_eq!(points[0], vec2(50.0, 0.0));
    ///
    /// assert!(matches!(
    ///     Ellipse::new(vec2(0.0, 0.0), 0.0, 50.0).tessellate(0.1),
    ///     Err(EllipseError::InvalidDimensions { .. })
    /// ));
    /// ```
    pub fn tessellate_opt(
        &self,
        options: &EllipseTessOptions<T>,
    ) -> Result<EllipsePoints<T>, EllipseError> {
        options.validate()?;
        self.validate()?;

        let subdivision = subdivide_quarter(
            self.aspect_ratio(),
            options.max_angle_error,
            options.max_depth,
        )?;

        let (a, b) = self.semi_axes();
        let points = EllipsePoints::new(
            self.center,
            a,
            b,
            &subdivision.thetas,
            subdivision.depth_limited_count > 0,
        );

        log::trace!(
            "tessellated {:?} with max angle error {:?} into {} points",
            self,
            options.max_angle_error,
            points.total_count()
        );

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn from_rect_and_back() {
        let rect = AABB::new(1.0, 2.0, 11.0, 6.0);
        let ellipse = Ellipse::from_rect(&rect);
        assert_fuzzy_eq!(ellipse.center, vec2(6.0, 4.0));
        assert_fuzzy_eq!(ellipse.width, 10.0);
        assert_fuzzy_eq!(ellipse.height, 4.0);
        assert_eq!(ellipse.semi_axes(), (5.0, 2.0));
        let bounds = ellipse.bounding_rect();
        assert_eq!(
            (bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y),
            (rect.min_x, rect.min_y, rect.max_x, rect.max_y)
        );
    }

    #[test]
    fn point_at_uses_semi_axes() {
        let ellipse = Ellipse::new(vec2(1.0, 1.0), 4.0, 2.0);
        assert_fuzzy_eq!(ellipse.point_at(0.0), vec2(3.0, 1.0));
        assert_fuzzy_eq!(ellipse.point_at(FRAC_PI_2), vec2(1.0, 2.0));
        assert_fuzzy_eq!(ellipse.point_at(PI), vec2(-1.0, 1.0));
    }

    #[test]
    fn prime_angle_boundaries_are_constants() {
        let ellipse = Ellipse::new(vec2(0.0, 0.0), 3.0, 1.0);
        assert_eq!(ellipse.prime_angle(0.0), FRAC_PI_2);
        assert_eq!(ellipse.prime_angle(FRAC_PI_2), 0.0);
        let mid = ellipse.prime_angle(FRAC_PI_4);
        assert_fuzzy_eq!(mid, (1.0f64 / 3.0).atan());
    }

    #[test]
    fn validate_dimensions() {
        let c = vec2(0.0, 0.0);
        for (w, h) in [
            (0.0, 1.0),
            (1.0, 0.0),
            (-1.0, 1.0),
            (1.0, -2.0),
            (f64::NAN, 1.0),
            (1.0, f64::INFINITY),
            (f64::MAX, f64::MIN_POSITIVE),
        ] {
            assert!(
                matches!(
                    Ellipse::new(c, w, h).validate(),
                    Err(EllipseError::InvalidDimensions { .. })
                ),
                "expected invalid dimensions for ({w}, {h})"
            );
        }
        assert!(Ellipse::new(c, 1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_center_and_extents() {
        let err = Ellipse::new(vec2(f64::NAN, 0.0), 1.0, 1.0).validate();
        assert!(matches!(err, Err(EllipseError::InvalidCenter { .. })));

        let err = Ellipse::new(vec2(f64::MAX, 0.0), f64::MAX, 1.0).validate();
        assert_eq!(err, Err(EllipseError::NonFiniteExtents));
    }

    #[test]
    fn tessellate_validates_options_first() {
        let ellipse = Ellipse::new(vec2(0.0, 0.0), 0.0, 0.0);
        assert_eq!(
            ellipse.tessellate(-1.0).unwrap_err(),
            EllipseError::InvalidTolerance {
                max_angle_error: -1.0
            }
        );
    }
}
