//! Tessellation of axis aligned ellipses into polygons with a bounded angular error.
//!
//! The polygon is built by adaptively bisecting the ellipse parameter angle in the first quarter
//! until the direction of every chord is within a max angle error of the ellipse tangent at both
//! chord ends. The remaining quarters are mirror images of the first so the output is exactly
//! symmetric.
//!
//! Two entry points are provided: [ellipse_points_in_rect] for an ellipse inscribed in a rectangle
//! and [ellipse_points] for an ellipse given by its width, height, and center. Both return an
//! [EllipsePoints] iterator; the polygon is closed implicitly (connect the last point back to the
//! first when drawing).
mod axis_ellipse;
mod ellipse_points;
mod ellipse_types;
mod subdivide;

pub use axis_ellipse::*;
pub use ellipse_points::*;
pub use ellipse_types::*;
pub use subdivide::{chord_angle, prime_angle};

use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

/// Tessellate the ellipse inscribed in `rect` using `max_angle_error` (radians).
///
/// # Examples
///
/// ```
/// # use ellipse_tess::ellipse::*;
/// # use ellipse_tess::AABB;
/// let rect = AABB::new(-50.0f64, -25.0, 50.0, 25.0);
/// let points: Vec<_> = ellipse_points_in_rect(&rect, 0.1).unwrap().collect();
/// assert!(!points.is_empty());
/// for p in &points {
///     let d = (p.x / 50.0).powi(2) + (p.y / 25.0).powi(2);
///     assert!((d - 1.0).abs() < 1e-9);
/// }
/// ```
#[inline]
pub fn ellipse_points_in_rect<T>(
    rect: &AABB<T>,
    max_angle_error: T,
) -> Result<EllipsePoints<T>, EllipseError>
where
    T: Real,
{
    Ellipse::from_rect(rect).tessellate(max_angle_error)
}

/// Same as [ellipse_points_in_rect] with options.
#[inline]
pub fn ellipse_points_in_rect_opt<T>(
    rect: &AABB<T>,
    options: &EllipseTessOptions<T>,
) -> Result<EllipsePoints<T>, EllipseError>
where
    T: Real,
{
    Ellipse::from_rect(rect).tessellate_opt(options)
}

/// Tessellate the ellipse with full extents `width` and `height` centered at `center` using
/// `max_angle_error` (radians).
///
/// # Examples
///
/// ```
/// # use ellipse_tess::core::math::*;
/// # use ellipse_tess::ellipse::*;
/// let points = ellipse_points(0.05, 10.0, 10.0, vec2(2.0, 3.0)).unwrap();
/// assert!(points.len() >= 16);
///
/// let err = ellipse_points(0.05, 10.0, 0.0, vec2(2.0, 3.0)).unwrap_err();
/// assert_eq!(err, EllipseError::InvalidDimensions { width: 10.0, height: 0.0 });
/// ```
#[inline]
pub fn ellipse_points<T>(
    max_angle_error: T,
    width: T,
    height: T,
    center: Vector2<T>,
) -> Result<EllipsePoints<T>, EllipseError>
where
    T: Real,
{
    Ellipse::new(center, width, height).tessellate(max_angle_error)
}

/// Same as [ellipse_points] with options.
#[inline]
pub fn ellipse_points_opt<T>(
    width: T,
    height: T,
    center: Vector2<T>,
    options: &EllipseTessOptions<T>,
) -> Result<EllipsePoints<T>, EllipseError>
where
    T: Real,
{
    Ellipse::new(center, width, height).tessellate_opt(options)
}
