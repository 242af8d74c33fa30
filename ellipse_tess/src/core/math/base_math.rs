use super::Vector2;
use crate::core::traits::Real;

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use ellipse_tess::core::math::*;
/// # use ellipse_tess::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// // anything between 0 and 2PI inclusive is left unchanged
/// assert!(normalize_radians(0.0).fuzzy_eq(0.0));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(2.0 * PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the smaller signed difference going from `angle1` to `angle2`, in `(-PI, PI]`.
///
/// # Examples
///
/// ```
/// # use ellipse_tess::core::math::*;
/// # use ellipse_tess::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(delta_angle(0.5 * PI, 0.25 * PI).fuzzy_eq(-0.25 * PI));
/// assert!(delta_angle(0.25 * PI, 0.5 * PI).fuzzy_eq(0.25 * PI));
/// // wraps around 2PI
/// assert!(delta_angle(1.9 * PI, 0.1 * PI).fuzzy_eq(0.2 * PI));
/// ```
#[inline]
pub fn delta_angle<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let mut diff = normalize_radians(angle2 - angle1);
    if diff > T::pi() {
        diff = diff - T::tau();
    }

    diff
}

/// Absolute angle between two undirected lines with direction angles `angle1` and `angle2`.
///
/// Directions that differ by `PI` describe the same line so the result is in `[0, PI/2]`. This is
/// the measure used when comparing a chord against a tangent line.
///
/// # Examples
///
/// ```
/// # use ellipse_tess::core::math::*;
/// # use ellipse_tess::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(line_angle_between(0.1, 0.1 + PI).fuzzy_eq(0.0));
/// assert!(line_angle_between(0.0, 0.75 * PI).fuzzy_eq(0.25 * PI));
/// ```
#[inline]
pub fn line_angle_between<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let diff = delta_angle(angle1, angle2).abs();
    if diff > T::half_pi() {
        T::pi() - diff
    } else {
        diff
    }
}

/// Returns the direction angle (in radians) of the vector going from `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).angle()
}

/// Returns the midpoint of a line segment defined by `p0` and `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the squared distance between `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        math::vec2,
        traits::{FuzzyEq, FuzzyOrd},
    };
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn delta_angle_crosses_zero() {
        assert!(delta_angle(-0.1, 0.1).fuzzy_eq(0.2));
        assert!(delta_angle(0.1, -0.1).fuzzy_eq(-0.2));
        assert!(delta_angle(PI, PI).fuzzy_eq(0.0));
    }

    #[test]
    fn line_angle_between_is_symmetric() {
        for (a, b) in [(0.0, 0.3), (1.0, -2.0), (FRAC_PI_2, -FRAC_PI_2), (3.0, 0.2)] {
            let ab = line_angle_between(a, b);
            let ba = line_angle_between(b, a);
            assert!(ab.fuzzy_eq(ba));
            assert!(ab.fuzzy_in_range(0.0, FRAC_PI_2));
        }
    }

    #[test]
    fn segment_helpers() {
        let p0 = vec2(-1.0, 2.0);
        let p1 = vec2(3.0, 2.0);
        assert!(midpoint(p0, p1).fuzzy_eq(vec2(1.0, 2.0)));
        assert!(dist_squared(p0, p1).fuzzy_eq(16.0));
        assert!(angle(p0, p1).fuzzy_eq(0.0));
        assert!(angle(p1, p0).fuzzy_eq(PI));
    }
}
