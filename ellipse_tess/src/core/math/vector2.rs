use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two dimensional point/vector, used for screen space points emitted by the tessellator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Direction angle of the vector in radians, in the range `[-PI, PI]` (`atan2(y, x)`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ellipse_tess::core::math::*;
    /// # use ellipse_tess::core::traits::*;
    /// use std::f64::consts::FRAC_PI_2;
    /// assert!(vec2(0.0, 3.0).angle().fuzzy_eq(FRAC_PI_2));
    /// assert!(vec2(-2.0, 0.0).angle().fuzzy_eq(std::f64::consts::PI));
    /// ```
    #[inline]
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Reflect across the y axis (negates x).
    #[inline]
    pub fn mirror_x(&self) -> Self {
        vec2(-self.x, self.y)
    }

    /// Reflect across the x axis (negates y).
    #[inline]
    pub fn mirror_y(&self) -> Self {
        vec2(self.x, -self.y)
    }

    /// Returns `true` if both components are finite (not infinite and not NaN).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite_value() && self.y.is_finite_value()
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        assert!((v1 + v2).fuzzy_eq(vec2(5.0, 7.0)));
        assert!((v1 - &v2).fuzzy_eq(vec2(3.0, 3.0)));
        assert!((&v1 - v2).fuzzy_eq(vec2(3.0, 3.0)));
        assert!((-v1).fuzzy_eq(vec2(-4.0, -5.0)));
    }

    #[test]
    fn mirrors_are_exact() {
        let v = vec2(0.1f64, -7.25);
        assert_eq!(v.mirror_x(), vec2(-0.1, -7.25));
        assert_eq!(v.mirror_y(), vec2(0.1, 7.25));
        assert_eq!(v.mirror_x().mirror_y(), -v);
    }

    #[test]
    fn length_and_finite() {
        let v = vec2(3.0f32, 4.0);
        assert!(v.length().fuzzy_eq(5.0));
        assert!(v.length_squared().fuzzy_eq(25.0));
        assert!(v.is_finite());
        assert!(!vec2(f64::NAN, 0.0).is_finite());
        assert!(!vec2(0.0, f64::INFINITY).is_finite());
    }
}
