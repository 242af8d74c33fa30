use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// All of the ellipse math is generic over this trait, it is implemented for `f32` and `f64`.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn half_pi() -> Self {
        Self::from(std::f64::consts::FRAC_PI_2).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns `true` if the value is neither infinite nor NaN.
    #[inline]
    fn is_finite_value(self) -> bool {
        self.abs() <= <Self as num_traits::Bounded>::max_value()
    }

    /// Lossy conversion to `f64`, used for diagnostics and error values.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            #[inline]
            fn pi() -> Self {
                std::$ty::consts::PI
            }

            #[inline]
            fn half_pi() -> Self {
                std::$ty::consts::FRAC_PI_2
            }

            #[inline]
            fn tau() -> Self {
                std::$ty::consts::TAU
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn half() -> Self {
                0.5
            }

            #[inline]
            fn is_finite_value(self) -> bool {
                self.is_finite()
            }

            #[inline]
            fn to_f64_lossy(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
