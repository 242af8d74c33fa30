/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Points produced by the tessellator come out of trigonometric functions, so exact comparisons
/// are almost never meaningful. Comparisons are done against an epsilon instead.
///
/// # Examples
///
/// ```
/// # use ellipse_tess::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// assert_ne!(a, b);
/// assert!(a.fuzzy_eq(b));
/// assert!(!1.0f64.fuzzy_eq_eps(1.1, 0.05));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` is this value is approximately equal to `other` using `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately equal to zero using `fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

/// Fuzzy ordering on top of [FuzzyEq].
///
/// # Examples
///
/// ```
/// # use ellipse_tess::core::traits::*;
/// assert!(0.1f64.fuzzy_lt_eps(0.1 - 1e-9, 1e-8));
/// assert!(!0.1f64.fuzzy_lt_eps(0.05, 1e-8));
/// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
/// ```
pub trait FuzzyOrd: FuzzyEq {
    /// Fuzzy greater than, `self + fuzzy_epsilon > other`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// Fuzzy less than, `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` is in the range `[min, max]` expanded by `fuzzy_epsilon` on both sides.
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }

        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                *self + fuzzy_epsilon > other
            }

            #[inline]
            fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

// f32 carries ~7 significant digits so it gets a looser default
impl_fuzzy!(f32, 1.0e-5);
impl_fuzzy!(f64, 1.0e-8);
