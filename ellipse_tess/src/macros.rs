/// Assert two values are fuzzy equal (works for any type with a `fuzzy_eq`/`fuzzy_eq_eps`
/// method, e.g. [Real](crate::core::traits::Real) numbers and
/// [Vector2](crate::core::math::Vector2)).
///
/// Optionally takes an epsilon as the third argument.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        let (left_val, right_val) = (&$left, &$right);
        if !left_val.fuzzy_eq(*right_val) {
            panic!(
                "assertion failed: `left.fuzzy_eq(right)`\n  left: `{:?}`\n right: `{:?}`",
                left_val, right_val
            );
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left_val, right_val, eps_val) = (&$left, &$right, &$eps);
        if !left_val.fuzzy_eq_eps(*right_val, *eps_val) {
            panic!(
                "assertion failed: `left.fuzzy_eq_eps(right, eps)`\n  left: `{:?}`\n right: `{:?}`\n   eps: `{:?}`",
                left_val, right_val, eps_val
            );
        }
    }};
}
