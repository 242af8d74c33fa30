//! Adaptive subdivision of the first quarter (`theta` in `[0, PI/2]`) of an axis aligned ellipse.
//!
//! Angles here are all measured in the first quadrant with the chord and tangent directions
//! reflected across the y axis so they fall in `[0, PI/2]`: the tangent ("prime") angle runs from
//! `PI/2` at `theta = 0` down to `0` at `theta = PI/2`.

use super::EllipseError;
use crate::core::traits::Real;

/// Tangent direction angle of the ellipse at parameter `theta`, `atan(1 / (tan(theta) * ratio))`
/// where `ratio` is `width / height`.
///
/// Only meaningful for `theta` strictly inside `(0, PI/2)`, the quarter boundary values are
/// constants (see [QUARTER_START_PRIME] and [QUARTER_END_PRIME]).
#[inline]
pub fn prime_angle<T>(theta: T, width_height_ratio: T) -> T
where
    T: Real,
{
    (T::one() / (theta.tan() * width_height_ratio)).atan()
}

/// Direction angle of the chord between parameters `start_theta` and `end_theta` in the same
/// reflected frame as [prime_angle].
#[inline]
pub fn chord_angle<T>(start_theta: T, end_theta: T, width_height_ratio: T) -> T
where
    T: Real,
{
    let y_delta = end_theta.sin() - start_theta.sin();
    let x_delta = start_theta.cos() - end_theta.cos();
    y_delta.atan2(x_delta * width_height_ratio)
}

/// Prime angle at `theta = 0` (vertical tangent).
pub const QUARTER_START_PRIME: f64 = std::f64::consts::FRAC_PI_2;
/// Prime angle at `theta = PI/2` (horizontal tangent).
pub const QUARTER_END_PRIME: f64 = 0.0;

/// Pending interval on the subdivision work stack.
#[derive(Debug, Copy, Clone)]
struct Interval<T> {
    start_theta: T,
    end_theta: T,
    start_prime: T,
    end_prime: T,
}

/// Result of subdividing the first quarter.
#[derive(Debug, Clone)]
pub struct QuarterSubdivision<T> {
    /// End angle of every accepted interval in increasing order, the last value is always `PI/2`.
    /// The quarter start (`theta = 0`) is implicit and not included.
    pub thetas: Vec<T>,
    /// Number of intervals accepted because the interval budget was used up (or they could no
    /// longer be bisected) rather than because they met the max angle error.
    pub depth_limited_count: usize,
}

/// Subdivide the first quarter of an ellipse with the given `width_height_ratio` until every chord
/// is within `max_angle_error` of the tangent at both of its ends.
///
/// At most `2^max_depth` intervals are produced. The budget bounds total work rather than the
/// depth of any one path, so a very elongated ellipse (which needs deep bisection only near one
/// end of the quarter) is still fully refined. Once the budget is used up the remaining intervals
/// are accepted as they are.
///
/// Inputs are expected to be validated by the caller (finite, positive ratio and error).
pub fn subdivide_quarter<T>(
    width_height_ratio: T,
    max_angle_error: T,
    max_depth: u32,
) -> Result<QuarterSubdivision<T>, EllipseError>
where
    T: Real,
{
    let mut thetas = Vec::new();
    let mut depth_limited_count = 0;
    let interval_budget = 1usize << max_depth;

    let mut stack = vec![Interval {
        start_theta: T::zero(),
        end_theta: T::half_pi(),
        start_prime: T::from(QUARTER_START_PRIME).unwrap(),
        end_prime: T::from(QUARTER_END_PRIME).unwrap(),
    }];

    while let Some(interval) = stack.pop() {
        let Interval {
            start_theta,
            end_theta,
            start_prime,
            end_prime,
        } = interval;

        let chord = chord_angle(start_theta, end_theta, width_height_ratio);
        if !chord.is_finite_value() {
            return Err(EllipseError::NonFiniteAngle {
                theta: end_theta.to_f64_lossy(),
            });
        }

        if (chord - start_prime).abs() < max_angle_error
            && (chord - end_prime).abs() < max_angle_error
        {
            thetas.push(end_theta);
            continue;
        }

        let middle_theta = (start_theta + end_theta) / T::two();
        // accepted plus pending intervals, including this one
        let interval_count = thetas.len() + stack.len() + 1;
        // budget used up, or the interval is too narrow to have a distinct midpoint
        if interval_count >= interval_budget
            || middle_theta <= start_theta
            || middle_theta >= end_theta
        {
            depth_limited_count += 1;
            thetas.push(end_theta);
            continue;
        }

        let middle_prime = prime_angle(middle_theta, width_height_ratio);
        if !middle_prime.is_finite_value() {
            return Err(EllipseError::NonFiniteAngle {
                theta: middle_theta.to_f64_lossy(),
            });
        }

        // second half pushed first so the first half is popped (and emitted) first
        stack.push(Interval {
            start_theta: middle_theta,
            end_theta,
            start_prime: middle_prime,
            end_prime,
        });
        stack.push(Interval {
            start_theta,
            end_theta: middle_theta,
            start_prime,
            end_prime: middle_prime,
        });
    }

    if depth_limited_count > 0 {
        log::debug!(
            "ellipse subdivision accepted {} interval(s) over budget {} (max angle error: {:?})",
            depth_limited_count,
            interval_budget,
            max_angle_error
        );
    }

    Ok(QuarterSubdivision {
        thetas,
        depth_limited_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::traits::FuzzyEq, ellipse::DEFAULT_MAX_DEPTH};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn prime_angle_of_circle_is_complement() {
        // for a circle the tangent direction is linear in theta
        for theta in [0.1, 0.5, FRAC_PI_4, 1.2, 1.5] {
            assert_fuzzy_eq!(prime_angle(theta, 1.0), FRAC_PI_2 - theta);
        }
    }

    #[test]
    fn prime_angle_is_decreasing() {
        let ratio = 3.0;
        let mut prev = QUARTER_START_PRIME;
        for i in 1..100 {
            let theta = FRAC_PI_2 * i as f64 / 100.0;
            let p = prime_angle(theta, ratio);
            assert!(p < prev, "prime angle not decreasing at theta {theta}");
            prev = p;
        }
        assert!(prev > QUARTER_END_PRIME);
    }

    #[test]
    fn chord_of_whole_quarter() {
        // chord from (a, 0) to (0, b) with a = b is at 45 degrees
        assert_fuzzy_eq!(chord_angle(0.0, FRAC_PI_2, 1.0), FRAC_PI_4);
        // wider ellipse flattens the chord
        assert_fuzzy_eq!(chord_angle(0.0, FRAC_PI_2, 2.0), 0.5f64.atan());
    }

    #[test]
    fn thetas_increase_and_end_at_quarter() {
        let result = subdivide_quarter(2.0, 0.1, 16).unwrap();
        assert_eq!(result.depth_limited_count, 0);
        assert!(!result.thetas.is_empty());
        assert!(result.thetas.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*result.thetas.last().unwrap(), FRAC_PI_2);
        assert!(result.thetas[0] > 0.0);
    }

    #[test]
    fn circle_spacing_is_uniform() {
        // tangent turn over each chord is constant for a circle so every leaf is at the same depth
        let result = subdivide_quarter(1.0, 0.1, 16).unwrap();
        // half the turn (PI/2 / n) must be below 0.1 -> n = 8 is the first power of two that works
        assert_eq!(result.thetas.len(), 8);
        let step = FRAC_PI_2 / 8.0;
        for (i, theta) in result.thetas.iter().enumerate() {
            assert_fuzzy_eq!(*theta, step * (i + 1) as f64);
        }
    }

    #[test]
    fn interval_budget_bounds_output() {
        let result = subdivide_quarter(1.0, 1e-12, 5).unwrap();
        assert_eq!(result.thetas.len(), 32);
        assert_eq!(result.depth_limited_count, 32);

        let result = subdivide_quarter(1.0, 1e-12, 0).unwrap();
        assert_eq!(result.thetas, vec![FRAC_PI_2]);
        assert_eq!(result.depth_limited_count, 1);
    }

    #[test]
    fn interval_budget_is_exact_when_used_up() {
        let result = subdivide_quarter(2.0, 1e-3, 6).unwrap();
        assert_eq!(result.thetas.len(), 64);
        assert!(result.depth_limited_count > 0);
        assert!(result.thetas.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*result.thetas.last().unwrap(), FRAC_PI_2);
    }

    #[test]
    fn elongated_ellipse_is_not_budget_limited() {
        // bisection goes deep only near theta = 0, well within the default budget
        for ratio in [1e4, 1e-4] {
            let result = subdivide_quarter(ratio, 0.1, DEFAULT_MAX_DEPTH).unwrap();
            assert_eq!(result.depth_limited_count, 0, "ratio: {ratio}");
            assert!(result.thetas.len() < 1 << DEFAULT_MAX_DEPTH);
        }
    }

    #[test]
    fn large_tolerance_single_interval() {
        let result = subdivide_quarter(1.0f32, 1.0, 16).unwrap();
        assert_eq!(result.thetas.len(), 1);
        assert_eq!(result.depth_limited_count, 0);
    }
}
