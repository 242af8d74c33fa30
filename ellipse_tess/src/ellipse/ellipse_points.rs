use crate::core::{
    math::{Vector2, vec2},
    traits::Real,
};
use std::iter::FusedIterator;

/// Iterator over the tessellated boundary points of an ellipse, see
/// [Ellipse::tessellate](super::Ellipse::tessellate).
///
/// Points are generated lazily from the first quarter offsets by reflection:
///
/// * quarter 1: parameter angles `[0, PI/2)` in increasing order
/// * quarter 2: `PI - theta` of the closed first quarter taken in reverse, `[PI/2, PI)`
/// * quarters 3 and 4: quarters 1 and 2 rotated by `PI`
///
/// Angles shared between quarters are emitted once and the polygon is closed implicitly (the last
/// point connects back to the first). The point count is always a multiple of 4.
#[derive(Debug, Clone)]
pub struct EllipsePoints<T = f64> {
    center: Vector2<T>,
    // offsets from center for the closed first quarter, index 0 is theta = 0 and the last index
    // is theta = PI/2
    quarter: Vec<Vector2<T>>,
    thetas: Vec<T>,
    front: usize,
    back: usize,
    depth_limited: bool,
}

impl<T> EllipsePoints<T>
where
    T: Real,
{
    /// Build from the subdivision output `quarter_thetas` (increasing, ending at `PI/2`, not
    /// including the quarter start).
    pub(crate) fn new(
        center: Vector2<T>,
        semi_major: T,
        semi_minor: T,
        quarter_thetas: &[T],
        depth_limited: bool,
    ) -> Self {
        let n = quarter_thetas.len();
        debug_assert!(n > 0, "subdivision always emits the quarter end");

        let mut thetas = Vec::with_capacity(n + 1);
        thetas.push(T::zero());
        thetas.extend_from_slice(quarter_thetas);

        let quarter = thetas
            .iter()
            .enumerate()
            .map(|(i, &theta)| {
                if i == 0 {
                    vec2(semi_major, T::zero())
                } else if i == n {
                    // theta = PI/2 exactly, avoid cos(PI/2) rounding residue
                    vec2(T::zero(), semi_minor)
                } else {
                    vec2(semi_major * theta.cos(), semi_minor * theta.sin())
                }
            })
            .collect();

        Self {
            center,
            quarter,
            thetas,
            front: 0,
            back: 4 * n,
            depth_limited,
        }
    }

    /// Number of subdivision outputs in one quarter (total point count is 4 times this).
    #[inline]
    fn quarter_len(&self) -> usize {
        self.quarter.len() - 1
    }

    /// Total number of points in the full sequence (not just those remaining).
    #[inline]
    pub fn total_count(&self) -> usize {
        4 * self.quarter_len()
    }

    /// Returns `true` if any interval was accepted because the subdivision budget was used up, in
    /// which case the max angle error is not guaranteed for every chord.
    #[inline]
    pub fn depth_limited(&self) -> bool {
        self.depth_limited
    }

    /// Parameter angle (in `[0, 2PI)`) of the point at `index` in the full sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.total_count()`.
    pub fn theta_at(&self, index: usize) -> T {
        assert!(index < self.total_count(), "index out of bounds");
        let n = self.quarter_len();
        let half = index / (2 * n);
        let r = index % (2 * n);
        let theta = if r < n {
            self.thetas[r]
        } else {
            T::pi() - self.thetas[n - (r - n)]
        };

        if half == 0 { theta } else { theta + T::pi() }
    }

    /// Point at `index` in the full sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.total_count()`.
    pub fn point_at(&self, index: usize) -> Vector2<T> {
        assert!(index < self.total_count(), "index out of bounds");
        let n = self.quarter_len();
        let half = index / (2 * n);
        let r = index % (2 * n);
        let offset = if r < n {
            self.quarter[r]
        } else {
            self.quarter[n - (r - n)].mirror_x()
        };

        let offset = if half == 0 { offset } else { -offset };
        self.center + offset
    }
}

impl<T> Iterator for EllipsePoints<T>
where
    T: Real,
{
    type Item = Vector2<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let p = self.point_at(self.front);
        self.front += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for EllipsePoints<T>
where
    T: Real,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        Some(self.point_at(self.back))
    }
}

impl<T> ExactSizeIterator for EllipsePoints<T> where T: Real {}

impl<T> FusedIterator for EllipsePoints<T> where T: Real {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn unit_circle_points() -> EllipsePoints<f64> {
        EllipsePoints::new(
            Vector2::zero(),
            1.0,
            1.0,
            &[FRAC_PI_4, FRAC_PI_2],
            false,
        )
    }

    #[test]
    fn assembly_order() {
        let points = unit_circle_points();
        assert_eq!(points.total_count(), 8);
        let expected_thetas = [
            0.0,
            FRAC_PI_4,
            FRAC_PI_2,
            3.0 * FRAC_PI_4,
            PI,
            5.0 * FRAC_PI_4,
            3.0 * FRAC_PI_2,
            7.0 * FRAC_PI_4,
        ];
        for (i, expected) in expected_thetas.iter().enumerate() {
            assert_fuzzy_eq!(points.theta_at(i), *expected);
            let p = points.point_at(i);
            assert_fuzzy_eq!(p, vec2(expected.cos(), expected.sin()));
        }
    }

    #[test]
    fn axis_points_are_exact() {
        let points = EllipsePoints::new(vec2(10.0, -4.0), 3.0, 2.0, &[1.0, FRAC_PI_2], false);
        let all: Vec<_> = points.collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], vec2(13.0, -4.0));
        assert_eq!(all[2], vec2(10.0, -2.0));
        assert_eq!(all[4], vec2(7.0, -4.0));
        assert_eq!(all[6], vec2(10.0, -6.0));
    }

    #[test]
    fn double_ended_and_exact_size() {
        let mut points = unit_circle_points();
        assert_eq!(points.len(), 8);
        let first = points.next().unwrap();
        let last = points.next_back().unwrap();
        assert_eq!(points.len(), 6);
        assert!(first.fuzzy_eq(vec2(1.0, 0.0)));
        assert!(last.fuzzy_eq(vec2(FRAC_PI_4.cos(), -FRAC_PI_4.sin())));

        let rest: Vec<_> = points.by_ref().collect();
        assert_eq!(rest.len(), 6);
        assert_eq!(points.next(), None);
        assert_eq!(points.next_back(), None);
        assert_eq!(points.size_hint(), (0, Some(0)));
    }

    #[test]
    fn forward_and_reverse_agree() {
        let points = EllipsePoints::new(vec2(1.0, 2.0), 5.0, 1.5, &[0.3, 0.9, FRAC_PI_2], true);
        assert!(points.depth_limited());
        let forward: Vec<_> = points.clone().collect();
        let mut reverse: Vec<_> = points.rev().collect();
        reverse.reverse();
        assert_eq!(forward, reverse);
    }
}
