#![allow(dead_code)]

use ellipse_tess::{
    core::{
        math::{Vector2, angle, line_angle_between, normalize_radians, vec2},
        traits::FuzzyEq,
    },
    ellipse::{Ellipse, EllipsePoints},
};

/// Tessellation output collected along with the per index parameter angles.
#[derive(Debug, Clone)]
pub struct Tessellated {
    pub ellipse: Ellipse<f64>,
    pub points: Vec<Vector2<f64>>,
    pub thetas: Vec<f64>,
    pub depth_limited: bool,
}

impl Tessellated {
    pub fn new(ellipse: Ellipse<f64>, points: EllipsePoints<f64>) -> Self {
        let thetas = (0..points.total_count())
            .map(|i| points.theta_at(i))
            .collect();
        let depth_limited = points.depth_limited();
        Self {
            ellipse,
            points: points.collect(),
            thetas,
            depth_limited,
        }
    }

    pub fn quarter_len(&self) -> usize {
        self.points.len() / 4
    }
}

/// Direction angle of the tangent line at parameter `theta`.
pub fn tangent_direction(ellipse: &Ellipse<f64>, theta: f64) -> f64 {
    let (a, b) = ellipse.semi_axes();
    (b * theta.cos()).atan2(-a * theta.sin())
}

/// Parameter angle in `[0, 2PI)` recovered from a point on the ellipse.
pub fn param_angle(ellipse: &Ellipse<f64>, p: Vector2<f64>) -> f64 {
    let (a, b) = ellipse.semi_axes();
    let theta = normalize_radians(((p.y - ellipse.center.y) / b).atan2((p.x - ellipse.center.x) / a));
    if theta >= std::f64::consts::TAU { 0.0 } else { theta }
}

/// Largest angle between any polygon chord (including the closing chord) and the tangent line at
/// either of its end points.
pub fn max_chord_tangent_error(t: &Tessellated) -> f64 {
    let count = t.points.len();
    (0..count)
        .map(|i| {
            let j = (i + 1) % count;
            let chord = angle(t.points[i], t.points[j]);
            let start_err = line_angle_between(chord, tangent_direction(&t.ellipse, t.thetas[i]));
            let end_err = line_angle_between(chord, tangent_direction(&t.ellipse, t.thetas[j]));
            start_err.max(end_err)
        })
        .fold(0.0, f64::max)
}

/// Assert every point satisfies the ellipse equation.
pub fn assert_on_ellipse(t: &Tessellated, eps: f64) {
    let (a, b) = t.ellipse.semi_axes();
    for (i, p) in t.points.iter().enumerate() {
        let dx = (p.x - t.ellipse.center.x) / a;
        let dy = (p.y - t.ellipse.center.y) / b;
        let v = dx * dx + dy * dy;
        assert!(
            v.fuzzy_eq_eps(1.0, eps),
            "point {i} {p:?} not on ellipse {:?} (value: {v})",
            t.ellipse
        );
    }
}

/// Assert the quarter 2 points mirror quarter 1 across the vertical axis and the second half is
/// the first half rotated by PI about the center.
pub fn assert_symmetric(t: &Tessellated, eps: f64) {
    let n = t.quarter_len();
    let c = t.ellipse.center;
    assert_eq!(t.points.len(), 4 * n);

    for j in 1..n {
        let q2 = t.points[n + j] - c;
        let q1 = t.points[n - j] - c;
        assert!(
            q2.fuzzy_eq_eps(q1.mirror_x(), eps),
            "quarter 2 index {j} does not mirror quarter 1: {q2:?} vs {q1:?}"
        );
    }

    for i in 0..2 * n {
        let first = t.points[i] - c;
        let second = t.points[2 * n + i] - c;
        assert!(
            second.fuzzy_eq_eps(-first, eps),
            "second half index {i} is not first half rotated by PI: {second:?} vs {first:?}"
        );
    }

    // four axis points
    let (a, b) = t.ellipse.semi_axes();
    assert!((t.points[0] - c).fuzzy_eq_eps(vec2(a, 0.0), eps));
    assert!((t.points[n] - c).fuzzy_eq_eps(vec2(0.0, b), eps));
    assert!((t.points[2 * n] - c).fuzzy_eq_eps(vec2(-a, 0.0), eps));
    assert!((t.points[3 * n] - c).fuzzy_eq_eps(vec2(0.0, -b), eps));
}

/// Assert the parameter angles strictly increase through `[0, 2PI)` and agree with the angles
/// recovered from the points.
pub fn assert_angles_increase(t: &Tessellated, eps: f64) {
    assert!(t.thetas[0].fuzzy_eq_zero());
    for w in t.thetas.windows(2) {
        assert!(w[0] < w[1], "angles not increasing: {} then {}", w[0], w[1]);
    }
    assert!(*t.thetas.last().unwrap() < std::f64::consts::TAU);

    for (i, (p, theta)) in t.points.iter().zip(&t.thetas).enumerate() {
        let recovered = param_angle(&t.ellipse, *p);
        assert!(
            recovered.fuzzy_eq_eps(*theta, eps),
            "index {i}: recovered angle {recovered} differs from {theta}"
        );
    }
}
