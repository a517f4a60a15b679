// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical Euler spiral (clothoid) evaluation.
//!
//! The canonical spiral starts at the origin with heading `0` and curvature `0`, and its
//! curvature grows linearly with arc length at rate `cdot`. Position is expressed through the
//! Fresnel integrals
//!
//! ```text
//! x(s) = a C(s / a),  y(s) = ± a S(s / a),  a = sqrt(pi / |cdot|)
//! ```
//!
//! which are evaluated with the rational approximations from the Cephes library: a power
//! series ratio for small arguments and the auxiliary functions `f` and `g` for large ones.
//! Both branches agree to double precision at the switch point, and the auxiliary functions
//! are used for every larger argument, so the result is continuous in `s`.
//!
//! Far out on the spiral the Fresnel integrals approach `1/2` while oscillating with amplitude
//! `1 / (pi x)`; that term is what differences between nearby points rely on, so it is never
//! dropped in favor of the limit.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::math::FloatFuncs;
use crate::pose::Pose;

const SN: [f64; 6] = [
    -2.99181919401019853726E3,
    7.08840045257738576863E5,
    -6.29741486205862506537E7,
    2.54890880573376359104E9,
    -4.42979518059697779103E10,
    3.18016297876567817986E11,
];

const SD: [f64; 6] = [
    2.81376268889994315696E2,
    4.55847810806532581675E4,
    5.17343888770096400730E6,
    4.19320245898111231129E8,
    2.24411795645340920940E10,
    6.07366389490084639049E11,
];

const CN: [f64; 6] = [
    -4.98843114573573548651E-8,
    9.50428062829859605134E-6,
    -6.45191435683965050962E-4,
    1.88843319396703850064E-2,
    -2.05525900955013891793E-1,
    9.99999999999999998822E-1,
];

const CD: [f64; 7] = [
    3.99982968972495980367E-12,
    9.15439215774657478799E-10,
    1.25001862479598821474E-7,
    1.22262789024179030997E-5,
    8.68029542941784300606E-4,
    4.12142090722199792936E-2,
    1.00000000000000000118E0,
];

const FN: [f64; 10] = [
    4.21543555043677546506E-1,
    1.43407919780758885261E-1,
    1.15220955073585758835E-2,
    3.45017939782574027900E-4,
    4.63613749287867322088E-6,
    3.05568983790257605827E-8,
    1.02304514164907233465E-10,
    1.72010743268161828879E-13,
    1.34283276233062758925E-16,
    3.76329711269987889006E-20,
];

const FD: [f64; 10] = [
    7.51586398353378947175E-1,
    1.16888925859191382142E-1,
    6.44051526508858611005E-3,
    1.55934409164153020873E-4,
    1.84627567348930545870E-6,
    1.12699224763999035261E-8,
    3.60140029589371370404E-11,
    5.88754533621578410010E-14,
    4.52001434074129701496E-17,
    1.25443237090011264384E-20,
];

const GN: [f64; 11] = [
    5.04442073643383265887E-1,
    1.97102833525523411709E-1,
    1.87648584092575249293E-2,
    6.84079380915393090172E-4,
    1.15138826111884280931E-5,
    9.82852443688422223854E-8,
    4.45344415861750144738E-10,
    1.08268041139020870318E-12,
    1.37555460633261799868E-15,
    8.36354435630677421531E-19,
    1.86958710162783235106E-22,
];

const GD: [f64; 11] = [
    1.47495759925128324529E0,
    3.37748989120019970451E-1,
    2.53603741420338795122E-2,
    8.14679107184306179049E-4,
    1.27545075667729118702E-5,
    1.04314589657571990585E-7,
    4.60680728146520428211E-10,
    1.10273215066240270757E-12,
    1.38796531259578871258E-15,
    8.39158816283118707363E-19,
    1.86958710162783236342E-22,
];

/// Below this squared argument the power series ratio is used.
const SERIES_LIMIT_SQ: f64 = 2.5625;

/// Horner evaluation with an explicit leading coefficient.
fn polevl(x: f64, coef: &[f64]) -> f64 {
    coef.iter().fold(0.0, |acc, c| acc * x + c)
}

/// Horner evaluation with an implicit leading coefficient of `1`.
fn p1evl(x: f64, coef: &[f64]) -> f64 {
    coef.iter().fold(1.0, |acc, c| acc * x + c)
}

/// Normalized Fresnel integrals `(S(x), C(x))` with kernel `t -> pi t^2 / 2`.
///
/// Both integrals are odd in `x`.
pub fn fresnel(x: f64) -> (f64, f64) {
    let ax = x.abs();
    let x2 = ax * ax;

    let (s, c) = if x2 < SERIES_LIMIT_SQ {
        let t = x2 * x2;
        let s = ax * x2 * polevl(t, &SN) / p1evl(t, &SD);
        let c = ax * polevl(t, &CN) / polevl(t, &CD);
        (s, c)
    } else if x2.is_infinite() {
        // The oscillating term is below 1e-154 here.
        (0.5, 0.5)
    } else {
        let t = PI * x2;
        let u = 1.0 / (t * t);
        let t = 1.0 / t;
        let f = 1.0 - u * polevl(u, &FN) / p1evl(u, &FD);
        let g = t * polevl(u, &GN) / p1evl(u, &GD);

        let (sin, cos) = (FRAC_PI_2 * x2).sin_cos();
        let t = PI * ax;
        let c = 0.5 + (f * sin - g * cos) / t;
        let s = 0.5 - (f * cos + g * sin) / t;
        (s, c)
    };

    if x < 0.0 { (-s, -c) } else { (s, c) }
}

/// Pose on the canonical clothoid at arc length `s` for curvature rate `cdot`.
///
/// The heading is `s^2 * cdot / 2`. A positive `cdot` bends towards positive `y`.
/// A zero rate degenerates to the straight line along the x axis.
pub fn clothoid(s: f64, cdot: f64) -> Pose {
    let heading = s * s * cdot * 0.5;
    if cdot == 0.0 {
        return Pose::new(Point::new(s, 0.0), heading);
    }

    let a = (PI / cdot.abs()).sqrt();
    let (fs, fc) = fresnel(s / a);
    let x = a * fc;
    let y = if cdot < 0.0 { -a * fs } else { a * fs };
    Pose::new(Point::new(x, y), heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Composite Simpson integration of the clothoid tangent.
    fn integrate(s: f64, cdot: f64) -> (f64, f64) {
        let n = 200_000;
        let h = s / f64::from(n);
        let mut sx = 0.0;
        let mut sy = 0.0;
        for i in 0..=n {
            let t = f64::from(i) * h;
            let w = if i == 0 || i == n {
                1.0
            } else if i % 2 == 1 {
                4.0
            } else {
                2.0
            };
            let theta = 0.5 * cdot * t * t;
            sx += w * theta.cos();
            sy += w * theta.sin();
        }
        (sx * h / 3.0, sy * h / 3.0)
    }

    #[test]
    fn fresnel_known_values() {
        assert_eq!(fresnel(0.0), (0.0, 0.0));
        // S(1) and C(1) from standard tables.
        let (s, c) = fresnel(1.0);
        assert_abs_diff_eq!(s, 0.438_259_147_390_354_7, epsilon = 1e-12);
        assert_abs_diff_eq!(c, 0.779_893_400_376_822_8, epsilon = 1e-12);
    }

    #[test]
    fn fresnel_is_odd() {
        for x in [0.3, 1.5, 1.6, 2.0, 7.25, 100.0] {
            let (s, c) = fresnel(x);
            let (ns, nc) = fresnel(-x);
            assert_eq!(s, -ns);
            assert_eq!(c, -nc);
        }
    }

    #[test]
    fn fresnel_is_continuous_at_branch_switch() {
        let x = SERIES_LIMIT_SQ.sqrt();
        let below = fresnel(x - 1e-9);
        let above = fresnel(x + 1e-9);
        assert_abs_diff_eq!(below.0, above.0, epsilon = 1e-8);
        assert_abs_diff_eq!(below.1, above.1, epsilon = 1e-8);
    }

    #[test]
    fn fresnel_tends_to_one_half() {
        for x in [1000.0, 1.0e5, 1.0e9] {
            let (s, c) = fresnel(x);
            let amplitude = 1.0 / (PI * x);
            assert_abs_diff_eq!(s, 0.5, epsilon = amplitude * 1.01);
            assert_abs_diff_eq!(c, 0.5, epsilon = amplitude * 1.01);
        }
        assert_eq!(fresnel(1.0e200), (0.5, 0.5));
        assert_eq!(fresnel(f64::INFINITY), (0.5, 0.5));
    }

    #[test]
    fn fresnel_keeps_oscillating_for_large_arguments() {
        // C'(x) = cos(pi x^2 / 2), so nearby large arguments still differ smoothly.
        let x: f64 = 36974.0;
        let dx = x * 1e-12;
        let (s0, c0) = fresnel(x - dx);
        let (s1, c1) = fresnel(x + dx);
        assert!((s1 - s0).abs() <= 2.0 * dx * 1.001 + 1e-12);
        assert!((c1 - c0).abs() <= 2.0 * dx * 1.001 + 1e-12);
        assert_ne!(fresnel(5.0e4), fresnel(5.0e4 + 0.01));
    }

    #[test]
    fn far_window_of_clothoid_moves_with_arc_length() {
        // Start curvature 0.1, rate 1e-12: the window sits near x = 5.6e4 on the canonical
        // spiral, where the chord over 10 m must still be about 10 m.
        let cdot = 1e-12;
        let s0 = 0.1 / cdot;
        let a = clothoid(s0, cdot).position;
        let b = clothoid(s0 + 10.0, cdot).position;
        assert_abs_diff_eq!((b - a).length(), 20.0 * 0.5_f64.sin(), epsilon = 1e-2);
    }

    #[test]
    fn origin_is_canonical_start() {
        let p = clothoid(0.0, 0.05);
        assert_eq!(p.position, Point::ZERO);
        assert_eq!(p.heading, 0.0);
    }

    #[test]
    fn matches_numerical_integration() {
        for cdot in [0.0004, 0.01, -0.01, 0.2] {
            for s in [1.0, 10.0, 35.0, 100.0] {
                let p = clothoid(s, cdot);
                let (x, y) = integrate(s, cdot);
                assert_abs_diff_eq!(p.position.x, x, epsilon = 1e-6);
                assert_abs_diff_eq!(p.position.y, y, epsilon = 1e-6);
                assert_abs_diff_eq!(p.heading, 0.5 * cdot * s * s, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn negative_rate_mirrors_across_x_axis() {
        let left = clothoid(20.0, 0.01);
        let right = clothoid(20.0, -0.01);
        assert_eq!(left.position.x, right.position.x);
        assert_eq!(left.position.y, -right.position.y);
        assert_eq!(left.heading, -right.heading);
    }

    #[test]
    fn negative_arc_length_is_point_symmetric() {
        let fwd = clothoid(12.0, 0.03);
        let back = clothoid(-12.0, 0.03);
        assert_abs_diff_eq!(fwd.position.x, -back.position.x, epsilon = 1e-12);
        assert_abs_diff_eq!(fwd.position.y, -back.position.y, epsilon = 1e-12);
        assert_eq!(fwd.heading, back.heading);
    }

    #[test]
    fn zero_rate_is_straight() {
        let p = clothoid(7.5, 0.0);
        assert_eq!(p.position, Point::new(7.5, 0.0));
        assert_eq!(p.heading, 0.0);
    }
}
