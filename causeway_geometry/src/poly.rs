// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic polynomial shapes in the segment-local `(u, v)` frame.
//!
//! [`Poly3`] describes the lateral offset `v` as a cubic in the local `u` coordinate; since
//! segments are parametrized by arc length, `u` is recovered from the arc length by a
//! bracketed Newton iteration. [`ParamPoly3`] gives `u` and `v` as independent cubics of a parameter `p`.

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::math::FloatFuncs;
use crate::quadrature::integrate;

/// Sub-intervals used for the arc-length quadrature.
const QUADRATURE_PIECES: u32 = 8;
const SOLVE_MAX_STEPS: usize = 64;
const SOLVE_TOLERANCE: f64 = 1e-10;

/// Coefficients of the cubic `a + b t + c t^2 + d t^3`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cubic {
    /// Constant term.
    pub a: f64,
    /// Linear term.
    pub b: f64,
    /// Quadratic term.
    pub c: f64,
    /// Cubic term.
    pub d: f64,
}

impl Cubic {
    /// Create a cubic from its four coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Value at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        ((self.d * t + self.c) * t + self.b) * t + self.a
    }

    /// First derivative at `t`.
    pub fn slope(&self, t: f64) -> f64 {
        (3.0 * self.d * t + 2.0 * self.c) * t + self.b
    }
}

/// Lateral cubic `v(u)` over the local `u` axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Poly3 {
    /// Lateral offset as a function of `u`.
    pub v: Cubic,
}

impl Poly3 {
    /// Create a poly3 shape from its coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            v: Cubic::new(a, b, c, d),
        }
    }

    /// Local point and local heading at arc length `ds`.
    pub(crate) fn local(&self, ds: f64) -> (Point, f64) {
        let u = self.u_at_arc_length(ds);
        (Point::new(u, self.v.eval(u)), self.v.slope(u).atan())
    }

    fn speed(&self, u: f64) -> f64 {
        self.v.slope(u).hypot(1.0)
    }

    /// Arc length of the curve between `u = 0` and `u`; signed like `u`.
    fn arc_length(&self, u: f64) -> f64 {
        integrate(|t| self.speed(t), u, QUADRATURE_PIECES)
    }

    /// Parameter `u` at which the arc length from `u = 0` equals `ds`.
    ///
    /// Newton steps are kept inside a bracket around the root and replaced by bisection when
    /// they leave it, so the iteration converges for any cubic.
    fn u_at_arc_length(&self, ds: f64) -> f64 {
        // Arc length grows monotonically and is at least |u|, so the root lies between 0 and ds.
        let (mut lo, mut hi) = if ds < 0.0 { (ds, 0.0) } else { (0.0, ds) };
        let mut u = ds;
        for _ in 0..SOLVE_MAX_STEPS {
            let err = self.arc_length(u) - ds;
            if err.abs() < SOLVE_TOLERANCE {
                return u;
            }
            if err > 0.0 {
                hi = u;
            } else {
                lo = u;
            }
            let newton = u - err / self.speed(u);
            u = if newton > lo && newton < hi {
                newton
            } else {
                0.5 * (lo + hi)
            };
        }
        u
    }
}

/// How the `p` parameter of a [`ParamPoly3`] relates to the segment's arc length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ParamRange {
    /// `p` runs over `[0, length]`.
    #[default]
    ArcLength,
    /// `p` runs over `[0, 1]`.
    Normalized,
}

/// Parametric cubic `(u(p), v(p))`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ParamPoly3 {
    /// Local `u` coordinate as a function of `p`.
    pub u: Cubic,
    /// Local `v` coordinate as a function of `p`.
    pub v: Cubic,
    /// Domain of the parameter.
    pub range: ParamRange,
}

impl ParamPoly3 {
    /// Create a parametric cubic from its two coordinate polynomials.
    pub const fn new(u: Cubic, v: Cubic, range: ParamRange) -> Self {
        Self { u, v, range }
    }

    /// Local point and local heading at arc length `ds` on a segment of `length`.
    pub(crate) fn local(&self, ds: f64, length: f64) -> (Point, f64) {
        let p = match self.range {
            ParamRange::ArcLength => ds,
            ParamRange::Normalized => ds / length,
        };
        let position = Point::new(self.u.eval(p), self.v.eval(p));
        (position, self.v.slope(p).atan2(self.u.slope(p)))
    }
}
