// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite Gauss-Legendre quadrature.

use core::ops::{Add, Mul};

/// Nodes and weights of the 5-point Gauss-Legendre rule on `[-1, 1]`.
const GAUSS_LEGENDRE_5: [(f64, f64); 5] = [
    (0.0, 0.568_888_888_888_888_9),
    (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (-0.906_179_845_938_664, 0.236_926_885_056_189_1),
    (0.906_179_845_938_664, 0.236_926_885_056_189_1),
];

/// Integral of `f` over `[0, end]`, split into `pieces` equal sub-intervals.
///
/// A negative `end` yields the signed integral, so the result is odd in `end` for even `f`.
pub(crate) fn integrate<T>(f: impl Fn(f64) -> T, end: f64, pieces: u32) -> T
where
    T: Copy + Default + Add<Output = T> + Mul<f64, Output = T>,
{
    let pieces = pieces.max(1);
    let piece = end / f64::from(pieces);
    let half = 0.5 * piece;
    (0..pieces).fold(T::default(), |total, i| {
        let mid = (f64::from(i) + 0.5) * piece;
        let sum = GAUSS_LEGENDRE_5
            .iter()
            .fold(T::default(), |acc, &(x, w)| acc + f(mid + half * x) * w);
        total + sum * half
    })
}
