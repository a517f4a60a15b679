// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluated poses and heading normalization.

use core::f64::consts::TAU;

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::math::FloatFuncs;

/// A position and heading on a reference line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    /// Position in the frame the pose was evaluated in.
    pub position: Point,
    /// Heading in radians, measured counterclockwise from the positive x axis.
    ///
    /// Not normalized unless the producing segment documents otherwise.
    pub heading: f64,
}

impl Pose {
    /// Create a pose from a position and heading.
    pub const fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Unit vector pointing along the heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }
}

/// Map any angle into `[0, 2π)`.
///
/// Negative inputs wrap around, and `-0.0` maps to `+0.0`. NaN stays NaN.
pub fn normalize_heading(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // Tiny negative inputs round up to exactly TAU.
    if wrapped >= TAU { 0.0 } else { wrapped + 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    #[test]
    fn negative_angle_wraps_into_range() {
        let h = normalize_heading(-0.1);
        assert!((0.0..TAU).contains(&h));
        assert_abs_diff_eq!(h, TAU - 0.1, epsilon = 1e-12);
    }

    #[test]
    fn large_angle_wraps_into_range() {
        let h = normalize_heading(7.0);
        assert!((0.0..TAU).contains(&h));
        assert_abs_diff_eq!(h, 7.0 - TAU, epsilon = 1e-12);
    }

    #[test]
    fn negative_zero_becomes_positive_zero() {
        let h = normalize_heading(-0.0);
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }

    #[test]
    fn tiny_negative_does_not_return_tau() {
        let h = normalize_heading(-1e-20);
        assert!(h < TAU);
    }

    #[test]
    fn in_range_angles_are_unchanged() {
        for a in [0.0, 1.0, PI, TAU - 1e-9] {
            assert_eq!(normalize_heading(a), a);
        }
        assert_eq!(normalize_heading(TAU), 0.0);
        assert_abs_diff_eq!(normalize_heading(-3.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn direction_is_unit_heading_vector() {
        let pose = Pose::new(Point::new(3.0, 4.0), PI / 2.0);
        let d = pose.direction();
        assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(d.y, 1.0, epsilon = 1e-15);
    }
}
