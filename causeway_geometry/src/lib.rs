// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Causeway Geometry: road reference-line segments evaluated by arc length.
//!
//! A road's reference line is a sequence of segments. Each segment knows where it starts
//! (arc length `s`, position, heading) and how long it is, and evaluates to a [`Pose`] at any
//! offset from its own start.
//!
//! - [`Segment::line`]: straight line.
//! - [`Segment::arc`]: circular arc of constant curvature.
//! - [`Segment::spiral`]: Euler spiral (clothoid) with linearly varying curvature.
//! - [`Segment::poly3`] and [`Segment::param_poly3`]: cubic curves in the segment-local frame.
//!
//! Evaluation is pure and allocation-free. Derived values are computed once by the
//! constructors, so a built [`Segment`] is `Copy`, `Send` and `Sync`.
//!
//! ## Sign conventions
//!
//! Conventions differ between segment types and are kept deliberately:
//!
//! - Arcs with positive curvature turn clockwise (heading decreases); negative curvature
//!   turns counterclockwise.
//! - Spirals with varying curvature turn counterclockwise where their curvature is positive,
//!   following the canonical clothoid from [`clothoid::clothoid`]. A spiral whose curvature is
//!   constant (rate below [`SPIRAL_EPSILON`]) is evaluated as an arc, with the arc convention.
//! - Line and arc headings are reported relative to the authored start heading as stored;
//!   headings of spirals with varying curvature are relative to the start heading normalized
//!   into `[0, 2π)`.
//! - Spirals whose curvature barely changes against its magnitude (see
//!   [`CANONICAL_ARGUMENT_LIMIT`]) are integrated from their start rather than read off the
//!   canonical clothoid. Both paths give the same curve.
//!
//! ## Out-of-range offsets
//!
//! Offsets below `0` or beyond the segment length are not rejected: the closed-form curve is
//! extrapolated.
//!
//! ## Features
//!
//! - `std` (enabled by default): use the standard library's float functions.
//! - `libm`: build without `std`, taking float functions from `libm`. At least one of the two
//!   must be enabled.
//!
//! # Example
//!
//! ```rust
//! use causeway_geometry::{Placement, Segment};
//! use kurbo::Point;
//!
//! let line = Segment::line(Placement::new(0.0, 0.0, 0.0, 0.0, 10.0));
//! let pose = line.evaluate(5.0);
//! assert_eq!(pose.position, Point::new(5.0, 0.0));
//! assert_eq!(pose.heading, 0.0);
//!
//! // A zero-curvature arc cannot be built.
//! assert!(Segment::arc(Placement::new(0.0, 0.0, 0.0, 0.0, 10.0), 0.0).is_err());
//!
//! // A spiral easing from straight into a curve.
//! let spiral = Segment::spiral(Placement::new(0.0, 0.0, 0.0, 0.0, 50.0), 0.0, 0.02).unwrap();
//! let end = spiral.end_pose();
//! assert!((end.heading - 0.5).abs() < 1e-12);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("causeway_geometry requires either the `std` or `libm` feature");

pub mod clothoid;
pub mod error;
pub mod poly;
pub mod pose;
pub mod segment;

#[cfg(not(feature = "std"))]
mod math;
mod quadrature;

pub use clothoid::clothoid;
pub use error::{GeometryError, Result};
pub use poly::{Cubic, ParamPoly3, ParamRange, Poly3};
pub use pose::{Pose, normalize_heading};
pub use segment::{
    Arc, CANONICAL_ARGUMENT_LIMIT, Placement, SPIRAL_EPSILON, Segment, SegmentKind, Spiral,
    SpiralShape,
};
