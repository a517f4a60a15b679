// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-line segments and their evaluation by arc length.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Affine, Point, Vec2};

use crate::clothoid::clothoid;
use crate::error::{GeometryError, Result};
#[cfg(not(feature = "std"))]
use crate::math::FloatFuncs;
use crate::poly::{ParamPoly3, ParamRange, Poly3};
use crate::pose::{Pose, normalize_heading};
use crate::quadrature::integrate;

/// Threshold below which a spiral's curvature rate, and then its start curvature, count as zero.
///
/// It decides whether a spiral is evaluated as a line, an arc, or a true clothoid.
pub const SPIRAL_EPSILON: f64 = f64::EPSILON;

/// Largest canonical clothoid argument `|s0| / a` a spiral is anchored at.
///
/// Beyond it the start curvature dwarfs the curvature rate: the window lies so far out on the
/// canonical spiral that its Fresnel values and heading lose most of their significant digits.
/// Such spirals are integrated from the segment start instead.
pub const CANONICAL_ARGUMENT_LIMIT: f64 = 1.0e3;

/// Largest heading change covered by one quadrature piece of an integrated spiral.
const PIECE_TURN: f64 = 0.25;
const MAX_PIECES: f64 = 4096.0;

/// Fields shared by every segment: where it starts along the road and in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Arc length along the road at which the segment starts.
    pub s: f64,
    /// Start position in the inertial frame.
    pub start: Point,
    /// Start heading in radians, as authored (not normalized).
    pub heading: f64,
    /// Arc length of the segment.
    pub length: f64,
}

impl Placement {
    /// Create a placement from raw document values.
    pub const fn new(s: f64, x: f64, y: f64, heading: f64, length: f64) -> Self {
        Self {
            s,
            start: Point::new(x, y),
            heading,
            length,
        }
    }

    fn line_pose(&self, ds: f64) -> Pose {
        Pose::new(self.start + Vec2::from_angle(self.heading) * ds, self.heading)
    }

    fn local_to_inertial(&self, local: Point, local_heading: f64) -> Pose {
        let frame = Affine::translate(self.start.to_vec2()) * Affine::rotate(self.heading);
        Pose::new(frame * local, self.heading + local_heading)
    }
}

/// A circular arc of constant, non-zero curvature.
///
/// Positive curvature places the center to the right of the start heading and the heading
/// decreases along the arc; negative curvature mirrors this to the left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arc {
    curvature: f64,
    radius: f64,
    center: Point,
}

impl Arc {
    fn new(placement: &Placement, curvature: f64) -> Result<Self> {
        if curvature == 0.0 {
            return Err(GeometryError::degenerate("arc", "curvature is zero"));
        }
        if !curvature.is_finite() {
            return Err(GeometryError::degenerate("arc", "curvature is not finite"));
        }
        let radius = 1.0 / curvature.abs();
        if !radius.is_finite() {
            return Err(GeometryError::degenerate("arc", "radius is not finite"));
        }
        let side = if curvature < 0.0 {
            placement.heading + FRAC_PI_2
        } else {
            placement.heading - FRAC_PI_2
        };
        Ok(Self {
            curvature,
            radius,
            center: placement.start + Vec2::from_angle(side) * radius,
        })
    }

    /// Signed curvature.
    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    /// Radius, `1 / |curvature|`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Center of the circle in the inertial frame.
    pub fn center(&self) -> Point {
        self.center
    }

    fn evaluate(&self, heading: f64, ds: f64) -> Pose {
        let central_angle = ds / self.radius;
        let (polar, heading) = if self.curvature < 0.0 {
            (heading - FRAC_PI_2 + central_angle, heading + central_angle)
        } else {
            (heading + FRAC_PI_2 - central_angle, heading - central_angle)
        };
        Pose::new(self.center + Vec2::from_angle(polar) * self.radius, heading)
    }
}

/// How a spiral is evaluated, decided once at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpiralShape {
    /// Curvature is zero throughout: evaluated as a line.
    Line,
    /// Curvature is constant and non-zero: evaluated as this arc.
    Arc(Arc),
    /// Curvature varies: a window of the canonical clothoid moved onto the segment.
    Clothoid {
        /// Arc length on the canonical clothoid where the segment starts.
        s0: f64,
        /// Canonical clothoid pose at `s0`.
        anchor: Pose,
        /// Normalized start heading of the segment.
        start_heading: f64,
        /// Rotation from the canonical frame to the inertial frame.
        rotation: Affine,
    },
    /// Curvature varies too little against its magnitude to anchor on the canonical clothoid
    /// (see [`CANONICAL_ARGUMENT_LIMIT`]): the tangent is integrated from the segment start.
    Integrated {
        /// Normalized start heading of the segment.
        start_heading: f64,
    },
}

/// An Euler spiral whose curvature changes linearly from start to end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spiral {
    curvature_start: f64,
    curvature_end: f64,
    cdot: f64,
    shape: SpiralShape,
}

impl Spiral {
    fn new(placement: &Placement, curvature_start: f64, curvature_end: f64) -> Result<Self> {
        let cdot = (curvature_end - curvature_start) / placement.length;
        if !cdot.is_finite() {
            return Err(GeometryError::degenerate(
                "spiral",
                "curvature rate is not finite",
            ));
        }

        let shape = if cdot.abs() < SPIRAL_EPSILON {
            if curvature_start.abs() < SPIRAL_EPSILON {
                SpiralShape::Line
            } else {
                SpiralShape::Arc(Arc::new(placement, curvature_start)?)
            }
        } else if curvature_start.abs() / (PI * cdot.abs()).sqrt()
            > CANONICAL_ARGUMENT_LIMIT
        {
            SpiralShape::Integrated {
                start_heading: normalize_heading(placement.heading),
            }
        } else {
            let s0 = curvature_start / cdot;
            let anchor = clothoid(s0, cdot);
            let start_heading = normalize_heading(placement.heading);
            SpiralShape::Clothoid {
                s0,
                anchor,
                start_heading,
                rotation: Affine::rotate(start_heading) * Affine::rotate(-anchor.heading),
            }
        };

        Ok(Self {
            curvature_start,
            curvature_end,
            cdot,
            shape,
        })
    }

    /// Curvature at the start of the segment.
    pub fn curvature_start(&self) -> f64 {
        self.curvature_start
    }

    /// Curvature at the end of the segment.
    pub fn curvature_end(&self) -> f64 {
        self.curvature_end
    }

    /// Rate of change of curvature per unit arc length.
    pub fn curvature_rate(&self) -> f64 {
        self.cdot
    }

    /// The evaluation strategy chosen for this spiral.
    pub fn shape(&self) -> &SpiralShape {
        &self.shape
    }

    fn evaluate(&self, placement: &Placement, ds: f64) -> Pose {
        match &self.shape {
            SpiralShape::Line => placement.line_pose(ds),
            SpiralShape::Arc(arc) => arc.evaluate(placement.heading, ds),
            SpiralShape::Clothoid {
                s0,
                anchor,
                start_heading,
                rotation,
            } => {
                let raw = clothoid(s0 + ds, self.cdot);
                let offset = raw.position - anchor.position;
                let rotated = *rotation * offset.to_point();
                Pose::new(
                    placement.start + rotated.to_vec2(),
                    raw.heading - anchor.heading + start_heading,
                )
            }
            SpiralShape::Integrated { start_heading } => {
                let heading_at = |t: f64| {
                    start_heading + self.curvature_start * t + 0.5 * self.cdot * t * t
                };
                let turn = (self.curvature_start * ds).abs() + (0.5 * self.cdot * ds * ds).abs();
                let offset = integrate(
                    |t| Vec2::from_angle(heading_at(t)),
                    ds,
                    quadrature_pieces(turn),
                );
                Pose::new(placement.start + offset, heading_at(ds))
            }
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the count is clamped to [1, MAX_PIECES] before the cast"
)]
fn quadrature_pieces(turn: f64) -> u32 {
    if turn.is_nan() {
        return 1;
    }
    (turn / PIECE_TURN).ceil().clamp(1.0, MAX_PIECES) as u32
}

/// Variant payload of a [`Segment`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentKind {
    /// Straight line.
    Line,
    /// Circular arc.
    Arc(Arc),
    /// Euler spiral.
    Spiral(Spiral),
    /// Cubic lateral offset over the local `u` axis.
    Poly3(Poly3),
    /// Parametric cubic in the local frame.
    ParamPoly3(ParamPoly3),
}

/// One piece of a road's reference line.
///
/// Segments are immutable once built. Derived values (arc centers, spiral anchors) are
/// computed by the constructors and never recomputed during evaluation.
///
/// Evaluation accepts any real offset. Offsets outside `[0, length]` extrapolate the
/// segment's closed-form curve rather than clamping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    placement: Placement,
    kind: SegmentKind,
}

impl Segment {
    /// A straight line.
    pub fn line(placement: Placement) -> Self {
        Self {
            placement,
            kind: SegmentKind::Line,
        }
    }

    /// A circular arc.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateGeometry`] if `curvature` is zero or not finite.
    pub fn arc(placement: Placement, curvature: f64) -> Result<Self> {
        Ok(Self {
            kind: SegmentKind::Arc(Arc::new(&placement, curvature)?),
            placement,
        })
    }

    /// An Euler spiral between two curvatures.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateGeometry`] if the curvature rate is not finite,
    /// which happens for a zero or non-finite length.
    pub fn spiral(placement: Placement, curvature_start: f64, curvature_end: f64) -> Result<Self> {
        Ok(Self {
            kind: SegmentKind::Spiral(Spiral::new(&placement, curvature_start, curvature_end)?),
            placement,
        })
    }

    /// A cubic lateral offset curve.
    pub fn poly3(placement: Placement, shape: Poly3) -> Self {
        Self {
            placement,
            kind: SegmentKind::Poly3(shape),
        }
    }

    /// A parametric cubic curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateGeometry`] for a [`ParamRange::Normalized`] curve
    /// whose length is not positive and finite, since its parameter is `ds / length`.
    pub fn param_poly3(placement: Placement, shape: ParamPoly3) -> Result<Self> {
        if shape.range == ParamRange::Normalized
            && !(placement.length.is_finite() && placement.length > 0.0)
        {
            return Err(GeometryError::degenerate(
                "paramPoly3",
                "normalized range needs a positive finite length",
            ));
        }
        Ok(Self {
            placement,
            kind: SegmentKind::ParamPoly3(shape),
        })
    }

    /// Shared placement fields.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Variant payload.
    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    /// Arc length along the road at which this segment starts.
    pub fn s(&self) -> f64 {
        self.placement.s
    }

    /// Arc length of this segment.
    pub fn length(&self) -> f64 {
        self.placement.length
    }

    /// Pose at offset `ds` from the segment start.
    ///
    /// Headings at `ds = 0` follow two rules:
    ///
    /// - Lines, arcs, and spirals evaluated as a line or an arc ([`SpiralShape::Line`],
    ///   [`SpiralShape::Arc`]) start from the authored heading as stored, without normalization.
    /// - Spirals with varying curvature ([`SpiralShape::Clothoid`], [`SpiralShape::Integrated`])
    ///   start from the authored heading normalized into `[0, 2π)`.
    ///
    /// Positions at `ds = 0` are the placement start in every case.
    pub fn evaluate(&self, ds: f64) -> Pose {
        let placement = &self.placement;
        match &self.kind {
            SegmentKind::Line => placement.line_pose(ds),
            SegmentKind::Arc(arc) => arc.evaluate(placement.heading, ds),
            SegmentKind::Spiral(spiral) => spiral.evaluate(placement, ds),
            SegmentKind::Poly3(poly) => {
                let (local, heading) = poly.local(ds);
                placement.local_to_inertial(local, heading)
            }
            SegmentKind::ParamPoly3(poly) => {
                let (local, heading) = poly.local(ds, placement.length);
                placement.local_to_inertial(local, heading)
            }
        }
    }

    /// Pose at the end of the segment.
    pub fn end_pose(&self) -> Pose {
        self.evaluate(self.placement.length)
    }

    /// Position at `ds = 0`.
    pub fn start_position(&self) -> Point {
        match &self.kind {
            SegmentKind::Line | SegmentKind::Arc(_) | SegmentKind::Spiral(_) => {
                self.placement.start
            }
            SegmentKind::Poly3(_) | SegmentKind::ParamPoly3(_) => self.evaluate(0.0).position,
        }
    }

    /// Unit direction of travel at `ds = 0`.
    pub fn start_heading(&self) -> Vec2 {
        match &self.kind {
            SegmentKind::Line | SegmentKind::Arc(_) => Vec2::from_angle(self.placement.heading),
            SegmentKind::Spiral(spiral) => match spiral.shape {
                SpiralShape::Line | SpiralShape::Arc(_) => {
                    Vec2::from_angle(self.placement.heading)
                }
                SpiralShape::Clothoid { start_heading, .. }
                | SpiralShape::Integrated { start_heading } => Vec2::from_angle(start_heading),
            },
            SegmentKind::Poly3(_) | SegmentKind::ParamPoly3(_) => self.evaluate(0.0).direction(),
        }
    }
}
