// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single road: metadata plus its reference-line segments.

use causeway_geometry::{Pose, Segment};

/// Junction id of a road that is not part of a junction.
pub const NO_JUNCTION: i64 = -1;

/// Road id used when the document does not provide a parsable one.
pub const UNKNOWN_ROAD_ID: i64 = -1;

/// A road and the segments of its reference line, in document order.
///
/// Segments are not required to be sorted or contiguous in `s`.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    id: i64,
    name: String,
    length: f64,
    junction: i64,
    geometries: Vec<Segment>,
}

impl Road {
    pub(crate) fn new(id: i64, name: String, length: f64, junction: i64) -> Self {
        Self {
            id,
            name,
            length,
            junction,
            geometries: Vec::new(),
        }
    }

    pub(crate) fn push_geometry(&mut self, segment: Segment) {
        self.geometries.push(segment);
    }

    /// Road id as authored. Not validated and not guaranteed unique.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Road name; empty if absent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Authored total length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Id of the junction this road belongs to, or [`NO_JUNCTION`].
    pub fn junction(&self) -> i64 {
        self.junction
    }

    /// Whether the road is a connecting road inside a junction.
    pub fn in_junction(&self) -> bool {
        self.junction != NO_JUNCTION
    }

    /// Reference-line segments in document order.
    pub fn geometries(&self) -> &[Segment] {
        &self.geometries
    }

    /// Segment responsible for road arc length `s`.
    ///
    /// This is the segment with the greatest start `s` not exceeding `s`, the first in
    /// document order on ties. Before every segment, the earliest-starting one is returned so
    /// that it extrapolates backwards. `None` only for a road without segments.
    pub fn geometry_at(&self, s: f64) -> Option<&Segment> {
        let mut covering: Option<&Segment> = None;
        let mut earliest: Option<&Segment> = None;
        for segment in &self.geometries {
            if segment.s() <= s && covering.is_none_or(|c| segment.s() > c.s()) {
                covering = Some(segment);
            }
            if earliest.is_none_or(|e| segment.s() < e.s()) {
                earliest = Some(segment);
            }
        }
        covering.or(earliest)
    }

    /// Pose on the reference line at road arc length `s`.
    pub fn pose_at(&self, s: f64) -> Option<Pose> {
        self.geometry_at(s)
            .map(|segment| segment.evaluate(s - segment.s()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use causeway_geometry::Placement;

    fn two_segment_road() -> Road {
        let mut road = Road::new(4, "main".into(), 20.0, NO_JUNCTION);
        road.push_geometry(Segment::line(Placement::new(0.0, 0.0, 0.0, 0.0, 10.0)));
        road.push_geometry(Segment::arc(Placement::new(10.0, 10.0, 0.0, 0.0, 10.0), -0.1).unwrap());
        road
    }

    #[test]
    fn metadata_accessors() {
        let road = Road::new(3, String::new(), 12.5, 9);
        assert_eq!(road.id(), 3);
        assert_eq!(road.name(), "");
        assert_eq!(road.length(), 12.5);
        assert_eq!(road.junction(), 9);
        assert!(road.in_junction());
        assert!(road.geometries().is_empty());
        assert!(road.pose_at(0.0).is_none());
    }

    #[test]
    fn geometry_at_picks_covering_segment() {
        let road = two_segment_road();
        assert_eq!(road.geometry_at(0.0).unwrap().s(), 0.0);
        assert_eq!(road.geometry_at(9.99).unwrap().s(), 0.0);
        assert_eq!(road.geometry_at(10.0).unwrap().s(), 10.0);
        assert_eq!(road.geometry_at(50.0).unwrap().s(), 10.0);
        // Before the first segment the earliest one extrapolates.
        assert_eq!(road.geometry_at(-1.0).unwrap().s(), 0.0);
    }

    #[test]
    fn geometry_at_ignores_document_order() {
        let mut road = Road::new(1, String::new(), 20.0, NO_JUNCTION);
        road.push_geometry(Segment::line(Placement::new(10.0, 10.0, 0.0, 0.0, 10.0)));
        road.push_geometry(Segment::line(Placement::new(0.0, 0.0, 0.0, 0.0, 10.0)));
        assert_eq!(road.geometry_at(5.0).unwrap().s(), 0.0);
        assert_eq!(road.geometry_at(15.0).unwrap().s(), 10.0);
        assert_eq!(road.geometry_at(-3.0).unwrap().s(), 0.0);
    }

    #[test]
    fn pose_at_uses_offset_into_segment() {
        let road = two_segment_road();
        let pose = road.pose_at(4.0).unwrap();
        assert_abs_diff_eq!(pose.position.x, 4.0, epsilon = 1e-12);

        let pose = road.pose_at(10.0).unwrap();
        assert_abs_diff_eq!(pose.position.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pose.position.y, 0.0, epsilon = 1e-9);

        // Negative curvature turns counterclockwise; the heading grows.
        let pose = road.pose_at(15.0).unwrap();
        assert_abs_diff_eq!(pose.heading, 0.5, epsilon = 1e-12);
        assert!(pose.position.y > 0.0);
    }
}
