// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference line basics.
//!
//! Chain a line, a spiral and an arc by hand and walk along them.
//!
//! Run:
//! - `cargo run -p causeway_demos --example reference_line_basics`

use causeway_geometry::{Placement, Segment, SegmentKind};

fn main() {
    let line = Segment::line(Placement::new(0.0, 0.0, 0.0, 0.0, 40.0));

    // Each segment starts where the previous one ended.
    let joint = line.end_pose();
    let spiral = Segment::spiral(
        Placement::new(
            40.0,
            joint.position.x,
            joint.position.y,
            joint.heading,
            30.0,
        ),
        0.0,
        0.025,
    )
    .unwrap();

    let joint = spiral.end_pose();
    let arc = Segment::arc(
        Placement::new(
            70.0,
            joint.position.x,
            joint.position.y,
            joint.heading,
            30.0,
        ),
        -0.025,
    )
    .unwrap();

    for segment in [line, spiral, arc] {
        let name = match segment.kind() {
            SegmentKind::Line => "line",
            SegmentKind::Arc(_) => "arc",
            SegmentKind::Spiral(_) => "spiral",
            SegmentKind::Poly3(_) => "poly3",
            SegmentKind::ParamPoly3(_) => "paramPoly3",
        };
        println!("{name} from s={} (length {})", segment.s(), segment.length());
        for step in 0..=3 {
            let ds = segment.length() * f64::from(step) / 3.0;
            let pose = segment.evaluate(ds);
            println!(
                "  s={:7.2}  x={:8.3}  y={:8.3}  hdg={:6.3}",
                segment.s() + ds,
                pose.position.x,
                pose.position.y,
                pose.heading
            );
        }
    }

    // A zero-curvature arc is rejected.
    let err = Segment::arc(Placement::new(0.0, 0.0, 0.0, 0.0, 10.0), 0.0).unwrap_err();
    println!("rejected: {err}");
}
