// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load an OpenDRIVE file.
//!
//! Reads the file given on the command line (or the bundled sample), then samples each road's
//! reference line at a fixed spacing. Parser diagnostics are printed by the `tracing_subscriber`
//! formatter.
//!
//! Run:
//! - `cargo run -p causeway_demos --example load_xodr`
//! - `cargo run -p causeway_demos --example load_xodr -- path/to/map.xodr`

use std::path::PathBuf;

use causeway_network::RoadNetwork;

const SPACING: f64 = 10.0;

fn main() {
    tracing_subscriber::fmt::fmt().init();

    let path = std::env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample.xodr"),
        PathBuf::from,
    );

    let mut network = RoadNetwork::new();
    if let Err(err) = network.set_source(&path) {
        eprintln!("failed to load {}: {err}", path.display());
        std::process::exit(1);
    }

    println!(
        "{}: {} roads, {} segments",
        path.display(),
        network.roads().len(),
        network.segment_count()
    );

    for road in network.roads() {
        let junction = if road.in_junction() {
            format!("junction {}", road.junction())
        } else {
            "no junction".to_owned()
        };
        println!("road {} '{}' ({junction}), length {}", road.id(), road.name(), road.length());

        let mut s = 0.0;
        while s <= road.length() {
            if let Some(pose) = road.pose_at(s) {
                println!(
                    "  s={:7.2}  x={:8.3}  y={:8.3}  hdg={:6.3}",
                    s, pose.position.x, pose.position.y, pose.heading
                );
            }
            s += SPACING;
        }
    }
}
