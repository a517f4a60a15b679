// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use causeway_network::RoadNetwork;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// A document of `roads` roads, each a line, spiral and arc chain.
fn gen_document(roads: usize) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<OpenDRIVE>\n");
    for id in 0..roads {
        let y = id as f64 * 20.0;
        let _ = write!(
            out,
            r#"  <road name="Road {id}" length="90" id="{id}" junction="-1">
    <planView>
      <geometry s="0" x="0" y="{y}" hdg="0" length="30"><line/></geometry>
      <geometry s="30" x="30" y="{y}" hdg="0" length="30"><spiral curvStart="0" curvEnd="0.01"/></geometry>
      <geometry s="60" x="59.9" y="{y2}" hdg="0.15" length="30"><arc curvature="-0.01"/></geometry>
    </planView>
  </road>
"#,
            y2 = y + 1.5,
        );
    }
    out.push_str("</OpenDRIVE>\n");
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_parse");
    for &roads in &[10_usize, 100, 1000] {
        let text = gen_document(roads);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("roads_n{roads}"), |b| {
            b.iter_batched(
                RoadNetwork::new,
                |mut network| {
                    network.parse(black_box(&text)).unwrap();
                    black_box(network.segment_count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reparse(c: &mut Criterion) {
    let text = gen_document(100);
    let mut network = RoadNetwork::new();
    c.bench_function("network_reparse_n100", |b| {
        b.iter(|| {
            network.parse(black_box(&text)).unwrap();
            black_box(network.roads().len());
        });
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut network = RoadNetwork::new();
    network.parse(&gen_document(1000)).unwrap();
    c.bench_function("road_pose_at_n1000", |b| {
        b.iter(|| {
            for id in (0..1000).step_by(37) {
                let road = network.road_by_id(black_box(id)).unwrap();
                black_box(road.pose_at(black_box(45.0)));
            }
        });
    });
}

criterion_group!(benches, bench_parse, bench_reparse, bench_lookup);
criterion_main!(benches);
