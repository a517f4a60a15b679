// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Causeway Network: OpenDRIVE road networks built from plan-view geometry.
//!
//! A [`RoadNetwork`] owns the roads read from one OpenDRIVE document. Each [`Road`] carries its
//! id, name, length and junction, plus the reference-line segments from
//! [`causeway_geometry`] in document order.
//!
//! Parsing goes through a [`DocumentParser`], which walks any element tree implementing
//! [`SourceNode`]; `roxmltree` nodes are supported out of the box. Attribute handling is
//! permissive by default, see the [`parser`] module for the exact policy and
//! [`ParseOptions`] for the strict alternative.
//!
//! A network is rebuilt wholesale: [`RoadNetwork::parse`] and [`RoadNetwork::set_source`]
//! either replace all roads or leave the network untouched on error.
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.
//!
//! # Example
//!
//! ```rust
//! use causeway_network::RoadNetwork;
//!
//! let mut network = RoadNetwork::new();
//! network
//!     .parse(
//!         r#"<OpenDRIVE>
//!             <road name="Main" length="10" id="1" junction="-1">
//!                 <planView>
//!                     <geometry s="0" x="0" y="0" hdg="0" length="10"><line/></geometry>
//!                 </planView>
//!             </road>
//!         </OpenDRIVE>"#,
//!     )
//!     .unwrap();
//!
//! let road = network.road_by_id(1).unwrap();
//! assert_eq!(road.name(), "Main");
//! let pose = road.geometries()[0].evaluate(5.0);
//! assert_eq!(pose.position.x, 5.0);
//! assert_eq!(pose.position.y, 0.0);
//!
//! // Malformed input keeps the previous roads.
//! assert!(network.parse("<OpenDRIVE>").is_err());
//! assert_eq!(network.roads().len(), 1);
//! ```

pub mod error;
pub mod network;
pub mod parser;
pub mod road;
pub mod source;

pub use error::{ParseError, Result};
pub use network::RoadNetwork;
pub use parser::{DocumentParser, ParseOptions, ROOT_TAG};
pub use road::{NO_JUNCTION, Road, UNKNOWN_ROAD_ID};
pub use source::SourceNode;
