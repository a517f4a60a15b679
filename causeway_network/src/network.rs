// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The road network container and its rebuild lifecycle.

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::parser::{DocumentParser, ParseOptions};
use crate::road::Road;
use crate::source::SourceNode;

/// An ordered collection of roads built from one document.
///
/// The content is replaced wholesale by each successful parse and is otherwise immutable, so a
/// shared `&RoadNetwork` may be read from many threads. Parsing needs `&mut self`.
///
/// A failed parse leaves the previous content untouched: roads are built aside and only
/// swapped in once the whole document has been read.
#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    roads: Vec<Road>,
    parser: DocumentParser,
}

impl RoadNetwork {
    /// Create an empty network with default (permissive) parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network that parses with `options`.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            roads: Vec::new(),
            parser: DocumentParser::new(options),
        }
    }

    /// Drop every road and its segments. Safe to call on an empty network.
    pub fn reset(&mut self) {
        self.roads.clear();
    }

    /// Replace the content with the roads of an OpenDRIVE document.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`](crate::ParseError) from the parser; the network is then unchanged.
    pub fn parse(&mut self, text: &str) -> Result<()> {
        let roads = self.parser.parse_str(text)?;
        self.replace(roads);
        Ok(())
    }

    /// Replace the content with the roads under an already parsed element tree.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`](crate::ParseError) from the parser; the network is then unchanged.
    pub fn parse_root<N: SourceNode>(&mut self, root: N) -> Result<()> {
        let roads = self.parser.parse_root(root)?;
        self.replace(roads);
        Ok(())
    }

    /// Read an OpenDRIVE file and replace the content with its roads.
    ///
    /// # Errors
    ///
    /// [`ParseError::Io`](crate::ParseError::Io) if the file cannot be read, otherwise as
    /// [`RoadNetwork::parse`]. The network is unchanged on error.
    pub fn set_source(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("loading road network from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }

    fn replace(&mut self, roads: Vec<Road>) {
        self.reset();
        self.roads = roads;
        info!(
            "road network loaded: {} roads, {} segments",
            self.roads.len(),
            self.segment_count()
        );
    }

    /// Roads in document order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// First road in document order with the given id.
    ///
    /// Ids are not checked for uniqueness; later duplicates are unreachable through this lookup.
    pub fn road_by_id(&self, id: i64) -> Option<&Road> {
        self.roads.iter().find(|road| road.id() == id)
    }

    /// Total number of segments across all roads.
    pub fn segment_count(&self) -> usize {
        self.roads.iter().map(|road| road.geometries().len()).sum()
    }

    /// Options used when parsing.
    pub fn options(&self) -> &ParseOptions {
        self.parser.options()
    }
}
