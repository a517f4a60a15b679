// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of an OpenDRIVE element tree into roads.
//!
//! Only the plan view is read:
//!
//! ```text
//! <OpenDRIVE>
//!   <road name=".." length=".." id=".." junction="..">
//!     <planView>
//!       <geometry s=".." x=".." y=".." hdg=".." length="..">
//!         <line/> | <arc curvature=".."/> | <spiral curvStart=".." curvEnd=".."/>
//!         | <poly3 a=".." b=".." c=".." d=".."/>
//!         | <paramPoly3 aU=".." .. dV=".." pRange="arcLength|normalized"/>
//!       </geometry>
//!     </planView>
//!   </road>
//! </OpenDRIVE>
//! ```
//!
//! # Attribute policy
//!
//! Attributes are read permissively: **a missing or unparsable numeric attribute is replaced
//! by its default (`0.0` for reals, `-1` for `id` and `junction`) without reporting an
//! error.** This silently changes authored data; enable
//! [`ParseOptions::strict_attributes`] to turn unparsable values into
//! [`ParseError::InvalidAttribute`]. Missing attributes take their defaults in both modes.
//!
//! Geometry elements whose shape is unknown (or absent) produce no segment. Degenerate shapes,
//! such as an arc of zero curvature or a normalized `paramPoly3` without a length, fail the
//! whole parse.

use core::str::FromStr;

use causeway_geometry::{Cubic, ParamPoly3, ParamRange, Placement, Poly3, Segment};
use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::road::{NO_JUNCTION, Road, UNKNOWN_ROAD_ID};
use crate::source::SourceNode;

/// Expected tag of the document root.
pub const ROOT_TAG: &str = "OpenDRIVE";

/// Options controlling how permissive the parser is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on numeric attributes that are present but cannot be parsed.
    ///
    /// Off by default, matching the permissive policy described in the [module docs](self).
    pub strict_attributes: bool,
}

/// Builds roads from an element tree.
#[derive(Clone, Debug, Default)]
pub struct DocumentParser {
    options: ParseOptions,
}

impl DocumentParser {
    /// Create a parser with the given options.
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse document text.
    ///
    /// # Errors
    ///
    /// [`ParseError::MalformedDocument`] if the text is not well-formed XML, otherwise any
    /// error from [`DocumentParser::parse_root`].
    pub fn parse_str(&self, text: &str) -> Result<Vec<Road>> {
        let document = roxmltree::Document::parse(text)?;
        self.parse_root(document.root_element())
    }

    /// Collect every `<road>` child of `root`, in document order.
    ///
    /// # Errors
    ///
    /// [`ParseError::Geometry`] for a degenerate segment, or
    /// [`ParseError::InvalidAttribute`] in strict mode.
    pub fn parse_root<N: SourceNode>(&self, root: N) -> Result<Vec<Road>> {
        if root.element_name() != ROOT_TAG {
            warn!(
                "document root is <{}>, expected <{}>; reading roads anyway",
                root.element_name(),
                ROOT_TAG
            );
        }
        root.children_named("road")
            .map(|node| self.parse_road(node))
            .collect()
    }

    fn parse_road<N: SourceNode>(&self, node: N) -> Result<Road> {
        let id = self.read(node, "id", UNKNOWN_ROAD_ID)?;
        let name = node.attr("name").unwrap_or_default().to_owned();
        let length = self.read(node, "length", 0.0)?;
        let junction = self.read(node, "junction", NO_JUNCTION)?;
        let mut road = Road::new(id, name, length, junction);

        let geometries = node
            .children_named("planView")
            .flat_map(|plan_view| plan_view.children_named("geometry"));
        for (index, geometry) in geometries.enumerate() {
            if let Some(segment) = self.parse_geometry(geometry, id, index)? {
                road.push_geometry(segment);
            }
        }

        debug!(
            "road {} '{}': {} segments",
            road.id(),
            road.name(),
            road.geometries().len()
        );
        Ok(road)
    }

    fn parse_geometry<N: SourceNode>(
        &self,
        node: N,
        road: i64,
        index: usize,
    ) -> Result<Option<Segment>> {
        let placement = Placement::new(
            self.read(node, "s", 0.0)?,
            self.read(node, "x", 0.0)?,
            self.read(node, "y", 0.0)?,
            self.read(node, "hdg", 0.0)?,
            self.read(node, "length", 0.0)?,
        );

        let Some((shape_node, shape)) = node.child_elements().find_map(|child| {
            Shape::from_tag(child.element_name()).map(|shape| (child, shape))
        }) else {
            warn!("road {road}: geometry #{index} has no known shape, skipping");
            return Ok(None);
        };

        let built = match shape {
            Shape::Line => Ok(Segment::line(placement)),
            Shape::Arc => Segment::arc(placement, self.read(shape_node, "curvature", 0.0)?),
            Shape::Spiral => Segment::spiral(
                placement,
                self.read(shape_node, "curvStart", 0.0)?,
                self.read(shape_node, "curvEnd", 0.0)?,
            ),
            Shape::Poly3 => Ok(Segment::poly3(placement, self.poly3(shape_node)?)),
            Shape::ParamPoly3 => Segment::param_poly3(placement, self.param_poly3(shape_node)?),
        };

        built
            .map(Some)
            .map_err(|source| ParseError::Geometry {
                road,
                index,
                source,
            })
    }

    fn poly3<N: SourceNode>(&self, node: N) -> Result<Poly3> {
        Ok(Poly3::new(
            self.read(node, "a", 0.0)?,
            self.read(node, "b", 0.0)?,
            self.read(node, "c", 0.0)?,
            self.read(node, "d", 0.0)?,
        ))
    }

    fn param_poly3<N: SourceNode>(&self, node: N) -> Result<ParamPoly3> {
        let u = Cubic::new(
            self.read(node, "aU", 0.0)?,
            self.read(node, "bU", 0.0)?,
            self.read(node, "cU", 0.0)?,
            self.read(node, "dU", 0.0)?,
        );
        let v = Cubic::new(
            self.read(node, "aV", 0.0)?,
            self.read(node, "bV", 0.0)?,
            self.read(node, "cV", 0.0)?,
            self.read(node, "dV", 0.0)?,
        );
        let range = match node.attr("pRange") {
            Some("normalized") => ParamRange::Normalized,
            _ => ParamRange::ArcLength,
        };
        Ok(ParamPoly3::new(u, v, range))
    }

    /// Read a numeric attribute, substituting `default` per the attribute policy.
    fn read<N: SourceNode, T: FromStr>(
        &self,
        node: N,
        attribute: &'static str,
        default: T,
    ) -> Result<T> {
        let Some(raw) = node.attr(attribute) else {
            return Ok(default);
        };
        match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) if self.options.strict_attributes => Err(ParseError::invalid_attribute(
                node.element_name(),
                attribute,
                raw,
            )),
            Err(_) => {
                warn!(
                    "unparsable {} {:?} on <{}>, using default",
                    attribute,
                    raw,
                    node.element_name()
                );
                Ok(default)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Shape {
    Line,
    Arc,
    Spiral,
    Poly3,
    ParamPoly3,
}

impl Shape {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "line" => Some(Self::Line),
            "arc" => Some(Self::Arc),
            "spiral" => Some(Self::Spiral),
            "poly3" => Some(Self::Poly3),
            "paramPoly3" => Some(Self::ParamPoly3),
            _ => None,
        }
    }
}
