// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for road network parsing and loading.

use causeway_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while building a [`RoadNetwork`](crate::RoadNetwork).
///
/// Every variant aborts the whole parse; the network keeps its previous content.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not well-formed XML.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// A geometry element describes a degenerate segment.
    #[error("road {road}: geometry #{index} cannot be built")]
    Geometry {
        /// Id of the road owning the geometry (`-1` if the road has no id).
        road: i64,
        /// Position of the `<geometry>` element within the road's plan view.
        index: usize,
        /// Why construction failed.
        source: GeometryError,
    },

    /// A numeric attribute could not be parsed. Only reported in strict mode.
    #[error("invalid value {value:?} for attribute `{attribute}` on <{element}>")]
    InvalidAttribute {
        /// Tag name of the element carrying the attribute.
        element: String,
        /// Attribute name.
        attribute: &'static str,
        /// Raw attribute text.
        value: String,
    },

    /// The source file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn invalid_attribute(
        element: impl Into<String>,
        attribute: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute,
            value: value.into(),
        }
    }
}

/// Result type for road network operations.
pub type Result<T> = core::result::Result<T, ParseError>;
