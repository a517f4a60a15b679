// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while constructing segments.

use thiserror::Error;

/// Errors that can occur when constructing a [`Segment`](crate::Segment).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// The parameters cannot describe a finite curve.
    #[error("degenerate {kind} geometry: {reason}")]
    DegenerateGeometry {
        /// Name of the segment variant that failed.
        kind: &'static str,
        /// What made the parameters unusable.
        reason: &'static str,
    },
}

impl GeometryError {
    pub(crate) const fn degenerate(kind: &'static str, reason: &'static str) -> Self {
        Self::DegenerateGeometry { kind, reason }
    }
}

/// Result type for segment construction.
pub type Result<T> = core::result::Result<T, GeometryError>;
