// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error type shared by every stage of the clipping pipeline.

use thiserror::Error;

use crate::ring::{NodeIdx, Side};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClipError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// A ring cannot be built from zero points.
    #[error("{side} polygon has no points")]
    EmptyPolygon { side: Side },

    /// NaN or infinite coordinate in the input.
    #[error("{side} polygon point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { side: Side, index: usize },

    /// Entry/exit labels can only alternate around a ring with an even number of crossings.
    #[error("{side} ring has {count} crossings; entry/exit labels cannot pair up")]
    UnpairedCrossings { side: Side, count: usize },

    /// The tracer walked more nodes than the configured cap.
    #[error("traversal exceeded {limit} steps")]
    StepLimitExceeded { limit: usize },

    /// Crossings were inserted but tracing closed no contour.
    #[error("{crossings} crossings found but no contour closed")]
    NoContourClosed { crossings: usize },

    /// Structural validation found a half-linked node or a one-sided counterpart.
    #[error("{side} ring is corrupt at node {node}")]
    BrokenLink { side: Side, node: NodeIdx },
}
