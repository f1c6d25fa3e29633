// polyclip-rust: Weiler–Atherton polygon clipping
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod clip;
pub mod error;
pub mod geom;
pub mod ring;

pub use clip::{boolean, clip, BooleanOp, ClipOption, ClipResult, Clipper};
pub use error::{ClipError, Result};
pub use geom::{segment_intersect, Intersection, Point, Polygon, Real};
pub use ring::{Node, NodeIdx, NodeRef, Ring, Side};
