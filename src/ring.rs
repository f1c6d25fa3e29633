// Copyright 2025 Lars Brubaker
// License: MIT
//
// Circular doubly-linked vertex rings.
//
// Each input polygon becomes one Ring. Nodes live in a Vec arena and link to
// each other by u32 index, so splicing is O(1) and nothing borrows across
// rings. A crossing node's counterpart is an index into the *other* ring.
//
// Design:
//   - INVALID: u32::MAX  (null link)
//   - nodes[0] is the root: the first input vertex. Crossings are only ever
//     spliced between two vertex nodes, so the root is never a crossing.
//   - Every walk terminates by comparing indices against its start, never by
//     comparing node contents. Two nodes can share coordinates.

mod contain;
mod label;

use std::fmt;

use crate::error::{ClipError, Result};
use crate::geom::{Point, Real};

pub const INVALID: u32 = u32::MAX;

/// Index into Ring::nodes
pub type NodeIdx = u32;

/// Index of the node built from the first input point.
pub const ROOT: NodeIdx = 0;

/// Which input polygon a ring was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Subject,
    Clip,
}

impl Side {
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Subject => Side::Clip,
            Side::Clip => Side::Subject,
        }
    }

    /// Position of this side's ring in a `[subject, clip]` pair.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Subject => 0,
            Side::Clip => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Subject => "subject",
            Side::Clip => "clip",
        })
    }
}

/// A node addressed across both rings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub side: Side,
    pub node: NodeIdx,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub next: NodeIdx,
    pub prev: NodeIdx,
    pub point: Point,
    /// Synthesized from a segment intersection rather than copied from the input.
    pub is_crossing: bool,
    /// Position along the originating edge, in (0, 1). Crossings only.
    pub param: Real,
    /// Walking forward, the ring enters the other polygon here. Crossings only.
    pub is_entry: bool,
    pub processed: bool,
    /// Matching crossing in the other ring (INVALID for vertices).
    pub counterpart: NodeIdx,
    /// Index of the input point this vertex was copied from (INVALID for crossings).
    /// Kept for callers that draw the rings; the clipper never reads it.
    pub source: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            next: INVALID,
            prev: INVALID,
            point: Point::default(),
            is_crossing: false,
            param: 0.0,
            is_entry: false,
            processed: false,
            counterpart: INVALID,
            source: INVALID,
        }
    }
}

/// One polygon as a traversable ring, plus any crossings spliced into it.
#[derive(Clone, Debug)]
pub struct Ring {
    pub side: Side,
    /// Only ever built by `from_points`, so there is always a root.
    pub(crate) nodes: Vec<Node>,
}

impl Ring {
    /// Build a ring with one vertex node per point, linked in input order.
    ///
    /// Fails on an empty or non-finite input; no partial ring is returned.
    pub fn from_points(side: Side, points: &[Point]) -> Result<Ring> {
        if points.is_empty() {
            return Err(ClipError::EmptyPolygon { side });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ClipError::NonFiniteCoordinate { side, index });
        }

        let mut ring = Ring {
            side,
            nodes: Vec::with_capacity(points.len()),
        };

        // root just points to itself
        ring.nodes.push(Node {
            next: ROOT,
            prev: ROOT,
            point: points[0],
            source: 0,
            ..Node::default()
        });

        for (i, &point) in points.iter().enumerate().skip(1) {
            let n = ring.alloc(Node {
                point,
                source: i as u32,
                ..Node::default()
            });
            // ...-- (prev) <--> (root) --...   becomes   ...-- (prev) <--> (n) <--> (root) --...
            ring.link_before(ROOT, n);
        }

        Ok(ring)
    }

    fn alloc(&mut self, node: Node) -> NodeIdx {
        let idx = self.nodes.len() as NodeIdx;
        self.nodes.push(node);
        idx
    }

    /// Splice the unlinked node `n` in immediately before `at`.
    fn link_before(&mut self, at: NodeIdx, n: NodeIdx) {
        let prev = self.nodes[at as usize].prev;
        self.nodes[n as usize].prev = prev;
        self.nodes[n as usize].next = at;
        self.nodes[prev as usize].next = n;
        self.nodes[at as usize].prev = n;
    }

    // ──────────────────────────── Navigation ─────────────────────────────

    /// Number of nodes, crossings included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn root(&self) -> NodeIdx {
        ROOT
    }

    #[inline]
    pub fn node(&self, n: NodeIdx) -> &Node {
        &self.nodes[n as usize]
    }

    #[inline]
    pub fn next(&self, n: NodeIdx) -> NodeIdx {
        self.nodes[n as usize].next
    }

    #[inline]
    pub fn prev(&self, n: NodeIdx) -> NodeIdx {
        self.nodes[n as usize].prev
    }

    #[inline]
    pub fn point(&self, n: NodeIdx) -> Point {
        self.nodes[n as usize].point
    }

    /// First vertex node at or after `n`.
    pub fn next_vertex(&self, mut n: NodeIdx) -> NodeIdx {
        while self.nodes[n as usize].is_crossing {
            n = self.nodes[n as usize].next;
        }
        n
    }

    /// Vertex node that closes the original edge starting at vertex `n`.
    #[inline]
    pub fn edge_end(&self, n: NodeIdx) -> NodeIdx {
        self.next_vertex(self.next(n))
    }

    /// Forward walk from the root, once around.
    pub fn iter(&self) -> RingIter<'_> {
        self.walk(ROOT)
    }

    /// Forward walk from `start`, stopping when the walk comes back to `start`.
    ///
    /// Yields at most `len()` nodes even if the links are corrupt.
    pub fn walk(&self, start: NodeIdx) -> RingIter<'_> {
        RingIter {
            ring: self,
            start,
            cur: start,
            remaining: self.nodes.len(),
        }
    }

    /// Crossing nodes in forward order from the root.
    pub fn crossings(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.iter().filter(move |&n| self.nodes[n as usize].is_crossing)
    }

    pub fn crossing_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_crossing).count()
    }

    /// The original input points, in input order.
    pub fn vertex_points(&self) -> Vec<Point> {
        self.iter()
            .map(|n| &self.nodes[n as usize])
            .filter(|node| !node.is_crossing)
            .map(|node| node.point)
            .collect()
    }

    // ──────────────────────────── Mutation ──────────────────────────────

    /// Splice a new crossing into the edge `from → to`, keeping crossings on
    /// that edge sorted by ascending `param`. Returns the new node; its
    /// counterpart is left INVALID for the caller to pair up.
    pub(crate) fn insert_crossing(
        &mut self,
        from: NodeIdx,
        to: NodeIdx,
        point: Point,
        param: Real,
    ) -> NodeIdx {
        let mut at = self.next(from);
        while at != to && self.nodes[at as usize].param < param {
            at = self.next(at);
        }

        let n = self.alloc(Node {
            point,
            is_crossing: true,
            param,
            ..Node::default()
        });
        self.link_before(at, n);
        n
    }

    // ──────────────────────────── Validation ────────────────────────────

    /// Check the ring's link structure and its counterparts in `other`.
    ///
    /// Every node must be reachable from the root exactly once, `next`/`prev`
    /// must agree, and every crossing must have a crossing counterpart that
    /// points back with the same `processed` flag.
    pub fn check_links(&self, other: &Ring) -> Result<()> {
        let broken = |node: NodeIdx| ClipError::BrokenLink {
            side: self.side,
            node,
        };
        let len = self.nodes.len();
        if len == 0 {
            return Err(broken(ROOT));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            let i = i as NodeIdx;
            if node.next as usize >= len || node.prev as usize >= len {
                return Err(broken(i));
            }
            if self.nodes[node.next as usize].prev != i || self.nodes[node.prev as usize].next != i {
                return Err(broken(i));
            }
            if node.is_crossing {
                let cp = other.nodes.get(node.counterpart as usize).ok_or_else(|| broken(i))?;
                if !cp.is_crossing || cp.counterpart != i || cp.processed != node.processed {
                    return Err(broken(i));
                }
            } else if node.counterpart != INVALID {
                return Err(broken(i));
            }
        }
        if self.nodes[ROOT as usize].is_crossing {
            return Err(broken(ROOT));
        }

        // One lap from the root must see every node.
        let mut seen = 0usize;
        let mut n = ROOT;
        loop {
            seen += 1;
            n = self.next(n);
            if n == ROOT {
                break;
            }
            if seen > len {
                return Err(broken(n));
            }
        }
        if seen != len {
            return Err(broken(ROOT));
        }
        Ok(())
    }
}

/// Iterator over a ring's node indices; see [`Ring::walk`].
pub struct RingIter<'a> {
    ring: &'a Ring,
    start: NodeIdx,
    cur: NodeIdx,
    remaining: usize,
}

impl Iterator for RingIter<'_> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        if self.remaining == 0 {
            return None;
        }
        let here = self.cur;
        self.cur = self.ring.next(here);
        self.remaining = if self.cur == self.start { 0 } else { self.remaining - 1 };
        Some(here)
    }
}
