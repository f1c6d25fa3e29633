// Copyright 2025 Lars Brubaker
// Result tracing: walk the labelled rings, switching at each crossing.

use log::trace;

use crate::error::{ClipError, Result};
use crate::geom::Polygon;
use crate::ring::{NodeIdx, NodeRef, Ring, Side};

pub(crate) struct Tracer<'a> {
    rings: &'a mut [Ring; 2],
    /// Per active side: the `is_entry` value that means "walk forward".
    into: [bool; 2],
    limit: usize,
    steps: usize,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(rings: &'a mut [Ring; 2], into_subject: bool, into_clip: bool, limit: usize) -> Self {
        // Walking the subject ring we keep to the clip's interior as asked by
        // `into_clip`, and the other way round.
        let mut into = [false; 2];
        into[Side::Subject.index()] = into_clip;
        into[Side::Clip.index()] = into_subject;
        Tracer {
            rings,
            into,
            limit,
            steps: 0,
        }
    }

    /// Trace every contour. Empty when the rings share no crossings.
    pub(crate) fn run(mut self) -> Result<Vec<Polygon>> {
        let mut contours = Vec::new();
        while let Some(start) = self.next_unprocessed() {
            let contour = self.trace_contour(start)?;
            trace!("traced contour of {} points", contour.len());
            contours.push(contour);
        }
        Ok(contours)
    }

    #[inline]
    fn ring(&self, side: Side) -> &Ring {
        &self.rings[side.index()]
    }

    /// First unprocessed crossing of the subject ring, scanning from its root.
    fn next_unprocessed(&self) -> Option<NodeIdx> {
        let ring = self.ring(Side::Subject);
        ring.iter().find(|&n| {
            let node = ring.node(n);
            node.is_crossing && !node.processed
        })
    }

    /// Flag a crossing and its counterpart as consumed, together.
    fn mark_processed(&mut self, at: NodeRef) {
        let ring = &mut self.rings[at.side.index()];
        ring.nodes[at.node as usize].processed = true;
        let cp = ring.nodes[at.node as usize].counterpart;
        self.rings[at.side.other().index()].nodes[cp as usize].processed = true;
    }

    fn step(&mut self) -> Result<()> {
        self.steps += 1;
        if self.steps > self.limit {
            return Err(ClipError::StepLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    /// Trace one output contour starting at the subject crossing `start`.
    ///
    /// Each leg emits the crossing it leaves from plus every vertex up to the
    /// next crossing, then hops to that crossing's counterpart. The contour is
    /// closed once the hop lands on a crossing already consumed.
    fn trace_contour(&mut self, start: NodeIdx) -> Result<Polygon> {
        let mut points = Vec::new();
        let mut here = NodeRef {
            side: Side::Subject,
            node: start,
        };

        while !self.ring(here.side).node(here.node).processed {
            self.mark_processed(here);

            let forward = self.ring(here.side).node(here.node).is_entry == self.into[here.side.index()];
            loop {
                let ring = self.ring(here.side);
                points.push(ring.point(here.node));
                here.node = if forward {
                    ring.next(here.node)
                } else {
                    ring.prev(here.node)
                };
                let reached_crossing = ring.node(here.node).is_crossing;
                self.step()?;
                if reached_crossing {
                    break;
                }
            }

            // switch rings at the crossing
            let cp = self.ring(here.side).node(here.node).counterpart;
            here = NodeRef {
                side: here.side.other(),
                node: cp,
            };
        }

        Ok(Polygon::new(points))
    }
}
