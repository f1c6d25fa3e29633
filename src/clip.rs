// Copyright 2025 Lars Brubaker
// License: MIT
//
// Weiler–Atherton clipping of one simple polygon against another.
//
// Pipeline (strictly forward):
//   1. build a ring per polygon
//   2. containment of each ring's root in the other polygon
//   3. insert every proper crossing into both rings, paired as counterparts
//   4. label each ring's crossings entry/exit
//   5. trace output contours, switching rings at every crossing; with no
//      crossings at all, fall back to whole-polygon containment
//
// Only steps 3-5 mutate the rings. The output copies points by value.

mod trace;


use log::{debug, trace};

use crate::error::{ClipError, Result};
use crate::geom::{segment_intersect, Point, Polygon, Real};
use crate::ring::{Ring, Side, ROOT};

use self::trace::Tracer;

// ─────────────────────────────── Public types ──────────────────────────────────

/// The four boolean operations the containment flags can select.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BooleanOp {
    /// Area inside both polygons.
    Intersection,
    /// Area inside either polygon.
    Union,
    /// Subject minus clip.
    Difference,
    /// Clip minus subject.
    ReverseDifference,
}

impl BooleanOp {
    /// `(into_subject, into_clip)` flags for [`Clipper::clip`].
    pub fn flags(self) -> (bool, bool) {
        match self {
            BooleanOp::Intersection => (true, true),
            BooleanOp::Union => (false, false),
            BooleanOp::Difference => (true, false),
            BooleanOp::ReverseDifference => (false, true),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClipOption {
    /// Check ring structure after insertion and after tracing.
    ValidateLinks,
    /// Return traced contours with fewer than three points instead of dropping them.
    KeepDegenerate,
}

/// Output of a clip: the contours plus both rings for inspection.
#[derive(Clone, Debug)]
pub struct ClipResult {
    pub contours: Vec<Polygon>,
    /// Subject ring after crossing insertion, labelling and tracing.
    pub subject: Ring,
    /// Clip ring after crossing insertion, labelling and tracing.
    pub clip: Ring,
}

impl ClipResult {
    /// All contours concatenated into one point sequence.
    ///
    /// Contour boundaries are lost; use `contours` to keep them apart.
    pub fn points(&self) -> Vec<Point> {
        self.contours
            .iter()
            .flat_map(|c| c.points.iter().copied())
            .collect()
    }

    pub fn polygon(&self) -> Polygon {
        Polygon::new(self.points())
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Summed absolute area of every contour.
    ///
    /// Hole loops count as positive area too: a difference that punches a
    /// nested hole returns `[outer, hole]`, and this reports outer + hole.
    pub fn area(&self) -> Real {
        self.contours.iter().map(Polygon::area).sum()
    }
}

// ─────────────────────────── Clipper ──────────────────────────────────────

/// Clip settings. Holds no per-clip state; one value can serve many clips.
#[derive(Clone, Debug, Default)]
pub struct Clipper {
    validate_links: bool,
    keep_degenerate: bool,
    step_limit: Option<usize>,
}

impl Clipper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, option: ClipOption, value: bool) {
        match option {
            ClipOption::ValidateLinks => self.validate_links = value,
            ClipOption::KeepDegenerate => self.keep_degenerate = value,
        }
    }

    /// Cap on tracer steps. `None` derives the cap from the ring sizes.
    pub fn set_step_limit(&mut self, limit: Option<usize>) {
        self.step_limit = limit;
    }

    /// Run the boolean operation selected by `op`.
    pub fn boolean(&self, subject: &Polygon, clip: &Polygon, op: BooleanOp) -> Result<ClipResult> {
        let (into_subject, into_clip) = op.flags();
        self.clip(subject, clip, into_subject, into_clip)
    }

    /// Clip `subject` against `clip`.
    ///
    /// `into_subject` and `into_clip` pick the operation; see [`BooleanOp::flags`].
    pub fn clip(
        &self,
        subject: &Polygon,
        clip: &Polygon,
        into_subject: bool,
        into_clip: bool,
    ) -> Result<ClipResult> {
        let mut rings = [
            Ring::from_points(Side::Subject, &subject.points)?,
            Ring::from_points(Side::Clip, &clip.points)?,
        ];

        // Ask before any crossing exists.
        let subject_in_clip = rings[1].contains(rings[0].point(ROOT));
        let clip_in_subject = rings[0].contains(rings[1].point(ROOT));
        debug!(
            "clip: subject {} pts, clip {} pts, subject root inside clip: {}, clip root inside subject: {}",
            subject.len(),
            clip.len(),
            subject_in_clip,
            clip_in_subject
        );

        let crossings = insert_crossings(&mut rings);
        debug!("clip: {} crossings inserted", crossings);

        if self.validate_links {
            self.check(&rings)?;
        }
        for ring in &rings {
            let count = ring.crossing_count();
            if count % 2 != 0 {
                return Err(ClipError::UnpairedCrossings {
                    side: ring.side,
                    count,
                });
            }
        }

        rings[0].label_crossings(!subject_in_clip);
        rings[1].label_crossings(!clip_in_subject);

        let limit = self
            .step_limit
            .unwrap_or_else(|| default_step_limit(&rings));
        let traced = Tracer::new(&mut rings, into_subject, into_clip, limit).run()?;
        let mut contours = self.settle(traced, crossings)?;

        if crossings == 0 {
            // Disjoint, identical or nested: the answer is made of whole inputs.
            if subject_in_clip == into_clip {
                contours.push(subject.clone());
            }
            if clip_in_subject == into_subject {
                contours.push(clip.clone());
            }
            debug!("clip: no crossings, {} whole polygons kept", contours.len());
        } else {
            debug!("clip: traced {} contours", contours.len());
        }

        if self.validate_links {
            self.check(&rings)?;
        }

        let [subject, clip] = rings;
        Ok(ClipResult {
            contours,
            subject,
            clip,
        })
    }

    /// Drop contours too short to enclose area, unless asked to keep them,
    /// and fail when crossings were found but nothing is left.
    fn settle(&self, mut contours: Vec<Polygon>, crossings: usize) -> Result<Vec<Polygon>> {
        if !self.keep_degenerate {
            let before = contours.len();
            contours.retain(|c| c.len() >= 3);
            if contours.len() != before {
                debug!("clip: dropped {} degenerate contours", before - contours.len());
            }
        }

        if crossings > 0 && contours.is_empty() {
            return Err(ClipError::NoContourClosed { crossings });
        }
        Ok(contours)
    }

    fn check(&self, rings: &[Ring; 2]) -> Result<()> {
        rings[0].check_links(&rings[1])?;
        rings[1].check_links(&rings[0])
    }
}

/// Clip with default options.
pub fn clip(subject: &Polygon, clip: &Polygon, into_subject: bool, into_clip: bool) -> Result<ClipResult> {
    Clipper::new().clip(subject, clip, into_subject, into_clip)
}

/// Run `op` with default options.
pub fn boolean(subject: &Polygon, clip: &Polygon, op: BooleanOp) -> Result<ClipResult> {
    Clipper::new().boolean(subject, clip, op)
}

// ─────────────────────── Crossing insertion ───────────────────────────────

/// A valid trace visits each node at most once; the slack covers tiny rings.
fn default_step_limit(rings: &[Ring; 2]) -> usize {
    4 * (rings[0].len() + rings[1].len()) + 16
}

/// Insert every proper crossing between original edges of the two rings.
///
/// Edges are walked vertex to vertex, skipping crossings already spliced in,
/// so each pair of original edges is tested exactly once. Returns the number
/// of crossing pairs created.
pub(crate) fn insert_crossings(rings: &mut [Ring; 2]) -> usize {
    let [subject, clip] = rings;
    let mut count = 0;

    let mut here_one = ROOT;
    loop {
        let next_one = subject.edge_end(here_one);

        let mut here_two = ROOT;
        loop {
            let next_two = clip.edge_end(here_two);

            let hit = segment_intersect(
                subject.point(here_one),
                subject.point(next_one),
                clip.point(here_two),
                clip.point(next_two),
            );
            if hit.is_proper() {
                let a = subject.insert_crossing(here_one, next_one, hit.point, hit.along_a);
                let b = clip.insert_crossing(here_two, next_two, hit.point, hit.along_b);
                subject.nodes[a as usize].counterpart = b;
                clip.nodes[b as usize].counterpart = a;
                trace!(
                    "crossing at ({}, {}): subject edge {}->{} t={}, clip edge {}->{} t={}",
                    hit.point.x,
                    hit.point.y,
                    here_one,
                    next_one,
                    hit.along_a,
                    here_two,
                    next_two,
                    hit.along_b
                );
                count += 1;
            }

            here_two = next_two;
            if here_two == ROOT {
                break;
            }
        }

        here_one = next_one;
        if here_one == ROOT {
            break;
        }
    }

    count
}
