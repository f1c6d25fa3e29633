// Copyright 2025 Lars Brubaker
// Even-odd point containment against a ring.

use super::{Ring, ROOT};
use crate::geom::Point;

impl Ring {
    /// Even-odd ray cast from `p` toward -x. Points on the boundary may go either way.
    ///
    /// Meant for the ring as built, before crossings are spliced in. Spliced
    /// crossings only subdivide edges, so the answer does not change, but the
    /// clipper still asks before insertion.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut odd = false;
        let mut here = ROOT;
        loop {
            let next = self.next(here);
            let h = self.point(here);
            let n = self.point(next);

            let straddles = (h.y < p.y && n.y >= p.y) || (h.y >= p.y && n.y < p.y);
            if straddles
                && (h.x <= p.x || n.x <= p.x)
                && h.x + (p.y - h.y) / (n.y - h.y) * (n.x - h.x) < p.x
            {
                odd = !odd;
            }

            here = next;
            if here == ROOT {
                break;
            }
        }
        odd
    }
}
