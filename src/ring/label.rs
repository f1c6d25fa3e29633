// Copyright 2025 Lars Brubaker
// Entry/exit classification of a ring's crossings.

use super::{Ring, ROOT};

impl Ring {
    /// Label crossings alternately entry/exit walking forward from the root.
    ///
    /// `start_entry` is true when the root lies outside the other polygon, so
    /// the first crossing met is an entry. Run only once every crossing of
    /// both rings has been inserted.
    pub fn label_crossings(&mut self, start_entry: bool) {
        if self.is_empty() {
            return;
        }
        let mut entry = start_entry;
        let mut here = ROOT;
        loop {
            let node = &mut self.nodes[here as usize];
            if node.is_crossing {
                node.is_entry = entry;
                entry = !entry;
            }
            here = node.next;
            if here == ROOT {
                break;
            }
        }
    }
}
