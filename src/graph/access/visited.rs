//! Per-call visited flags for graph traversals.
//!
//! Searches never mark vertices inside the graph itself. Each call allocates one
//! of these over the graph's slot range, so repeated or interleaved searches on
//! the same graph cannot observe each other's state.

/// A dense flag vector indexed by vertex slot.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, slot: usize) -> bool {
        self.flags[slot]
    }

    /// Returns `true` iff `slot` was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, slot: usize) -> bool {
        !core::mem::replace(&mut self.flags[slot], true)
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, slot: usize) {
        self.flags[slot] = true;
    }

    #[inline(always)]
    pub(crate) fn unmark(&mut self, slot: usize) {
        self.flags[slot] = false;
    }

    /// Slots currently marked, in ascending order.
    #[cfg(test)]
    pub(crate) fn marked(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(slot, &set)| set.then_some(slot))
    }
}
