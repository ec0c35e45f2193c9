//! Seed adjacency derived from neighboring seed pairs.
//!
//! Adding a pair `(a, b)` appends `b` to the list of `a` and `a` to the list
//! of `b` in one step, so the graph is symmetric by construction. Pairs are
//! not deduplicated; adding the same pair twice lists each seed twice.

use super::lines::SeedPair;
use crate::topology::ids::SeedId;

/// Per-seed neighbor lists, one list per seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborGraph {
    lists: Vec<Vec<SeedId>>,
}

impl NeighborGraph {
    /// Resizes to `seeds` empty lists.
    pub fn reset(&mut self, seeds: usize) {
        self.lists.clear();
        self.lists.resize_with(seeds, Vec::new);
    }

    /// Empties every list, keeping their allocations.
    pub fn clear(&mut self) {
        self.lists.iter_mut().for_each(Vec::clear);
    }

    /// Records `a` and `b` as neighbors of each other.
    ///
    /// Both ids must be valid seeds; the diagram checks this before calling.
    pub(crate) fn add(&mut self, pair: SeedPair) {
        let SeedPair(a, b) = pair;
        self.lists[a.index()].push(b);
        self.lists[b.index()].push(a);
    }

    /// Neighbors of `seed` in insertion order, or `None` for an unknown seed.
    #[inline]
    pub fn neighbors(&self, seed: SeedId) -> Option<&[SeedId]> {
        self.lists.get(seed.index()).map(Vec::as_slice)
    }

    #[inline]
    pub fn degree(&self, seed: SeedId) -> usize {
        self.neighbors(seed).map_or(0, <[SeedId]>::len)
    }

    pub fn contains(&self, a: SeedId, b: SeedId) -> bool {
        self.neighbors(a).is_some_and(|n| n.contains(&b))
    }

    /// Number of seeds tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// True if no seed has any neighbor yet.
    pub fn has_no_pairs(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (SeedId, &[SeedId])> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(i, l)| (SeedId::new(i), l.as_slice()))
    }
}
