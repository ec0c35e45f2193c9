//! Bisector lines: unordered seed pairs in insertion order.

use crate::mesh_error::MeshError;
use crate::topology::ids::{LineId, SeedId};

/// Two seed ids whose regions are separated by a bisector.
///
/// The pair is stored in the order given but compared as unordered by
/// [`same_seeds`](Self::same_seeds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SeedPair(pub SeedId, pub SeedId);

impl SeedPair {
    #[inline]
    pub fn new(a: SeedId, b: SeedId) -> Self {
        SeedPair(a, b)
    }

    /// True if both pairs name the same two seeds in either order.
    #[inline]
    pub fn same_seeds(&self, other: &SeedPair) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }

    #[inline]
    pub fn contains(&self, seed: SeedId) -> bool {
        self.0 == seed || self.1 == seed
    }

    /// The seed across the bisector from `seed`, if `seed` is in the pair.
    pub fn other(&self, seed: SeedId) -> Option<SeedId> {
        if self.0 == seed {
            Some(self.1)
        } else if self.1 == seed {
            Some(self.0)
        } else {
            None
        }
    }

    /// Fails if both ids are the same seed.
    pub(crate) fn check_distinct(&self, accessor: &'static str) -> Result<(), MeshError> {
        if self.0 == self.1 {
            return Err(MeshError::DegenerateSeedPair {
                accessor,
                seed: self.0.index(),
            });
        }
        Ok(())
    }
}

impl From<(SeedId, SeedId)> for SeedPair {
    fn from((a, b): (SeedId, SeedId)) -> Self {
        SeedPair(a, b)
    }
}

/// Append-only list of bisector lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineList {
    lines: Vec<SeedPair>,
}

impl LineList {
    /// Appends a line and returns its id, the pre-insertion length.
    #[inline]
    pub fn push(&mut self, pair: SeedPair) -> LineId {
        let id = LineId::new(self.lines.len());
        self.lines.push(pair);
        id
    }

    pub fn get(&self, id: LineId) -> Result<SeedPair, MeshError> {
        self.lines
            .get(id.index())
            .copied()
            .ok_or(MeshError::OutOfRange {
                accessor: "get_line",
                id: id.index(),
                len: self.lines.len(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (LineId, SeedPair)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, p)| (LineId::new(i), *p))
    }
}
