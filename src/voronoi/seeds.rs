//! Seed table: the fixed, ordered input points of one build cycle.

use crate::geometry::point::Point2;
use crate::mesh_error::MeshError;
use crate::topology::ids::SeedId;

/// Ordered seed coordinates; seed `i` owns region `i`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SeedTable<T> {
    seeds: Vec<Point2<T>>,
}

impl<T: Copy> SeedTable<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        SeedTable {
            seeds: Vec::with_capacity(capacity),
        }
    }

    /// Replaces the table with a copy of `seeds`.
    pub fn set(&mut self, seeds: &[Point2<T>]) -> Result<(), MeshError> {
        if seeds.is_empty() {
            return Err(MeshError::NoSeeds);
        }
        self.seeds.clear();
        self.seeds.extend_from_slice(seeds);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: SeedId) -> bool {
        id.index() < self.seeds.len()
    }

    /// Bounds-checked seed read.
    pub fn get(&self, id: SeedId) -> Result<Point2<T>, MeshError> {
        self.seeds
            .get(id.index())
            .copied()
            .ok_or(MeshError::OutOfRange {
                accessor: "get_seed",
                id: id.index(),
                len: self.seeds.len(),
            })
    }

    /// Checks that `id` names an existing seed, for use by `accessor`.
    pub(crate) fn check(&self, accessor: &'static str, id: SeedId) -> Result<(), MeshError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(MeshError::OutOfRange {
                accessor,
                id: id.index(),
                len: self.seeds.len(),
            })
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2<T>] {
        &self.seeds
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (SeedId, Point2<T>)> + '_ {
        self.seeds
            .iter()
            .enumerate()
            .map(|(i, p)| (SeedId::new(i), *p))
    }
}
