//! Regions: one polygon per seed, built from accumulated boundary points.
//!
//! A region collects boundary vertex ids in discovery order while the
//! Generator runs. [`RegionSet::build`] turns the collected list into a
//! [`PolygonCell`] exactly once; the region must be cleared before it can take
//! new points or be built again.

use crate::mesh_error::MeshError;
use crate::topology::cell::PolygonCell;
use crate::topology::ids::{SeedId, VertexId};

/// The cell of one seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    seed: SeedId,
    pending: Vec<VertexId>,
    polygon: Option<PolygonCell>,
}

impl Region {
    fn new(seed: SeedId) -> Self {
        Region {
            seed,
            pending: Vec::new(),
            polygon: None,
        }
    }

    /// The seed this region belongs to.
    #[inline]
    pub fn seed(&self) -> SeedId {
        self.seed
    }

    /// Boundary vertex ids collected so far, in discovery order.
    #[inline]
    pub fn point_ids(&self) -> &[VertexId] {
        &self.pending
    }

    /// The built polygon, if [`RegionSet::build`] has run since the last clear.
    #[inline]
    pub fn polygon(&self) -> Option<&PolygonCell> {
        self.polygon.as_ref()
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.polygon.is_some()
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.polygon = None;
    }
}

/// Arena of regions indexed by seed id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionSet {
    regions: Vec<Region>,
    built: usize,
}

impl RegionSet {
    /// Reallocates `seeds` empty regions; region `i` belongs to seed `i`.
    pub fn reset(&mut self, seeds: usize) {
        self.regions.clear();
        self.regions
            .extend((0..seeds).map(|i| Region::new(SeedId::new(i))));
        self.built = 0;
    }

    /// Clears every region in place without reallocating the arena.
    pub fn clear_all(&mut self) {
        self.regions.iter_mut().for_each(Region::clear);
        self.built = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of regions whose polygon is built.
    #[inline]
    pub fn built_count(&self) -> usize {
        self.built
    }

    #[inline]
    pub fn all_built(&self) -> bool {
        self.built == self.regions.len()
    }

    pub fn get(&self, accessor: &'static str, id: SeedId) -> Result<&Region, MeshError> {
        let len = self.regions.len();
        self.regions.get(id.index()).ok_or(MeshError::OutOfRange {
            accessor,
            id: id.index(),
            len,
        })
    }

    fn get_mut(&mut self, accessor: &'static str, id: SeedId) -> Result<&mut Region, MeshError> {
        let len = self.regions.len();
        self.regions.get_mut(id.index()).ok_or(MeshError::OutOfRange {
            accessor,
            id: id.index(),
            len,
        })
    }

    /// Empties region `id`'s point list and discards its polygon.
    pub fn clear(&mut self, id: SeedId) -> Result<(), MeshError> {
        let region = self.get_mut("clear_region", id)?;
        let was_built = region.is_built();
        region.clear();
        if was_built {
            self.built -= 1;
        }
        Ok(())
    }

    /// Appends a boundary vertex to region `id`.
    pub fn add_point_id(&mut self, id: SeedId, vertex: VertexId) -> Result<(), MeshError> {
        const OP: &str = "region_add_point_id";
        let region = self.get_mut(OP, id)?;
        if region.is_built() {
            return Err(MeshError::RegionAlreadyBuilt {
                operation: OP,
                region: id.index(),
            });
        }
        region.pending.push(vertex);
        Ok(())
    }

    /// Builds region `id`'s polygon from its collected points.
    pub fn build(&mut self, id: SeedId) -> Result<(), MeshError> {
        const OP: &str = "build_edge";
        let region = self.get_mut(OP, id)?;
        if region.is_built() {
            return Err(MeshError::RegionAlreadyBuilt {
                operation: OP,
                region: id.index(),
            });
        }
        region.polygon = Some(PolygonCell::from_point_ids(region.pending.iter().copied()));
        self.built += 1;
        Ok(())
    }

    /// The built polygon of region `id`.
    pub fn polygon(&self, accessor: &'static str, id: SeedId) -> Result<&PolygonCell, MeshError> {
        self.get(accessor, id)?
            .polygon()
            .ok_or(MeshError::RegionNotBuilt {
                accessor,
                region: id.index(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }
}
