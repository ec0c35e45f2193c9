//! Generic point/cell mesh container.
//!
//! [`Mesh`] pairs a [`PointStore`] with a cell container keyed by [`CellId`].
//! A cell's cone is the ordered list of vertices it is built on; the support of
//! a vertex is the set of cells whose cone contains it. The Voronoi diagram
//! owns one `Mesh` and registers its regions in it, so consumers written
//! against the generic container can read the diagram without knowing about
//! seeds, lines or regions.

use super::cell::Cell;
use super::ids::{CellId, VertexId};
use crate::data::coordinates::PointStore;
use crate::geometry::point::Point2;
use crate::mesh_error::MeshError;
use hashbrown::HashMap;
use std::collections::BTreeMap;

/// Point storage plus an ordered, id-keyed cell container.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<T> {
    points: PointStore<T>,
    cells: BTreeMap<CellId, Cell>,
}

impl<T: Copy> Default for Mesh<T> {
    fn default() -> Self {
        Mesh {
            points: PointStore::new(),
            cells: BTreeMap::new(),
        }
    }
}

impl<T: Copy> Mesh<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for `points` vertices.
    pub fn with_capacity(points: usize) -> Self {
        Mesh {
            points: PointStore::with_capacity(points),
            cells: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn points(&self) -> &PointStore<T> {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut PointStore<T> {
        &mut self.points
    }

    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Bounds-checked point read.
    #[inline]
    pub fn point(&self, id: VertexId) -> Result<Point2<T>, MeshError> {
        self.points.try_get(id)
    }

    /// Inserts or replaces the cell at `id`, returning the previous one.
    pub fn set_cell(&mut self, id: CellId, cell: Cell) -> Option<Cell> {
        self.cells.insert(id, cell)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Like [`cell`](Self::cell) but reports a missing id as an error.
    pub fn try_cell(&self, id: CellId) -> Result<&Cell, MeshError> {
        self.cells.get(&id).ok_or(MeshError::OutOfRange {
            accessor: "mesh_cell",
            id: id.index(),
            len: self.cells.len(),
        })
    }

    #[inline]
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cells in ascending id order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells.iter().map(|(id, c)| (*id, c))
    }

    pub fn clear_cells(&mut self) {
        self.cells.clear();
    }

    /// Vertex ids the cell is built on, in boundary order.
    pub fn cone(&self, id: CellId) -> Result<&[VertexId], MeshError> {
        self.try_cell(id).map(Cell::point_ids)
    }

    /// Coordinates of a cell's vertices in boundary order.
    pub fn cell_points(&self, id: CellId) -> Result<Vec<Point2<T>>, MeshError> {
        self.cone(id)?
            .iter()
            .map(|v| self.points.try_get(*v))
            .collect()
    }

    /// Cells whose cone contains `vertex`, in ascending id order.
    pub fn support(&self, vertex: VertexId) -> Vec<CellId> {
        self.cells
            .iter()
            .filter(|(_, c)| c.point_ids().contains(&vertex))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Point-to-cell links for every vertex that some cell uses.
    ///
    /// A vertex listed twice in one cone links to that cell once.
    pub fn point_cell_links(&self) -> HashMap<VertexId, Vec<CellId>> {
        let mut links: HashMap<VertexId, Vec<CellId>> = HashMap::new();
        for (id, cell) in &self.cells {
            for v in cell.point_ids() {
                let entry = links.entry(*v).or_default();
                if entry.last() != Some(id) {
                    entry.push(*id);
                }
            }
        }
        links
    }
}
