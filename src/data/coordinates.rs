//! Vertex coordinate storage.
//!
//! `PointStore` is an append-only sequence of planar coordinates. The id of a
//! vertex is its insertion position; ids are dense and 0-based, and restart at
//! 0 after [`PointStore::clear`].

use crate::geometry::point::Point2;
use crate::mesh_error::MeshError;
use crate::topology::ids::VertexId;

/// Append-only vertex coordinates keyed by [`VertexId`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PointStore<T> {
    points: Vec<Point2<T>>,
}

impl<T: Copy> PointStore<T> {
    pub fn new() -> Self {
        PointStore { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PointStore {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends `p` and returns its id, the pre-insertion length.
    #[inline]
    pub fn push(&mut self, p: Point2<T>) -> VertexId {
        let id = VertexId::new(self.points.len());
        self.points.push(p);
        id
    }

    /// Bounds-checked read of vertex `id`.
    #[inline]
    pub fn try_get(&self, id: VertexId) -> Result<Point2<T>, MeshError> {
        self.points
            .get(id.index())
            .copied()
            .ok_or(MeshError::OutOfRange {
                accessor: "get_vertex",
                id: id.index(),
                len: self.points.len(),
            })
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.points.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Truncates to empty; the next push gets id 0 again.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Coordinates in id order.
    #[inline]
    pub fn as_slice(&self) -> &[Point2<T>] {
        &self.points
    }

    /// `(id, coordinate)` pairs in id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId, Point2<T>)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (VertexId::new(i), *p))
    }
}
