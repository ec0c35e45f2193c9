//! Clipped Voronoi edges in insertion order.

use super::lines::SeedPair;
use crate::mesh_error::MeshError;
use crate::topology::cell::LineCell;
use crate::topology::ids::{EdgeId, LineId, SeedId, VertexId};

/// One clipped segment of a bisector line.
///
/// `left`/`right` are the segment's end vertices; `left_seed`/`right_seed`
/// are the two seeds whose regions it separates; `line` is the bisector it
/// was cut from. Several edges may share one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct VoronoiEdge {
    pub left: VertexId,
    pub right: VertexId,
    pub left_seed: SeedId,
    pub right_seed: SeedId,
    pub line: LineId,
}

impl VoronoiEdge {
    pub fn new(
        left: VertexId,
        right: VertexId,
        left_seed: SeedId,
        right_seed: SeedId,
        line: LineId,
    ) -> Self {
        VoronoiEdge {
            left,
            right,
            left_seed,
            right_seed,
            line,
        }
    }

    /// The (left, right) seeds this edge separates.
    #[inline]
    pub fn seeds(&self) -> SeedPair {
        SeedPair(self.left_seed, self.right_seed)
    }

    /// The (left, right) end vertices.
    #[inline]
    pub fn ends(&self) -> (VertexId, VertexId) {
        (self.left, self.right)
    }

    /// The edge as a generic segment cell.
    #[inline]
    pub fn to_line_cell(&self) -> LineCell {
        LineCell::new(self.left, self.right)
    }
}

/// Append-only list of edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<VoronoiEdge>,
}

impl EdgeList {
    /// Appends an edge and returns its id, the pre-insertion length.
    #[inline]
    pub fn push(&mut self, edge: VoronoiEdge) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        id
    }

    pub fn get(&self, id: EdgeId) -> Result<&VoronoiEdge, MeshError> {
        self.edges.get(id.index()).ok_or(MeshError::OutOfRange {
            accessor: "get_edge",
            id: id.index(),
            len: self.edges.len(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[VoronoiEdge] {
        &self.edges
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (EdgeId, &VoronoiEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    /// Edges cut from `line`, in insertion order.
    pub fn fragments_of(&self, line: LineId) -> impl Iterator<Item = (EdgeId, &VoronoiEdge)> + '_ {
        self.iter().filter(move |(_, e)| e.line == line)
    }
}
