//! Cell type tags for mesh cells.

/// Kinds of cells a planar diagram mesh can hold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CellType {
    /// 0D vertex.
    Vertex,
    /// 1D segment between two vertices.
    Segment,
    /// 2D polygon with `n` boundary vertices.
    Polygon(usize),
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Vertex
    }
}

impl CellType {
    /// Returns the topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellType::Vertex => 0,
            CellType::Segment => 1,
            CellType::Polygon(_) => 2,
        }
    }

    /// Number of vertices a cell of this type carries.
    pub fn vertex_count(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Segment => 2,
            CellType::Polygon(n) => n,
        }
    }
}
