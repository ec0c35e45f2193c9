//! Cell handles stored in the generic mesh container.
//!
//! The set of cell kinds in a planar diagram is closed: regions are polygons
//! and edges are line segments. [`Cell`] is therefore a plain enum tagged by
//! [`CellType`] rather than an open trait object.

use super::cell_type::CellType;
use super::ids::VertexId;
use itertools::Itertools;

/// A straight segment between two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LineCell {
    points: [VertexId; 2],
}

impl LineCell {
    #[inline]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        LineCell { points: [a, b] }
    }

    #[inline]
    pub fn points(&self) -> [VertexId; 2] {
        self.points
    }

    /// True if both ends are the same vertex.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points[0] == self.points[1]
    }
}

/// A polygon given by an ordered list of boundary vertices and the edges
/// built from it.
///
/// Points are accumulated with [`add_point_id`](Self::add_point_id) and turned
/// into boundary edges by [`build_edges`](Self::build_edges). With three or
/// more points the edges form a closed cycle; two points give a single open
/// segment, fewer give no edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolygonCell {
    point_ids: Vec<VertexId>,
    edges: Vec<LineCell>,
}

impl PolygonCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polygon from an ordered point list, edges included.
    pub fn from_point_ids<I: IntoIterator<Item = VertexId>>(ids: I) -> Self {
        let mut cell = PolygonCell {
            point_ids: ids.into_iter().collect(),
            edges: Vec::new(),
        };
        cell.build_edges();
        cell
    }

    pub fn add_point_id(&mut self, id: VertexId) {
        self.point_ids.push(id);
    }

    /// Drops points and edges.
    pub fn clear_points(&mut self) {
        self.point_ids.clear();
        self.edges.clear();
    }

    /// Rebuilds the boundary edges from the current point list.
    pub fn build_edges(&mut self) {
        self.edges.clear();
        match self.point_ids.len() {
            0 | 1 => {}
            2 => self
                .edges
                .push(LineCell::new(self.point_ids[0], self.point_ids[1])),
            _ => self.edges.extend(
                self.point_ids
                    .iter()
                    .circular_tuple_windows()
                    .map(|(a, b)| LineCell::new(*a, *b)),
            ),
        }
    }

    #[inline]
    pub fn point_ids(&self) -> &[VertexId] {
        &self.point_ids
    }

    #[inline]
    pub fn edges(&self) -> &[LineCell] {
        &self.edges
    }

    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.point_ids.len()
    }

    /// True when the edges walk the point list and return to its start.
    pub fn is_closed(&self) -> bool {
        let n = self.point_ids.len();
        if n < 3 || self.edges.len() != n {
            return false;
        }
        self.edges
            .iter()
            .circular_tuple_windows()
            .all(|(e, next)| e.points[1] == next.points[0])
            && self.edges[0].points[0] == self.point_ids[0]
    }
}

/// Tagged cell handle handed out to generic-mesh consumers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Polygon(PolygonCell),
    Line(LineCell),
}

impl Cell {
    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Polygon(p) => CellType::Polygon(p.number_of_points()),
            Cell::Line(_) => CellType::Segment,
        }
    }

    /// Vertex ids of the cell in boundary order.
    pub fn point_ids(&self) -> &[VertexId] {
        match self {
            Cell::Polygon(p) => p.point_ids(),
            Cell::Line(l) => &l.points,
        }
    }

    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.point_ids().len()
    }

    pub fn as_polygon(&self) -> Option<&PolygonCell> {
        match self {
            Cell::Polygon(p) => Some(p),
            Cell::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineCell> {
        match self {
            Cell::Line(l) => Some(l),
            Cell::Polygon(_) => None,
        }
    }
}

impl From<PolygonCell> for Cell {
    fn from(p: PolygonCell) -> Self {
        Cell::Polygon(p)
    }
}

impl From<LineCell> for Cell {
    fn from(l: LineCell) -> Self {
        Cell::Line(l)
    }
}
