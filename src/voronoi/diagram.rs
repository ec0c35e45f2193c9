//! The 2-D Voronoi diagram mesh.
//!
//! [`Diagram`] owns the seed table, the clip window, the vertex store (inside
//! its generic [`Mesh`]), the line and edge lists, the neighbor graph and the
//! region arena. An external Generator drives the mutation API; consumers read
//! the result through the query API or through the generic mesh once
//! [`Diagram::insert_cells`] has registered the regions.
//!
//! Every call is checked against the build state (see [`BuildState`]) and
//! every id a call stores must already exist, so the structure never holds a
//! forward reference.
//!
//! # Example
//! ```rust
//! use voronoi_mesh::prelude::*;
//!
//! let mut d = Diagram::<f64>::new();
//! d.set_seeds(&[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]).unwrap();
//! d.set_boundary(Point2::new(4.0, 2.0)).unwrap();
//! d.set_origin(Point2::new(-1.0, -1.0)).unwrap();
//!
//! let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (3.0, -1.0), (3.0, 1.0)];
//! for (x, y) in corners {
//!     d.add_vert(Point2::new(x, y)).unwrap();
//! }
//! let (s0, s1) = (SeedId::new(0), SeedId::new(1));
//! let line = d.add_line(SeedPair::new(s0, s1)).unwrap();
//! d.add_edge(VoronoiEdge::new(VertexId::new(1), VertexId::new(2), s0, s1, line)).unwrap();
//! d.add_cell_neighbor(SeedPair::new(s0, s1)).unwrap();
//!
//! for (seed, ring) in [(s0, [0, 1, 2, 3]), (s1, [1, 4, 5, 2])] {
//!     for v in ring {
//!         d.region_add_point_id(seed, VertexId::new(v)).unwrap();
//!     }
//!     d.build_edge(seed).unwrap();
//! }
//! d.insert_cells().unwrap();
//!
//! assert_eq!(d.neighbors(s0).unwrap(), &[s1]);
//! assert_eq!(d.mesh().number_of_cells(), 2);
//! ```

use super::edges::{EdgeList, VoronoiEdge};
use super::lines::{LineList, SeedPair};
use super::neighbors::NeighborGraph;
use super::region::{Region, RegionSet};
use super::seeds::SeedTable;
use super::state::BuildState;
use super::validation::{DiagramValidationOptions, validate_diagram};
use crate::data::coordinates::PointStore;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::metrics;
use crate::geometry::point::{Coordinate, Point2};
use crate::geometry::window::BoundingWindow;
use crate::mesh_error::MeshError;
use crate::topology::cell::Cell;
use crate::topology::ids::{CellId, EdgeId, LineId, SeedId, VertexId};
use crate::topology::mesh::Mesh;
use num_traits::Float;

/// Diagram-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Checks run by [`Diagram::insert_cells`] when `validate_on_insert` is set.
    pub validation: DiagramValidationOptions,
    /// Validate the whole diagram before registering cells.
    pub validate_on_insert: bool,
    /// Capacity hint: number of seeds the Generator is expected to use.
    pub expected_seeds: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            validation: DiagramValidationOptions::default(),
            validate_on_insert: true,
            expected_seeds: 0,
        }
    }
}

/// A planar Voronoi diagram mesh filled incrementally by a Generator.
#[derive(Clone, Debug)]
pub struct Diagram<T> {
    config: DiagramConfig,
    state: BuildState,
    seeds: SeedTable<T>,
    window: BoundingWindow<T>,
    mesh: Mesh<T>,
    lines: LineList,
    edges: EdgeList,
    neighbors: NeighborGraph,
    regions: RegionSet,
}

impl<T: Coordinate> Default for Diagram<T> {
    fn default() -> Self {
        Self::with_config(DiagramConfig::default())
    }
}

impl<T: Coordinate> Diagram<T> {
    /// Creates an empty diagram with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty diagram. Storage is presized from
    /// `config.expected_seeds`; a planar diagram has about two vertices per seed.
    pub fn with_config(config: DiagramConfig) -> Self {
        let n = config.expected_seeds;
        Diagram {
            config,
            state: BuildState::Empty,
            seeds: SeedTable::with_capacity(n),
            window: BoundingWindow::default(),
            mesh: Mesh::with_capacity(2 * n),
            lines: LineList::default(),
            edges: EdgeList::default(),
            neighbors: NeighborGraph::default(),
            regions: RegionSet::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> BuildState {
        self.state
    }

    // ------------------------------------------------------------------
    // Seeds and clip window
    // ------------------------------------------------------------------

    /// Copies `seeds`, allocates one empty region per seed and discards all
    /// prior geometry. Allowed in any state; moves to `SeedsSet`.
    pub fn set_seeds(&mut self, seeds: &[Point2<T>]) -> Result<(), MeshError> {
        self.seeds.set(seeds)?;
        let n = seeds.len();
        self.clear_geometry();
        self.neighbors.reset(n);
        self.regions.reset(n);
        self.state = BuildState::SeedsSet;
        log::debug!("set_seeds: {n} seeds, prior geometry discarded");
        Ok(())
    }

    #[inline]
    pub fn number_of_seeds(&self) -> usize {
        self.seeds.len()
    }

    /// Bounds-checked seed read.
    pub fn get_seed(&self, id: SeedId) -> Result<Point2<T>, MeshError> {
        self.seeds.get(id)
    }

    #[inline]
    pub fn seeds(&self) -> &[Point2<T>] {
        self.seeds.as_slice()
    }

    /// Sets the size of the clip window.
    pub fn set_boundary(&mut self, size: Point2<T>) -> Result<(), MeshError> {
        self.state
            .require("set_boundary", &[BuildState::SeedsSet, BuildState::Configured])?;
        self.window.set_size(size)?;
        self.state = BuildState::Configured;
        log::debug!("set_boundary: size {size:?}");
        Ok(())
    }

    /// Sets the lower-left corner of the clip window.
    pub fn set_origin(&mut self, origin: Point2<T>) -> Result<(), MeshError> {
        self.state
            .require("set_origin", &[BuildState::SeedsSet, BuildState::Configured])?;
        self.window.set_origin(origin);
        self.state = BuildState::Configured;
        log::debug!("set_origin: origin {origin:?}");
        Ok(())
    }

    #[inline]
    pub fn boundary(&self) -> &BoundingWindow<T> {
        &self.window
    }

    // ------------------------------------------------------------------
    // Vertices
    // ------------------------------------------------------------------

    /// Appends a vertex; its id is the number of vertices before the call.
    pub fn add_vert(&mut self, p: Point2<T>) -> Result<VertexId, MeshError> {
        self.check_filling("add_vert")?;
        let id = self.mesh.points_mut().push(p);
        self.mark_filled();
        Ok(id)
    }

    /// Bounds-checked vertex read.
    pub fn get_vertex(&self, id: VertexId) -> Result<Point2<T>, MeshError> {
        self.mesh.point(id)
    }

    /// Same as [`get_vertex`](Self::get_vertex).
    #[inline]
    pub fn get_point(&self, id: VertexId) -> Result<Point2<T>, MeshError> {
        self.get_vertex(id)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.number_of_points()
    }

    /// Truncates the vertex store; the next vertex gets id 0.
    ///
    /// Edges and region points that referenced the old vertices are left in
    /// place; clear them too or [`validate`](Self::validate) will report them.
    pub fn vertex_list_clear(&mut self) -> Result<(), MeshError> {
        self.check_filling("vertex_list_clear")?;
        self.mesh.points_mut().clear();
        self.mark_filled();
        Ok(())
    }

    /// `(id, coordinate)` for every vertex, in id order.
    pub fn vertices(
        &self,
    ) -> Result<impl ExactSizeIterator<Item = (VertexId, Point2<T>)> + '_, MeshError> {
        self.check_has_geometry("vertices")?;
        Ok(self.mesh.points().iter())
    }

    #[inline]
    pub fn point_store(&self) -> &PointStore<T> {
        self.mesh.points()
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Appends a bisector line between two distinct existing seeds.
    pub fn add_line(&mut self, pair: SeedPair) -> Result<LineId, MeshError> {
        const OP: &str = "add_line";
        self.check_filling(OP)?;
        self.check_seed_pair(OP, pair)?;
        let id = self.lines.push(pair);
        self.mark_filled();
        Ok(id)
    }

    pub fn get_line(&self, id: LineId) -> Result<SeedPair, MeshError> {
        self.lines.get(id)
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_list_clear(&mut self) -> Result<(), MeshError> {
        self.check_filling("line_list_clear")?;
        self.lines.clear();
        self.mark_filled();
        Ok(())
    }

    pub fn lines(&self) -> Result<impl ExactSizeIterator<Item = (LineId, SeedPair)> + '_, MeshError> {
        self.check_has_geometry("lines")?;
        Ok(self.lines.iter())
    }

    #[inline]
    pub fn line_list(&self) -> &LineList {
        &self.lines
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Appends an edge.
    ///
    /// Its vertices, seeds and line must exist, its seeds must be distinct and
    /// must be the two seeds of its line. Several edges may share a line.
    pub fn add_edge(&mut self, edge: VoronoiEdge) -> Result<EdgeId, MeshError> {
        const OP: &str = "add_edge";
        self.check_filling(OP)?;
        for v in [edge.left, edge.right] {
            self.check_vertex(OP, v)?;
        }
        let seeds = edge.seeds();
        self.check_seed_pair(OP, seeds)?;
        let line = self.lines.get(edge.line).map_err(|_| MeshError::OutOfRange {
            accessor: OP,
            id: edge.line.index(),
            len: self.lines.len(),
        })?;
        if !line.same_seeds(&seeds) {
            return Err(MeshError::EdgeLineMismatch {
                left: seeds.0.index(),
                right: seeds.1.index(),
                line: edge.line.index(),
                line_a: line.0.index(),
                line_b: line.1.index(),
            });
        }
        let id = self.edges.push(edge);
        self.mark_filled();
        Ok(id)
    }

    pub fn get_edge(&self, id: EdgeId) -> Result<&VoronoiEdge, MeshError> {
        self.edges.get(id)
    }

    /// The (left, right) vertex ids of edge `id`.
    pub fn get_edge_end(&self, id: EdgeId) -> Result<(VertexId, VertexId), MeshError> {
        self.edges.get(id).map(VoronoiEdge::ends)
    }

    pub fn get_edge_line_id(&self, id: EdgeId) -> Result<LineId, MeshError> {
        self.edges.get(id).map(|e| e.line)
    }

    /// The (left, right) seeds whose regions edge `id` separates.
    pub fn get_seeds_id_around_edge(&self, id: EdgeId) -> Result<SeedPair, MeshError> {
        self.edges.get(id).map(VoronoiEdge::seeds)
    }

    /// Coordinates of the two ends of edge `id`.
    pub fn edge_segment(&self, id: EdgeId) -> Result<(Point2<T>, Point2<T>), MeshError> {
        let (l, r) = self.get_edge_end(id)?;
        Ok((self.get_vertex(l)?, self.get_vertex(r)?))
    }

    /// Edge `id` as a generic segment cell.
    pub fn edge_cell(&self, id: EdgeId) -> Result<Cell, MeshError> {
        self.edges.get(id).map(|e| Cell::Line(e.to_line_cell()))
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_list_clear(&mut self) -> Result<(), MeshError> {
        self.check_filling("edge_list_clear")?;
        self.edges.clear();
        self.mark_filled();
        Ok(())
    }

    /// Every edge in id order.
    pub fn edges(
        &self,
    ) -> Result<impl ExactSizeIterator<Item = (EdgeId, &VoronoiEdge)> + '_, MeshError> {
        self.check_has_geometry("edges")?;
        Ok(self.edges.iter())
    }

    #[inline]
    pub fn edge_list(&self) -> &EdgeList {
        &self.edges
    }

    // ------------------------------------------------------------------
    // Neighbors
    // ------------------------------------------------------------------

    /// Records two seeds as neighbors of each other.
    ///
    /// Pairs are not deduplicated; the Generator adds each adjacent pair once.
    pub fn add_cell_neighbor(&mut self, pair: SeedPair) -> Result<(), MeshError> {
        const OP: &str = "add_cell_neighbor";
        self.check_filling(OP)?;
        self.check_seed_pair(OP, pair)?;
        self.neighbors.add(pair);
        self.mark_filled();
        Ok(())
    }

    /// Current neighbor list of `seed`, in insertion order.
    pub fn neighbors(&self, seed: SeedId) -> Result<&[SeedId], MeshError> {
        const OP: &str = "neighbor_ids";
        self.check_has_geometry(OP)?;
        self.neighbors.neighbors(seed).ok_or(MeshError::OutOfRange {
            accessor: OP,
            id: seed.index(),
            len: self.neighbors.len(),
        })
    }

    /// Restartable iterator over the neighbors of `seed`.
    pub fn neighbor_ids(
        &self,
        seed: SeedId,
    ) -> Result<impl ExactSizeIterator<Item = SeedId> + Clone + '_, MeshError> {
        Ok(self.neighbors(seed)?.iter().copied())
    }

    #[inline]
    pub fn neighbor_graph(&self) -> &NeighborGraph {
        &self.neighbors
    }

    // ------------------------------------------------------------------
    // Regions
    // ------------------------------------------------------------------

    /// Empties region `id`'s point list and discards its polygon so it can be
    /// filled and built again. Drops cells already registered in the mesh.
    pub fn clear_region(&mut self, id: SeedId) -> Result<(), MeshError> {
        self.state.require(
            "clear_region",
            &[
                BuildState::Configured,
                BuildState::Filled,
                BuildState::Built,
                BuildState::Queryable,
            ],
        )?;
        self.regions.clear(id)?;
        if self.state == BuildState::Queryable {
            self.mesh.clear_cells();
        }
        self.state = BuildState::Filled;
        Ok(())
    }

    /// Appends boundary vertex `vertex` to region `id`.
    pub fn region_add_point_id(&mut self, id: SeedId, vertex: VertexId) -> Result<(), MeshError> {
        const OP: &str = "region_add_point_id";
        self.check_filling(OP)?;
        self.check_vertex(OP, vertex)?;
        self.regions.add_point_id(id, vertex)?;
        self.mark_filled();
        Ok(())
    }

    /// Builds region `id`'s polygon from its accumulated points.
    ///
    /// Must run once per region; the diagram reaches `Built` when every region
    /// has been built.
    pub fn build_edge(&mut self, id: SeedId) -> Result<(), MeshError> {
        self.check_filling("build_edge")?;
        self.regions.build(id)?;
        self.state = if self.regions.all_built() {
            BuildState::Built
        } else {
            BuildState::Filled
        };
        log::trace!(
            "build_edge: region {id} ({} of {} built)",
            self.regions.built_count(),
            self.regions.len()
        );
        Ok(())
    }

    /// The built polygon of region `id` as a generic cell handle.
    pub fn get_cell_id(&self, id: CellId) -> Result<Cell, MeshError> {
        self.regions
            .polygon("get_cell_id", SeedId::new(id.index()))
            .map(|p| Cell::Polygon(p.clone()))
    }

    pub fn region(&self, id: SeedId) -> Result<&Region, MeshError> {
        self.regions.get("region", id)
    }

    /// Coordinates of region `id`'s built boundary, in boundary order.
    pub fn region_vertices(&self, id: SeedId) -> Result<Vec<Point2<T>>, MeshError> {
        self.regions
            .polygon("region_vertices", id)?
            .point_ids()
            .iter()
            .map(|v| self.get_vertex(*v))
            .collect()
    }

    #[inline]
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    // ------------------------------------------------------------------
    // Build cycle
    // ------------------------------------------------------------------

    /// Clears vertices, lines, edges, neighbor lists, region points and
    /// registered cells, keeping seeds, the clip window and the region arena.
    pub fn reset(&mut self) {
        self.clear_geometry();
        self.neighbors.clear();
        self.regions.clear_all();
        if self.state >= BuildState::Configured {
            self.state = BuildState::Configured;
        }
        log::debug!("reset: geometry cleared, state {}", self.state);
    }

    /// Registers every built region in the generic mesh as cell `seed`.
    pub fn insert_cells(&mut self) -> Result<(), MeshError> {
        self.state
            .require("insert_cells", &[BuildState::Built, BuildState::Queryable])?;
        if self.config.validate_on_insert {
            self.validate(&self.config.validation)?;
        }
        self.mesh.clear_cells();
        for region in self.regions.iter() {
            if let Some(poly) = region.polygon() {
                self.mesh
                    .set_cell(CellId::from(region.seed()), Cell::Polygon(poly.clone()));
            }
        }
        self.state = BuildState::Queryable;
        if self.config.validate_on_insert {
            crate::debug_invariants!(self.validate_invariants(), "Diagram::insert_cells");
        }
        log::debug!("insert_cells: {} cells registered", self.mesh.number_of_cells());
        Ok(())
    }

    /// The generic mesh view: vertices plus the cells registered by
    /// [`insert_cells`](Self::insert_cells).
    #[inline]
    pub fn mesh(&self) -> &Mesh<T> {
        &self.mesh
    }

    /// Runs the whole-structure checks selected by `options`.
    pub fn validate(&self, options: &DiagramValidationOptions) -> Result<(), MeshError> {
        validate_diagram(self, options)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn clear_geometry(&mut self) {
        self.mesh.points_mut().clear();
        self.mesh.clear_cells();
        self.lines.clear();
        self.edges.clear();
    }

    fn check_filling(&self, operation: &'static str) -> Result<(), MeshError> {
        self.state.require(operation, BuildState::FILLING)
    }

    #[inline]
    fn mark_filled(&mut self) {
        if self.state == BuildState::Configured {
            self.state = BuildState::Filled;
        }
    }

    fn check_has_geometry(&self, accessor: &'static str) -> Result<(), MeshError> {
        if self.state.has_geometry() {
            Ok(())
        } else {
            Err(MeshError::PrematureQuery {
                accessor,
                state: self.state,
            })
        }
    }

    fn check_vertex(&self, accessor: &'static str, id: VertexId) -> Result<(), MeshError> {
        if self.mesh.points().contains(id) {
            Ok(())
        } else {
            Err(MeshError::OutOfRange {
                accessor,
                id: id.index(),
                len: self.vertex_count(),
            })
        }
    }

    fn check_seed_pair(&self, accessor: &'static str, pair: SeedPair) -> Result<(), MeshError> {
        self.seeds.check(accessor, pair.0)?;
        self.seeds.check(accessor, pair.1)?;
        pair.check_distinct(accessor)
    }
}

impl<T: Coordinate + Float> Diagram<T> {
    /// Area of region `id`'s built polygon.
    pub fn region_area(&self, id: SeedId) -> Result<T, MeshError> {
        Ok(metrics::polygon_area(&self.region_vertices(id)?))
    }

    /// Area centroid of region `id`'s built polygon, `None` if degenerate.
    pub fn region_centroid(&self, id: SeedId) -> Result<Option<Point2<T>>, MeshError> {
        Ok(metrics::polygon_centroid(&self.region_vertices(id)?))
    }
}

impl<T: Coordinate> DebugInvariants for Diagram<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Diagram");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        self.validate(&DiagramValidationOptions::structural())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(i: usize) -> SeedId {
        SeedId::new(i)
    }

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    fn configured(n: usize) -> Diagram<f64> {
        let seeds: Vec<_> = (0..n).map(|i| Point2::new(i as f64, 0.0)).collect();
        let mut d = Diagram::new();
        d.set_seeds(&seeds).unwrap();
        d.set_boundary(Point2::new(10.0, 10.0)).unwrap();
        d
    }

    #[test]
    fn lifecycle_walks_every_state() {
        let mut d = Diagram::<f64>::new();
        assert_eq!(d.state(), BuildState::Empty);
        d.set_seeds(&[Point2::new(0.0, 0.0)]).unwrap();
        assert_eq!(d.state(), BuildState::SeedsSet);
        d.set_origin(Point2::new(-1.0, -1.0)).unwrap();
        assert_eq!(d.state(), BuildState::Configured);
        d.add_vert(Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(d.state(), BuildState::Filled);
        d.build_edge(s(0)).unwrap();
        assert_eq!(d.state(), BuildState::Built);
        d.insert_cells().unwrap();
        assert_eq!(d.state(), BuildState::Queryable);
        d.reset();
        assert_eq!(d.state(), BuildState::Configured);
        d.set_seeds(&[Point2::new(1.0, 1.0)]).unwrap();
        assert_eq!(d.state(), BuildState::SeedsSet);
    }

    #[test]
    fn mutation_before_configuration_is_rejected() {
        let mut d = Diagram::<f64>::new();
        assert_eq!(
            d.add_vert(Point2::new(0.0, 0.0)).unwrap_err(),
            MeshError::StateViolation {
                operation: "add_vert",
                state: BuildState::Empty
            }
        );
        assert!(d.set_boundary(Point2::new(1.0, 1.0)).is_err());
        d.set_seeds(&[Point2::new(0.0, 0.0)]).unwrap();
        assert!(d.add_vert(Point2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn boundary_frozen_once_filling_starts() {
        let mut d = configured(2);
        d.set_origin(Point2::new(-1.0, -1.0)).unwrap();
        d.add_vert(Point2::new(0.0, 0.0)).unwrap();
        let err = d.set_boundary(Point2::new(5.0, 5.0)).unwrap_err();
        assert_eq!(
            err,
            MeshError::StateViolation {
                operation: "set_boundary",
                state: BuildState::Filled
            }
        );
        assert!(d.set_origin(Point2::new(0.0, 0.0)).is_err());
        assert_eq!(d.boundary().size(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn edge_must_reference_existing_ids() {
        let mut d = configured(3);
        d.add_vert(Point2::new(0.0, 0.0)).unwrap();
        d.add_vert(Point2::new(1.0, 0.0)).unwrap();
        let line = d.add_line(SeedPair::new(s(0), s(1))).unwrap();

        let missing_vertex = VoronoiEdge::new(v(0), v(2), s(0), s(1), line);
        assert!(matches!(
            d.add_edge(missing_vertex),
            Err(MeshError::OutOfRange { accessor: "add_edge", id: 2, len: 2 })
        ));

        let missing_line = VoronoiEdge::new(v(0), v(1), s(0), s(1), LineId::new(1));
        assert!(matches!(
            d.add_edge(missing_line),
            Err(MeshError::OutOfRange { accessor: "add_edge", id: 1, len: 1 })
        ));

        let wrong_seeds = VoronoiEdge::new(v(0), v(1), s(1), s(2), line);
        assert!(matches!(
            d.add_edge(wrong_seeds),
            Err(MeshError::EdgeLineMismatch { .. })
        ));

        let reversed = VoronoiEdge::new(v(0), v(1), s(1), s(0), line);
        assert_eq!(d.add_edge(reversed).unwrap(), EdgeId::new(0));
        assert_eq!(d.edge_count(), 1);
    }

    #[test]
    fn seed_pairs_must_be_valid_and_distinct() {
        let mut d = configured(2);
        assert!(matches!(
            d.add_line(SeedPair::new(s(0), s(0))),
            Err(MeshError::DegenerateSeedPair { accessor: "add_line", seed: 0 })
        ));
        assert!(matches!(
            d.add_cell_neighbor(SeedPair::new(s(0), s(5))),
            Err(MeshError::OutOfRange { accessor: "add_cell_neighbor", id: 5, len: 2 })
        ));
        // failed calls leave the state untouched
        assert_eq!(d.state(), BuildState::Configured);
    }

    #[test]
    fn queries_before_filling_are_premature() {
        let d = configured(2);
        assert!(matches!(
            d.neighbors(s(0)),
            Err(MeshError::PrematureQuery { accessor: "neighbor_ids", .. })
        ));
        assert!(d.edges().is_err());
        assert!(d.vertices().is_err());
        assert!(d.lines().is_err());
        assert_eq!(
            d.get_cell_id(CellId::new(0)).unwrap_err(),
            MeshError::RegionNotBuilt {
                accessor: "get_cell_id",
                region: 0
            }
        );
    }

    #[test]
    fn region_points_must_exist_and_rebuild_needs_clear() {
        let mut d = configured(1);
        assert!(matches!(
            d.region_add_point_id(s(0), v(0)),
            Err(MeshError::OutOfRange { accessor: "region_add_point_id", .. })
        ));
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
            d.add_vert(Point2::new(x, y)).unwrap();
        }
        for i in 0..3 {
            d.region_add_point_id(s(0), v(i)).unwrap();
        }
        d.build_edge(s(0)).unwrap();
        assert!(d.get_cell_id(CellId::new(0)).is_ok());
        assert!(matches!(
            d.build_edge(s(0)),
            Err(MeshError::StateViolation { .. })
        ));

        d.clear_region(s(0)).unwrap();
        assert_eq!(d.state(), BuildState::Filled);
        assert!(d.get_cell_id(CellId::new(0)).is_err());
        d.build_edge(s(0)).unwrap();
        assert_eq!(d.state(), BuildState::Built);
    }

    #[test]
    fn insert_cells_requires_every_region() {
        let mut d = configured(2);
        d.build_edge(s(0)).unwrap();
        assert!(matches!(
            d.insert_cells(),
            Err(MeshError::StateViolation { operation: "insert_cells", state: BuildState::Filled })
        ));
        d.build_edge(s(1)).unwrap();
        d.insert_cells().unwrap();
        assert_eq!(d.mesh().number_of_cells(), 2);

        d.clear_region(s(1)).unwrap();
        assert_eq!(d.mesh().number_of_cells(), 0);
    }

    #[test]
    fn reset_keeps_seeds_window_and_arena() {
        let mut d = configured(2);
        d.set_origin(Point2::new(-5.0, -5.0)).unwrap();
        d.add_vert(Point2::new(0.0, 0.0)).unwrap();
        d.add_line(SeedPair::new(s(0), s(1))).unwrap();
        d.add_cell_neighbor(SeedPair::new(s(0), s(1))).unwrap();
        d.region_add_point_id(s(1), v(0)).unwrap();

        d.reset();
        assert_eq!(d.number_of_seeds(), 2);
        assert_eq!(d.boundary().origin(), Point2::new(-5.0, -5.0));
        assert_eq!(d.regions().len(), 2);
        assert_eq!(d.vertex_count(), 0);
        assert_eq!(d.line_count(), 0);
        assert!(d.neighbor_graph().has_no_pairs());
        assert!(d.region(s(1)).unwrap().point_ids().is_empty());
        assert_eq!(d.add_vert(Point2::new(3.0, 3.0)).unwrap(), v(0));
    }

    #[test]
    fn reset_before_configuration_keeps_state() {
        let mut d = Diagram::<f32>::new();
        d.reset();
        assert_eq!(d.state(), BuildState::Empty);
        d.set_seeds(&[Point2::new(0.0, 0.0)]).unwrap();
        d.reset();
        assert_eq!(d.state(), BuildState::SeedsSet);
    }

    #[test]
    fn config_is_kept_and_validation_can_be_skipped() {
        let config = DiagramConfig {
            validate_on_insert: false,
            expected_seeds: 16,
            ..Default::default()
        };
        let mut d = Diagram::<f64>::with_config(config);
        assert_eq!(d.config().expected_seeds, 16);
        d.set_seeds(&[Point2::new(0.0, 0.0)]).unwrap();
        d.set_boundary(Point2::new(1.0, 1.0)).unwrap();
        // out-of-window vertex would only warn; with validation off nothing runs
        let far = d.add_vert(Point2::new(50.0, 50.0)).unwrap();
        d.region_add_point_id(s(0), far).unwrap();
        d.build_edge(s(0)).unwrap();
        d.insert_cells().unwrap();
        assert_eq!(d.mesh().cone(CellId::new(0)).unwrap(), &[far]);
    }

    #[test]
    fn insert_without_validation_keeps_dangling_regions() {
        let config = DiagramConfig {
            validate_on_insert: false,
            ..Default::default()
        };
        let mut d = Diagram::<f64>::with_config(config);
        d.set_seeds(&[Point2::new(0.0, 0.0)]).unwrap();
        d.set_boundary(Point2::new(1.0, 1.0)).unwrap();
        let v0 = d.add_vert(Point2::new(0.5, 0.5)).unwrap();
        d.region_add_point_id(s(0), v0).unwrap();
        d.vertex_list_clear().unwrap();
        d.build_edge(s(0)).unwrap();

        d.insert_cells().unwrap();
        assert_eq!(d.state(), BuildState::Queryable);
        assert_eq!(d.mesh().cone(CellId::new(0)).unwrap(), &[v0]);
        assert!(matches!(
            d.validate_invariants(),
            Err(MeshError::DanglingReference { owner: "region", .. })
        ));
    }

    #[test]
    fn strict_validation_rejects_out_of_window_vertices() {
        let config = DiagramConfig {
            validation: DiagramValidationOptions::all(),
            ..Default::default()
        };
        let mut d = Diagram::<f64>::with_config(config);
        d.set_seeds(&[Point2::new(0.0, 0.0)]).unwrap();
        d.set_boundary(Point2::new(1.0, 1.0)).unwrap();
        let far = d.add_vert(Point2::new(50.0, 50.0)).unwrap();
        d.region_add_point_id(s(0), far).unwrap();
        d.build_edge(s(0)).unwrap();
        assert_eq!(
            d.insert_cells().unwrap_err(),
            MeshError::VertexOutsideWindow { vertex: 0 }
        );
        assert_eq!(d.state(), BuildState::Built);
    }

    #[test]
    fn integer_coordinates_work() {
        let mut d = Diagram::<i64>::new();
        d.set_seeds(&[Point2::new(1, 1), Point2::new(3, 1)]).unwrap();
        d.set_boundary(Point2::new(4, 2)).unwrap();
        let a = d.add_vert(Point2::new(2, 0)).unwrap();
        let b = d.add_vert(Point2::new(2, 2)).unwrap();
        let line = d.add_line(SeedPair::new(s(0), s(1))).unwrap();
        let e = d.add_edge(VoronoiEdge::new(a, b, s(0), s(1), line)).unwrap();
        assert_eq!(d.edge_segment(e).unwrap(), (Point2::new(2, 0), Point2::new(2, 2)));
        assert_eq!(d.edge_cell(e).unwrap().point_ids(), &[a, b]);
        assert_eq!(d.get_edge_line_id(e).unwrap(), line);
    }
}
