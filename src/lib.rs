#![cfg_attr(docsrs, feature(doc_cfg))]
//! # voronoi-mesh
//!
//! voronoi-mesh is the data model of a planar Voronoi diagram: seeds, vertices,
//! bisector lines, clipped edges, the seed neighbor graph and one polygonal
//! region per seed. An external Generator (a sweep-line or incremental
//! builder) fills it through a small mutation API; segmentation and analysis
//! code reads it back through typed, bounds-checked queries or through the
//! generic point/cell [`Mesh`](topology::mesh::Mesh) it embeds.
//!
//! ## Features
//! - Dense typed ids (`SeedId`, `VertexId`, `LineId`, `EdgeId`, `CellId`) that
//!   equal the insertion position and stay stable until a list is cleared
//! - An explicit build-state machine: out-of-order calls fail with
//!   `StateViolation` instead of corrupting the structure
//! - Symmetric neighbor graph and closed region polygons by construction
//! - Whole-diagram validation with per-check [`IssueHandling`](voronoi::validation::IssueHandling)
//! - Generic coordinates through `num-traits`; area and centroid helpers for
//!   floating-point diagrams
//!
//! The library does not compute diagrams. It stores what a Generator produces
//! and guarantees that what it stores is referentially consistent.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! voronoi-mesh = "0.1"
//! # Optional features:
//! # features = ["strict-invariants"]
//! ```
//!
//! ## Build cycle
//! `set_seeds` → `set_boundary`/`set_origin` → `add_vert`/`add_line`/`add_edge`/
//! `add_cell_neighbor`/`region_add_point_id` → `build_edge` for every seed →
//! `insert_cells`. `reset` returns to the configured state for the next cycle.

pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod topology;
pub mod voronoi;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::coordinates::PointStore;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{BoundingWindow, Coordinate, Point2};
    pub use crate::mesh_error::{ErrorKind, MeshError};
    pub use crate::topology::cell::{Cell, LineCell, PolygonCell};
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::ids::{CellId, EdgeId, LineId, SeedId, VertexId};
    pub use crate::topology::mesh::Mesh;
    pub use crate::voronoi::diagram::{Diagram, DiagramConfig};
    pub use crate::voronoi::edges::VoronoiEdge;
    pub use crate::voronoi::lines::SeedPair;
    pub use crate::voronoi::state::BuildState;
    pub use crate::voronoi::validation::{DiagramValidationOptions, IssueHandling};
}
