//! The Voronoi diagram mesh and its components.
//!
//! - [`seeds`], [`lines`], [`edges`], [`neighbors`] and [`region`] hold one
//!   kind of diagram data each, in insertion order.
//! - [`state`] is the build-cycle state machine.
//! - [`diagram`] is the orchestrator the Generator drives.
//! - [`validation`] walks a finished diagram and reports broken invariants.

pub mod diagram;
pub mod edges;
pub mod lines;
pub mod neighbors;
pub mod region;
pub mod seeds;
pub mod state;
pub mod validation;

pub use diagram::{Diagram, DiagramConfig};
pub use edges::{EdgeList, VoronoiEdge};
pub use lines::{LineList, SeedPair};
pub use neighbors::NeighborGraph;
pub use region::{Region, RegionSet};
pub use seeds::SeedTable;
pub use state::BuildState;
pub use validation::{
    DiagramValidationOptions, IssueHandling, edges_without_neighbor_pair, validate_diagram,
};
