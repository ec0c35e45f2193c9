//! Mesh topology: typed ids, cell handles and the generic mesh container.
//!
//! - [`ids`] holds the dense id newtypes shared by every component.
//! - [`cell`] and [`cell_type`] define the closed set of cell kinds.
//! - [`mesh`] is the point/cell container the diagram registers its regions in.

pub mod cell;
pub mod cell_type;
pub mod ids;
pub mod mesh;

pub use cell::{Cell, LineCell, PolygonCell};
pub use cell_type::CellType;
pub use ids::{CellId, EdgeId, LineId, SeedId, VertexId};
pub use mesh::Mesh;
