//! Planar geometry primitives used by the diagram.
//!
//! Coordinates are generic over the caller's numeric type. Metrics that need
//! division are restricted to floating-point coordinates.

pub mod metrics;
pub mod point;
pub mod window;

pub use point::{Coordinate, Point2};
pub use window::BoundingWindow;
