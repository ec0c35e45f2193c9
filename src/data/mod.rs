//! Data module: vertex coordinate storage.

pub mod coordinates;

pub use coordinates::PointStore;
