//! Tile layer storage and visibility queries

/// Fixed-size tile layer positioned by staggered geometry
pub mod layer;

pub use layer::TileLayer;
