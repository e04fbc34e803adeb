//! Staggered tile-grid geometry for isometric and brick-pattern maps
//!
//! Converts between staggered-grid cell coordinates and flat world-space
//! geometry: layer bounds, per-cell rectangles, approximate world-to-grid
//! lookup, and visible-cell ranges. A tile layer container and a PNG debug
//! renderer sit on top so layouts can be inspected visually.

#![forbid(unsafe_code)]

/// Pure staggered-grid geometry and rectangle value types
pub mod geometry;
/// Tile layer storage and visibility queries
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use geometry::rect::{IRect, Rect};
pub use geometry::stagger::{Axis, Parity, StaggerGeometry};
pub use grid::TileLayer;
pub use io::error::{GridError, Result};
