//! Staggered grid geometry and supporting rectangle types
//!
//! This module contains the pure geometry of staggered tile layouts:
//! - Rectangle value types for world space and cell ranges
//! - Conversion between cell coordinates and world-space geometry

/// Rectangle value types for world-space and cell-range computations
pub mod rect;
/// Staggered grid coordinate and bounds computations
pub mod stagger;

pub use stagger::StaggerGeometry;
