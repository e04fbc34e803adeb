//! Constants and runtime configuration defaults

// Visibility query settings
/// Margin, in cells, added around computed visible areas
///
/// Compensates for the coordinate approximation and for tiles partially
/// visible at the edge of a view.
pub const VISIBILITY_MARGIN: i32 = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension, in cells
pub const MAX_GRID_DIMENSION: u32 = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible tile fills
pub const DEFAULT_SEED: u64 = 42;

/// Default layer dimension, in cells
pub const DEFAULT_LAYER_EXTENT: u32 = 16;

/// Default tile dimension, in pixels
pub const DEFAULT_TILE_EXTENT: f32 = 32.0;

/// Default number of distinct tile ids in random fills
pub const DEFAULT_TILE_COUNT: u32 = 6;
