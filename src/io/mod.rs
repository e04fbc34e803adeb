//! Input/output operations and error handling
//!
//! Everything fallible lives here: CLI parsing and validation, PNG export,
//! and the crate error type. The geometry core itself performs no I/O.

/// Command-line interface for the rendering tool
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for rendering and export operations
pub mod error;
/// PNG export of tile layers
pub mod image;
