//! Command-line interface for rendering staggered grid layouts to PNG

use clap::{Parser, ValueEnum};
use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::geometry::stagger::{Axis, Parity, StaggerGeometry};
use crate::grid::TileLayer;
use crate::io::configuration::{
    DEFAULT_LAYER_EXTENT, DEFAULT_SEED, DEFAULT_TILE_COUNT, DEFAULT_TILE_EXTENT,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_layer_as_png;

/// Staggered axis selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// Stagger alternating columns
    X,
    /// Stagger alternating rows
    Y,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::X => Self::X,
            AxisArg::Y => Self::Y,
        }
    }
}

/// Offset parity selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParityArg {
    /// Shift odd-indexed lines
    Odd,
    /// Shift even-indexed lines
    Even,
}

impl From<ParityArg> for Parity {
    fn from(arg: ParityArg) -> Self {
        match arg {
            ParityArg::Odd => Self::Odd,
            ParityArg::Even => Self::Even,
        }
    }
}

#[derive(Parser)]
#[command(name = "staggrid")]
#[command(
    author,
    version,
    about = "Render staggered tile-grid layouts as PNG images"
)]
/// Command-line arguments for the layout rendering tool
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_LAYER_EXTENT)]
    pub cols: u32,

    /// Grid height in cells
    #[arg(short, long, default_value_t = DEFAULT_LAYER_EXTENT)]
    pub rows: u32,

    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_EXTENT)]
    pub tile_width: f32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_EXTENT)]
    pub tile_height: f32,

    /// Which grid axis carries the stagger offset
    #[arg(long, value_enum, default_value = "y")]
    pub axis: AxisArg,

    /// Whether odd or even lines receive the offset
    #[arg(long, value_enum, default_value = "odd")]
    pub parity: ParityArg,

    /// Random seed for reproducible tile fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of distinct tile ids in the random fill
    #[arg(short, long, default_value_t = DEFAULT_TILE_COUNT)]
    pub tiles: u32,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the summary line should be printed
    pub const fn should_print_summary(&self) -> bool {
        !self.quiet
    }
}

// The geometry core trusts its inputs, so the CLI is the validation
// boundary for tile and grid dimensions.
fn validate(cli: &Cli) -> Result<()> {
    if !(cli.tile_width.is_finite() && cli.tile_width > 0.0) {
        return Err(invalid_parameter(
            "tile-width",
            &cli.tile_width,
            &"must be strictly positive",
        ));
    }

    if !(cli.tile_height.is_finite() && cli.tile_height > 0.0) {
        return Err(invalid_parameter(
            "tile-height",
            &cli.tile_height,
            &"must be strictly positive",
        ));
    }

    if cli.cols == 0 || cli.cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "cols",
            &cli.cols,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }

    if cli.rows == 0 || cli.rows > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "rows",
            &cli.rows,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }

    if cli.tiles == 0 {
        return Err(invalid_parameter(
            "tiles",
            &cli.tiles,
            &"must be at least 1",
        ));
    }

    Ok(())
}

/// Build a randomly filled layer from CLI arguments and export it as PNG
///
/// # Errors
///
/// Returns an error if parameter validation fails or the image cannot be
/// written.
pub fn run(cli: &Cli) -> Result<()> {
    validate(cli)?;

    let geometry = StaggerGeometry::new(cli.axis.into(), cli.parity.into());
    let layer_size = IVec2::new(cli.cols as i32, cli.rows as i32);
    let tile_size = Vec2::new(cli.tile_width, cli.tile_height);

    let mut layer = TileLayer::<u32>::new(layer_size, tile_size, geometry);
    let mut rng = StdRng::seed_from_u64(cli.seed);
    layer.fill_random(&mut rng, cli.tiles);

    export_layer_as_png(&layer, &cli.output)?;

    // Allow print for user feedback on the exported file
    #[allow(clippy::print_stderr)]
    if cli.should_print_summary() {
        let bounds = layer.bounds().size();
        eprintln!(
            "Wrote {} ({}x{} cells, {:.0}x{:.0} px)",
            cli.output.display(),
            cli.cols,
            cli.rows,
            bounds.x.ceil(),
            bounds.y.ceil()
        );
    }

    Ok(())
}
