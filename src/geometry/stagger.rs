//! Staggered grid geometry for isometric and brick-pattern tile layouts
//!
//! In a staggered layout, alternating lines of cells are shifted by half a
//! tile and the lines along the staggered axis overlap by half a tile, so a
//! grid of n lines is only about n/2 tiles deep. Which axis carries the
//! offset and whether odd or even lines are shifted is fixed per map layer;
//! every computation here is a pure function of that configuration and its
//! arguments.

use glam::{IVec2, Vec2};

use crate::geometry::rect::{IRect, Rect};
use crate::io::configuration::VISIBILITY_MARGIN;

/// Which grid axis carries the half-tile stagger offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Columns are staggered: alternating columns shift vertically
    X,
    /// Rows are staggered: alternating rows shift horizontally
    Y,
}

/// Which lines, by coordinate parity, receive the stagger offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Odd-indexed lines are shifted
    Odd,
    /// Even-indexed lines are shifted
    Even,
}

impl Parity {
    /// Check whether the line at the given coordinate is a shifted line
    pub const fn matches(self, line: i32) -> bool {
        match self {
            Self::Odd => line % 2 != 0,
            Self::Even => line % 2 == 0,
        }
    }
}

/// Geometry of a staggered tile grid
///
/// Immutable pair of [`Axis`] and [`Parity`], created once per map layer.
/// Tile size and layer size are supplied per call so a single value can
/// serve any layer sharing the same layout. All methods are side-effect
/// free and safe to call concurrently.
///
/// Inputs are trusted: layer sizes are expected to be non-negative and tile
/// dimensions strictly positive. Violating those preconditions yields
/// mathematically degenerate results (or division by zero) rather than an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerGeometry {
    axis: Axis,
    parity: Parity,
}

impl StaggerGeometry {
    /// Create a geometry helper for the given stagger configuration
    pub const fn new(axis: Axis, parity: Parity) -> Self {
        Self { axis, parity }
    }

    /// The staggered axis of this layout
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The line parity receiving the offset in this layout
    pub const fn parity(&self) -> Parity {
        self.parity
    }

    /// Bounding rectangle of the whole grid, anchored at the origin
    ///
    /// Lines along the staggered axis overlap by half a tile, so that
    /// dimension is halved; the cross dimension gains half a tile to cover
    /// the overhang of the shifted lines.
    pub fn compute_bounds(&self, layer_size: IVec2, tile_size: Vec2) -> Rect {
        let mut base = layer_size.as_vec2() * tile_size;

        match self.axis {
            Axis::Y => {
                base.y /= 2.0;
                base.x += tile_size.x / 2.0;
            }
            Axis::X => {
                base.x /= 2.0;
                base.y += tile_size.y / 2.0;
            }
        }

        Rect::from_position_size(Vec2::ZERO, base)
    }

    /// World-space rectangle occupied by the cell at `coords`
    ///
    /// The position along the staggered axis is halved to account for line
    /// overlap, and cells on lines whose coordinate matches the configured
    /// parity are shifted by half a tile on the cross axis.
    pub fn compute_cell_bounds(&self, coords: IVec2, tile_size: Vec2) -> Rect {
        let mut base = coords.as_vec2() * tile_size;

        match self.axis {
            Axis::Y => {
                base.y /= 2.0;

                if self.parity.matches(coords.y) {
                    base.x += tile_size.x / 2.0;
                }
            }
            Axis::X => {
                base.x /= 2.0;

                if self.parity.matches(coords.x) {
                    base.y += tile_size.y / 2.0;
                }
            }
        }

        Rect::from_position_size(base, tile_size)
    }

    /// Cell coordinate containing a world-space position
    ///
    /// This is a quick approximation, not an exact inverse of
    /// [`compute_cell_bounds`](Self::compute_cell_bounds): the tile
    /// dimension along the staggered axis is halved and the position is
    /// divided componentwise with truncation, which ignores the parity
    /// offset of shifted lines. Positions inside a shifted cell can
    /// resolve to an adjacent cell. Callers needing a guaranteed cover
    /// compensate with a margin, as
    /// [`compute_visible_area`](Self::compute_visible_area) does.
    pub fn compute_coordinates(&self, position: Vec2, tile_size: Vec2) -> IVec2 {
        let mut tile = tile_size;

        match self.axis {
            Axis::Y => tile.y /= 2.0,
            Axis::X => tile.x /= 2.0,
        }

        (position / tile).as_ivec2()
    }

    /// Range of cell coordinates covering a world-space view rectangle
    ///
    /// Converts both corners with
    /// [`compute_coordinates`](Self::compute_coordinates) and grows the
    /// resulting range by [`VISIBILITY_MARGIN`] cells on every side, so the
    /// result always covers the view despite the coordinate approximation
    /// and partially visible edge tiles. Over-inclusion near the boundary
    /// is expected.
    pub fn compute_visible_area(&self, local: Rect, tile_size: Vec2) -> IRect {
        IRect::from_min_max(
            self.compute_coordinates(local.min, tile_size),
            self.compute_coordinates(local.max, tile_size),
        )
        .grow(VISIBILITY_MARGIN)
    }

    /// Outline polygon of the cell at `coords`
    ///
    /// Extension point: the outline shape of a staggered cell (hexagon or
    /// diamond depending on the axis) is not implemented and the returned
    /// polyline is always empty.
    pub fn compute_polyline(&self, coords: IVec2, tile_size: Vec2) -> Vec<Vec2> {
        let _ = (coords, tile_size);
        Vec::new()
    }

    /// Visit every neighbor of the cell at `coords` within the layer
    ///
    /// Extension point: staggered adjacency (which depends on the line
    /// parity of the cell) is not implemented and the visitor is never
    /// invoked.
    pub fn for_each_neighbor<F>(&self, coords: IVec2, layer_size: IVec2, visit: F)
    where
        F: FnMut(IVec2),
    {
        let _ = (coords, layer_size, visit);
    }
}
