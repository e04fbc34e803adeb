//! Tile layer storage built on staggered grid geometry
//!
//! A layer owns a fixed-size 2D array of cell values together with the
//! stagger configuration and tile size of its map, and answers the
//! questions a renderer asks: what are the layer's world bounds, which
//! cells cover a given view rectangle, and where does each cell sit.

use glam::{IVec2, Vec2};
use ndarray::Array2;
use num_traits::Zero;
use rand::Rng;

use crate::geometry::rect::Rect;
use crate::geometry::stagger::StaggerGeometry;

/// Fixed-size grid of cell values positioned by staggered geometry
///
/// Cell values are stored row-major with `T::zero()` meaning empty. The
/// geometry and tile size are fixed at construction; all access is by
/// signed cell coordinate with out-of-range lookups returning `None`
/// rather than extending the layer.
#[derive(Debug, Clone)]
pub struct TileLayer<T> {
    cells: Array2<T>,
    geometry: StaggerGeometry,
    tile_size: Vec2,
}

impl<T: Zero + Clone> TileLayer<T> {
    /// Create an empty layer of `layer_size` (columns, rows) cells
    ///
    /// Negative dimensions are clamped to zero, yielding an empty layer.
    pub fn new(layer_size: IVec2, tile_size: Vec2, geometry: StaggerGeometry) -> Self {
        let rows = layer_size.y.max(0) as usize;
        let cols = layer_size.x.max(0) as usize;

        Self {
            cells: Array2::zeros((rows, cols)),
            geometry,
            tile_size,
        }
    }
}

impl<T> TileLayer<T> {
    /// Layer dimension as (columns, rows)
    pub fn layer_size(&self) -> IVec2 {
        let (rows, cols) = self.cells.dim();
        IVec2::new(cols as i32, rows as i32)
    }

    /// The stagger configuration of this layer
    pub const fn geometry(&self) -> StaggerGeometry {
        self.geometry
    }

    /// Tile size in world units
    pub const fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// World-space bounding rectangle of the whole layer
    pub fn bounds(&self) -> Rect {
        self.geometry
            .compute_bounds(self.layer_size(), self.tile_size)
    }

    /// World-space rectangle of the cell at `coords`
    ///
    /// Purely geometric; `coords` does not need to lie within the layer.
    pub fn cell_bounds(&self, coords: IVec2) -> Rect {
        self.geometry.compute_cell_bounds(coords, self.tile_size)
    }

    /// Value of the cell at `coords`, or `None` when out of range
    pub fn cell(&self, coords: IVec2) -> Option<&T> {
        let index = self.index(coords)?;
        self.cells.get(index)
    }

    /// Set the cell at `coords`, returning whether it was in range
    pub fn set_cell(&mut self, coords: IVec2, value: T) -> bool {
        let Some(index) = self.index(coords) else {
            return false;
        };

        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
            true
        } else {
            false
        }
    }

    /// Iterate over the in-range cells covering a world-space view
    ///
    /// Computes the visible cell range for `view` and yields the
    /// coordinate and value of every cell of that range that lies within
    /// the layer. The range over-includes near the view boundary (see
    /// [`StaggerGeometry::compute_visible_area`]), so partially visible
    /// tiles are always yielded.
    pub fn visible_cells(&self, view: Rect) -> impl Iterator<Item = (IVec2, &T)> {
        self.geometry
            .compute_visible_area(view, self.tile_size)
            .cells()
            .filter_map(move |coords| self.cell(coords).map(|value| (coords, value)))
    }

    fn index(&self, coords: IVec2) -> Option<(usize, usize)> {
        let size = self.layer_size();

        if coords.x < 0 || coords.y < 0 || coords.x >= size.x || coords.y >= size.y {
            return None;
        }

        Some((coords.y as usize, coords.x as usize))
    }
}

impl TileLayer<u32> {
    /// Fill every cell with a uniformly random tile id in `1..=tile_count`
    ///
    /// Used by the CLI demo and tests; a `tile_count` of zero is treated
    /// as one so the layer is never left empty.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, tile_count: u32) {
        let upper = tile_count.max(1);

        for cell in &mut self.cells {
            *cell = rng.random_range(1..=upper);
        }
    }
}
