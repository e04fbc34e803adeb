//! PNG export of tile layers for visual inspection of stagger layouts

use glam::IVec2;
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::grid::TileLayer;
use crate::io::error::{GridError, Result};

/// Fixed color palette; tile ids wrap around when exceeding its length
const PALETTE: [[u8; 4]; 8] = [
    [102, 153, 204, 255],
    [204, 153, 102, 255],
    [120, 190, 120, 255],
    [200, 120, 140, 255],
    [170, 140, 200, 255],
    [210, 200, 120, 255],
    [120, 190, 190, 255],
    [160, 160, 160, 255],
];

// Tile id 0 is empty and stays transparent
fn tile_color(id: u32) -> Option<Rgba<u8>> {
    if id == 0 {
        return None;
    }

    let index = (id - 1) as usize % PALETTE.len();
    PALETTE.get(index).copied().map(Rgba)
}

fn darken(color: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = color;
    Rgba([r / 2, g / 2, b / 2, a])
}

/// Render a layer into an RGBA image
///
/// The image spans the layer's world bounds (rounded up to whole pixels,
/// at least 1x1). Each non-empty cell is drawn as its staggered
/// world-space rectangle with a darker one-pixel border, cells painted in
/// row order so overlapping halves resolve the way a tilemap renderer
/// would paint them. Bottom-row overhang beyond the computed bounds is
/// clipped.
pub fn render_layer(layer: &TileLayer<u32>) -> RgbaImage {
    let size = layer.bounds().size();
    let width = (size.x.ceil() as u32).max(1);
    let height = (size.y.ceil() as u32).max(1);

    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    let layer_size = layer.layer_size();
    for y in 0..layer_size.y {
        for x in 0..layer_size.x {
            let coords = IVec2::new(x, y);
            let Some(&id) = layer.cell(coords) else {
                continue;
            };
            let Some(fill) = tile_color(id) else {
                continue;
            };

            let cell = layer.cell_bounds(coords);
            let x0 = cell.min.x.max(0.0) as u32;
            let y0 = cell.min.y.max(0.0) as u32;
            let x1 = cell.max.x.min(size.x.ceil()).max(0.0) as u32;
            let y1 = cell.max.y.min(size.y.ceil()).max(0.0) as u32;
            let border = darken(fill);

            for py in y0..y1 {
                for px in x0..x1 {
                    let on_border = px == x0 || py == y0 || px + 1 == x1 || py + 1 == y1;
                    img.put_pixel(px, py, if on_border { border } else { fill });
                }
            }
        }
    }

    img
}

/// Render a layer and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layer_as_png(layer: &TileLayer<u32>, output_path: &Path) -> Result<()> {
    let img = render_layer(layer);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
