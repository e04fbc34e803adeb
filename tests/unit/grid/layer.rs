//! Tests for layer cell storage and coordinate range checks

#[cfg(test)]
mod tests {
    use glam::{IVec2, Vec2};
    use staggrid::{Axis, Parity, StaggerGeometry, TileLayer};

    fn layer() -> TileLayer<u32> {
        TileLayer::new(
            IVec2::new(3, 2),
            Vec2::new(32.0, 32.0),
            StaggerGeometry::new(Axis::Y, Parity::Odd),
        )
    }

    // Tests that layer size reports (columns, rows)
    #[test]
    fn test_layer_size_is_cols_rows() {
        assert_eq!(layer().layer_size(), IVec2::new(3, 2));
    }

    // Tests checked write followed by checked read
    #[test]
    fn test_set_and_get_round_trip() {
        let mut layer = layer();

        assert!(layer.set_cell(IVec2::new(2, 1), 9));
        assert_eq!(layer.cell(IVec2::new(2, 1)), Some(&9));
    }

    // Tests that all four out-of-range directions are rejected
    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let mut layer = layer();

        for coords in [
            IVec2::new(-1, 0),
            IVec2::new(0, -1),
            IVec2::new(3, 0),
            IVec2::new(0, 2),
        ] {
            assert_eq!(layer.cell(coords), None);
            assert!(!layer.set_cell(coords, 1));
        }
    }

    // Tests that geometry configuration survives construction
    #[test]
    fn test_layer_carries_its_geometry() {
        let layer = layer();

        assert_eq!(layer.geometry().axis(), Axis::Y);
        assert_eq!(layer.tile_size(), Vec2::new(32.0, 32.0));
    }
}
