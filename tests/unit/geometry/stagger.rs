//! Tests for stagger parity selection and per-axis bounds math

#[cfg(test)]
mod tests {
    use glam::{IVec2, Vec2};
    use staggrid::{Axis, Parity, StaggerGeometry};

    // Tests parity matching for both signs, since rows can be negative
    #[test]
    fn test_parity_matches_signed_lines() {
        assert!(Parity::Odd.matches(1));
        assert!(Parity::Odd.matches(-1));
        assert!(!Parity::Odd.matches(2));
        assert!(Parity::Even.matches(0));
        assert!(Parity::Even.matches(-2));
        assert!(!Parity::Even.matches(3));
    }

    // Tests that configuration accessors echo the constructor
    #[test]
    fn test_geometry_is_an_immutable_configuration_pair() {
        let geometry = StaggerGeometry::new(Axis::X, Parity::Even);

        assert_eq!(geometry.axis(), Axis::X);
        assert_eq!(geometry.parity(), Parity::Even);
    }

    // Tests bounds against non-square tiles to pin axis roles
    #[test]
    fn test_bounds_with_non_square_tiles() {
        let tile = Vec2::new(48.0, 24.0);
        let rows = StaggerGeometry::new(Axis::Y, Parity::Odd);
        let cols = StaggerGeometry::new(Axis::X, Parity::Odd);

        // 4 * 48 + 24, 4 * 24 / 2
        assert_eq!(
            rows.compute_bounds(IVec2::new(4, 4), tile).size(),
            Vec2::new(216.0, 48.0)
        );
        // 4 * 48 / 2, 4 * 24 + 12
        assert_eq!(
            cols.compute_bounds(IVec2::new(4, 4), tile).size(),
            Vec2::new(96.0, 108.0)
        );
    }

    // Tests that the shifted cell keeps the tile size unchanged
    #[test]
    fn test_cell_bounds_size_is_always_tile_size() {
        let tile = Vec2::new(48.0, 24.0);
        let geometry = StaggerGeometry::new(Axis::Y, Parity::Even);

        for y in -2..3 {
            for x in -2..3 {
                let cell = geometry.compute_cell_bounds(IVec2::new(x, y), tile);
                assert_eq!(cell.size(), tile);
            }
        }
    }
}
