//! Tests for rectangle value types and cell-range iteration

#[cfg(test)]
mod tests {
    use glam::{IVec2, Vec2};
    use staggrid::{IRect, Rect};

    // Tests position/size construction against min/max corners
    #[test]
    fn test_rect_from_position_size_matches_corners() {
        let rect = Rect::from_position_size(Vec2::new(3.0, 4.0), Vec2::new(10.0, 20.0));

        assert_eq!(rect.min, Vec2::new(3.0, 4.0));
        assert_eq!(rect.max, Vec2::new(13.0, 24.0));
        assert_eq!(rect.position(), Vec2::new(3.0, 4.0));
        assert_eq!(rect.size(), Vec2::new(10.0, 20.0));
    }

    // Tests min-inclusive, max-exclusive containment
    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::from_min_max(Vec2::ZERO, Vec2::new(10.0, 10.0));

        assert!(rect.contains(Vec2::ZERO));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
    }

    // Tests that growing expands both corners symmetrically
    #[test]
    fn test_irect_grow_expands_all_sides() {
        let range = IRect::from_min_max(IVec2::new(1, 2), IVec2::new(4, 5)).grow(2);

        assert_eq!(range.min, IVec2::new(-1, 0));
        assert_eq!(range.max, IVec2::new(6, 7));
        assert_eq!(range.width(), 8);
        assert_eq!(range.height(), 8);
    }

    // Tests inclusive corner semantics and row-major iteration order
    #[test]
    fn test_irect_cells_iterates_inclusive_row_major() {
        let range = IRect::from_min_max(IVec2::new(0, 0), IVec2::new(1, 1));
        let cells: Vec<IVec2> = range.cells().collect();

        assert_eq!(
            cells,
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 1),
            ]
        );
    }

    // Tests that an inverted range is empty
    #[test]
    fn test_irect_empty_range_has_no_cells() {
        let range = IRect::from_min_max(IVec2::new(3, 3), IVec2::new(1, 1));

        assert_eq!(range.width(), 0);
        assert_eq!(range.height(), 0);
        assert_eq!(range.cells().count(), 0);
    }
}
