//! Tests for configuration constants used across the crate

#[cfg(test)]
mod tests {
    use staggrid::io::configuration::{
        DEFAULT_TILE_COUNT, DEFAULT_TILE_EXTENT, MAX_GRID_DIMENSION, VISIBILITY_MARGIN,
    };

    // The visibility margin is part of the visible-area contract
    #[test]
    fn test_visibility_margin_is_two_cells() {
        assert_eq!(VISIBILITY_MARGIN, 2);
    }

    // Defaults must satisfy the CLI's own validation rules
    #[test]
    fn test_defaults_are_valid_parameters() {
        assert!(DEFAULT_TILE_EXTENT > 0.0);
        assert!(DEFAULT_TILE_COUNT >= 1);
        assert!(MAX_GRID_DIMENSION >= 1);
    }
}
