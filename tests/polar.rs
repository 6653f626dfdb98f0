mod tests {
    use hub75_composer::error::FrameError;
    use hub75_composer::geometry::PanelGeometry;
    use hub75_composer::polar::{PolarTables, fill_polar_tables};

    #[test]
    fn test_center_has_zero_radius() {
        let geometry = PanelGeometry::new(8, 8).unwrap();
        let mut angle = [0u8; 64];
        let mut radius = [0u8; 64];
        fill_polar_tables(geometry, &mut angle, &mut radius).unwrap();

        assert_eq!(radius[geometry.index(4, 4)], 0);
        // Farthest corner from (4, 4)
        assert!(radius[geometry.index(0, 0)] >= 254);
        // Due east of the center is half way around
        assert_eq!(angle[geometry.index(7, 4)], 127);
    }

    #[test]
    fn test_corner_radius_matches_double_precision() {
        let geometry = PanelGeometry::new(64, 32).unwrap();
        let mut angle = [0u8; 2048];
        let mut radius = [0u8; 2048];
        fill_polar_tables(geometry, &mut angle, &mut radius).unwrap();

        // Single precision rounds this corner up to 255
        assert_eq!(radius[geometry.index(0, 0)], 254);
        assert_eq!(radius[geometry.index(32, 16)], 0);
        assert_eq!(angle[geometry.index(63, 16)], 127);
    }

    #[test]
    fn test_radius_grows_outward() {
        let geometry = PanelGeometry::new(16, 2).unwrap();
        let mut angle = [0u8; 32];
        let mut radius = [0u8; 32];
        fill_polar_tables(geometry, &mut angle, &mut radius).unwrap();

        let row = &radius[geometry.index(8, 1)..geometry.index(15, 1) + 1];
        assert!(row.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_table_lengths_are_checked() {
        let geometry = PanelGeometry::new(4, 2).unwrap();
        let mut angle = [0u8; 8];
        let mut radius = [0u8; 7];
        assert_eq!(
            fill_polar_tables(geometry, &mut angle, &mut radius),
            Err(FrameError::SizeMismatch {
                expected: 8,
                actual: 7
            })
        );
        assert!(PolarTables::new(geometry, &angle, &radius).is_err());
        assert!(PolarTables::new(geometry, &angle, &angle).is_ok());
    }

    #[test]
    fn test_raw_tables_use_shorter_length() {
        let tables = PolarTables::from_raw(&[1, 2, 3], &[4, 5]);
        assert_eq!(tables.len(), 2);
        assert!(!tables.is_empty());
    }
}
