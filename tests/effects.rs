mod tests {
    use hub75_composer::color::Rgb;
    use hub75_composer::effect::{
        BalatroEffect, DEFAULT_SPIN_SPEED, DEFAULT_WARP_AMOUNT, Effect, EffectParams, FireEffect,
        FireState, FrameContext, PlasmaEffect, SpiralEffect, balatro_band, fire_hash, ignite_fire,
        plasma_hue, render_fire, render_plasma, render_spiral,
    };
    use hub75_composer::geometry::PanelGeometry;
    use hub75_composer::polar::{PolarTables, fill_polar_tables};
    use hub75_composer::tables::{BALATRO_GRADIENT, FIRE_MAX_INTENSITY, FIRE_PALETTE};

    const WIDTH: u16 = 16;
    const HEIGHT: u16 = 8;
    const PIXELS: usize = WIDTH as usize * HEIGHT as usize;

    struct Panel {
        geometry: PanelGeometry,
        angle: [u8; PIXELS],
        radius: [u8; PIXELS],
        heat: [u8; PIXELS],
    }

    impl Panel {
        fn new() -> Self {
            let geometry = PanelGeometry::new(WIDTH, HEIGHT).unwrap();
            let mut angle = [0; PIXELS];
            let mut radius = [0; PIXELS];
            fill_polar_tables(geometry, &mut angle, &mut radius).unwrap();
            Self {
                geometry,
                angle,
                radius,
                heat: [0; PIXELS],
            }
        }

        fn render(&mut self, effect: &mut impl Effect, time: u16) -> [Rgb; PIXELS] {
            let mut frame = [Rgb::default(); PIXELS];
            let mut ctx = FrameContext {
                geometry: self.geometry,
                time,
                polar: PolarTables::from_raw(&self.angle, &self.radius),
                heat: &mut self.heat,
            };
            effect.render(&mut ctx, &mut frame);
            frame
        }
    }

    #[test]
    fn test_plasma_corner_pixel() {
        let mut frame = [Rgb::default(); 4];
        render_plasma(&mut frame, 2, 2, 0);
        // All four waves sit at 128, hue 128 is cyan
        assert_eq!(frame[0], Rgb::new(1, 255, 255));
    }

    #[test]
    fn test_plasma_hue_values() {
        assert_eq!(plasma_hue(0, 0, 0), 128);
        assert_eq!(plasma_hue(3, 7, 42), 244);
        // Largest coordinates a panel can have
        assert_eq!(plasma_hue(u16::MAX, u16::MAX, 0), 124);
        assert_eq!(plasma_hue(u16::MAX, u16::MAX, 200), 1);
    }

    #[test]
    fn test_plasma_is_periodic() {
        let mut panel = Panel::new();
        let mut plasma = PlasmaEffect::new();
        for t in [0u16, 5, 200] {
            assert_eq!(panel.render(&mut plasma, t), panel.render(&mut plasma, t + 256));
        }
        assert_ne!(panel.render(&mut plasma, 0), panel.render(&mut plasma, 1));
    }

    #[test]
    fn test_spiral_hue_formula() {
        let mut frame = [Rgb::default(); 2];
        let polar = PolarTables::from_raw(&[0, 100], &[0, 16]);
        render_spiral(polar, &mut frame, 28, 4);
        // Pixel 0: hue 28, pixel 1: 100 + (16 * 4 >> 4) + 28 = 132
        assert_eq!(frame[0], {
            let (r, g, b) = hub75_composer::color::hsv_to_rgb(28, 255, 255);
            Rgb { r, g, b }
        });
        assert_eq!(frame[1], {
            let (r, g, b) = hub75_composer::color::hsv_to_rgb(132, 255, 255);
            Rgb { r, g, b }
        });
    }

    #[test]
    fn test_spiral_is_periodic() {
        let mut panel = Panel::new();
        let mut spiral = SpiralEffect::new().with_tightness(9);
        for t in [0u16, 77, 255] {
            assert_eq!(panel.render(&mut spiral, t), panel.render(&mut spiral, t + 256));
        }
    }

    #[test]
    fn test_balatro_repeats_every_1024_frames() {
        let mut panel = Panel::new();
        let mut balatro = BalatroEffect::new();
        for t in [0u16, 3, 513, 1000] {
            assert_eq!(
                panel.render(&mut balatro, t),
                panel.render(&mut balatro, t + 1024)
            );
        }
        assert_eq!(
            panel.render(&mut balatro, 65_000),
            panel.render(&mut balatro, 65_000u16.wrapping_add(1024))
        );
    }

    #[test]
    fn test_balatro_only_uses_gradient_colors() {
        let mut panel = Panel::new();
        let mut balatro = BalatroEffect::new().with_spin_speed(7).with_warp_amount(15);
        let frame = panel.render(&mut balatro, 321);
        assert!(frame.iter().all(|c| BALATRO_GRADIENT.contains(c)));
    }

    #[test]
    fn test_balatro_defaults() {
        let balatro = BalatroEffect::default();
        assert_eq!(balatro.spin_speed(), 4);
        assert_eq!(balatro.warp_amount(), 14);
        assert_eq!(SpiralEffect::default().tightness(), 4);

        let params = EffectParams::default();
        assert_eq!(params.spin_speed, DEFAULT_SPIN_SPEED);
        assert_eq!(params.warp_amount, DEFAULT_WARP_AMOUNT);
        assert_eq!(params.spin_speed, balatro.spin_speed());
        assert_eq!(params.warp_amount, balatro.warp_amount());
        assert_eq!(params.spin_speed, SpiralEffect::default().tightness());
    }

    #[test]
    fn test_balatro_band_values() {
        // (x, y, angle, radius, t, spin_speed, warp_amount) -> band
        let cases = [
            ((0, 0, 0, 0, 0, 4, 14), 0),
            ((5, 3, 37, 200, 100, 4, 14), 181),
            ((63, 31, 250, 255, 1000, 7, 15), 175),
            ((10, 20, 128, 64, 65_535, 0, 0), 129),
            ((17, 9, 90, 12, 3, 16, 32), 129),
        ];
        for ((x, y, angle, radius, t, spin, warp), band) in cases {
            assert_eq!(balatro_band(x, y, angle, radius, t, spin, warp), band);
        }
    }

    #[test]
    fn test_balatro_pixel_uses_band() {
        let mut panel = Panel::new();
        let mut balatro = BalatroEffect::new().with_spin_speed(7).with_warp_amount(15);
        let frame = panel.render(&mut balatro, 1000);
        let index = panel.geometry.index(5, 3);
        let band = balatro_band(5, 3, panel.angle[index], panel.radius[index], 1000, 7, 15);
        assert_eq!(frame[index], BALATRO_GRADIENT[usize::from(band)]);
    }

    #[test]
    fn test_gradient_zones() {
        // Blue zone never leans red
        assert!(BALATRO_GRADIENT[86..=170].iter().all(|c| c.b >= c.r));
        // Red zone peaks in red
        assert!(BALATRO_GRADIENT[1..84].iter().all(|c| c.r > c.b));
        // Dark zone stays dim
        assert!(
            BALATRO_GRADIENT[171..]
                .iter()
                .all(|c| c.r.max(c.g).max(c.b) < 32)
        );
    }

    #[test]
    fn test_fire_palette_runs_black_to_yellow() {
        assert_eq!(FIRE_PALETTE.len(), usize::from(FIRE_MAX_INTENSITY) + 1);
        assert_eq!(FIRE_PALETTE[0], Rgb::new(0, 0, 0));
        assert_eq!(FIRE_PALETTE[36], Rgb::new(255, 255, 0));
        assert!(FIRE_PALETTE.windows(2).all(|w| w[0].r <= w[1].r));
    }

    #[test]
    fn test_fire_hash_is_stable() {
        assert_eq!(fire_hash(0, 0, 0), 0);
        assert_eq!(fire_hash(3, 4, 5), fire_hash(3, 4, 5));
        assert_ne!(fire_hash(3, 4, 5), fire_hash(3, 4, 6));
    }

    #[test]
    fn test_ignite_heats_bottom_row_only() {
        let mut heat = [9u8; PIXELS];
        ignite_fire(&mut heat, WIDTH, HEIGHT);
        let bottom = (usize::from(HEIGHT) - 1) * usize::from(WIDTH);
        assert!(heat[..bottom].iter().all(|h| *h == 0));
        assert!(heat[bottom..].iter().all(|h| *h == FIRE_MAX_INTENSITY));
    }

    #[test]
    fn test_fire_is_deterministic() {
        let mut heat_a = [0u8; PIXELS];
        ignite_fire(&mut heat_a, WIDTH, HEIGHT);
        for t in 0..20u8 {
            let mut scratch = [Rgb::default(); PIXELS];
            render_fire(&mut heat_a, &mut scratch, WIDTH, HEIGHT, t);
        }
        let mut heat_b = heat_a;

        let mut frame_a = [Rgb::default(); PIXELS];
        let mut frame_b = [Rgb::default(); PIXELS];
        render_fire(&mut heat_a, &mut frame_a, WIDTH, HEIGHT, 20);
        render_fire(&mut heat_b, &mut frame_b, WIDTH, HEIGHT, 20);

        assert_eq!(heat_a, heat_b);
        assert_eq!(frame_a, frame_b);
    }

    #[test]
    fn test_fire_stays_bounded() {
        let mut heat = [0u8; PIXELS];
        ignite_fire(&mut heat, WIDTH, HEIGHT);
        let mut frame = [Rgb::default(); PIXELS];
        for t in 0..2000u32 {
            render_fire(&mut heat, &mut frame, WIDTH, HEIGHT, t as u8);
            assert!(heat.iter().all(|h| *h <= FIRE_MAX_INTENSITY));
            assert!(frame.iter().all(|c| FIRE_PALETTE.contains(c)));
        }
        let bottom = (usize::from(HEIGHT) - 1) * usize::from(WIDTH);
        assert!(heat[bottom..].iter().all(|h| *h == FIRE_MAX_INTENSITY));
    }

    #[test]
    fn test_fire_steps_from_ignition() {
        let mut heat = [0, 0, 0, 0, 0, 0, 36, 36, 36];
        let mut frame = [Rgb::default(); 9];

        render_fire(&mut heat, &mut frame, 3, 3, 0);
        assert_eq!(heat, [0, 0, 0, 35, 36, 0, 36, 36, 36]);
        render_fire(&mut heat, &mut frame, 3, 3, 1);
        assert_eq!(heat, [34, 33, 0, 34, 36, 36, 36, 36, 36]);
        render_fire(&mut heat, &mut frame, 3, 3, 2);
        assert_eq!(heat, [33, 34, 35, 35, 35, 33, 36, 36, 36]);
        assert_eq!(frame[2], FIRE_PALETTE[35]);
    }

    #[test]
    fn test_fire_updates_in_place() {
        let mut heat = [5, 6, 7, 20, 30, 10, 36, 36, 36];
        let mut frame = [Rgb::default(); 9];
        render_fire(&mut heat, &mut frame, 3, 3, 0);

        // Row 0 reads row 1 before row 1 is rewritten. (2, 1) is never a
        // target and keeps 10, (1, 1) takes the later of two writes.
        assert_eq!(heat, [20, 7, 29, 35, 36, 10, 36, 36, 36]);
        assert_eq!(fire_hash(1, 1, 0) & 0xF, 8);
        assert_eq!(fire_hash(2, 1, 0) & 0xF, 1);
    }

    #[test]
    fn test_fire_clamps_hot_cells_for_display() {
        let mut heat = [200u8; 4];
        let mut frame = [Rgb::default(); 4];
        render_fire(&mut heat, &mut frame, 2, 2, 0);
        assert!(frame.iter().all(|c| *c == FIRE_PALETTE[36]));
        assert_eq!(&heat[2..], &[200, 200]);
    }

    #[test]
    fn test_fire_single_row_is_untouched() {
        let mut heat = [5u8, 30];
        let mut frame = [Rgb::default(); 2];
        render_fire(&mut heat, &mut frame, 2, 1, 9);
        assert_eq!(heat, [5, 30]);
        assert_eq!(frame, [FIRE_PALETTE[5], FIRE_PALETTE[30]]);
    }

    #[test]
    fn test_fire_effect_ignites_on_first_frame() {
        let mut panel = Panel::new();
        let mut fire = FireEffect::new();
        panel.render(&mut fire, 0);
        let bottom = (usize::from(HEIGHT) - 1) * usize::from(WIDTH);
        assert!(panel.heat[bottom..].iter().all(|h| *h == FIRE_MAX_INTENSITY));
    }

    #[test]
    fn test_fire_state_checks_capacity() {
        let mut state = FireState::<8>::new();
        let small = PanelGeometry::new(4, 2).unwrap();
        let large = PanelGeometry::new(4, 4).unwrap();
        state.ignite(small).unwrap();
        assert_eq!(state.heat(), &[0, 0, 0, 0, 36, 36, 36, 36]);
        assert!(state.ignite(large).is_err());
    }
}
