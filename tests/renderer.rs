mod tests {
    use hub75_composer::bitplanes::{BitplaneEncoder, PinOrder};
    use hub75_composer::color::Rgb;
    use hub75_composer::effect::{EffectId, EffectParams};
    use hub75_composer::error::FrameError;
    use hub75_composer::geometry::PanelGeometry;
    use hub75_composer::intent::IntentChannel;
    use hub75_composer::renderer::{Renderer, RendererConfig};
    use hub75_composer::tables::FIRE_MAX_INTENSITY;

    const CHANNEL_SIZE: usize = 4;

    fn config(effect: Option<EffectId>) -> RendererConfig<'static> {
        RendererConfig {
            geometry: PanelGeometry::new(4, 2).unwrap(),
            effect,
            params: EffectParams::default(),
            pin_order: PinOrder::LsbFirst,
            gamma: None,
        }
    }

    #[test]
    fn test_stopped_renderer_clears_bitplanes() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(None)).unwrap();
        assert!(!renderer.state().is_running());

        let mut bitplanes = [0xAA; 32];
        renderer.render(&mut bitplanes).unwrap();
        assert_eq!(bitplanes, [0; 32]);
    }

    #[test]
    fn test_start_intent_renders_plasma() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(None)).unwrap();
        channel.sender().start(EffectId::Plasma).unwrap();

        let mut bitplanes = [0; 32];
        renderer.render(&mut bitplanes).unwrap();

        assert!(renderer.state().is_running());
        assert_eq!(renderer.state().time(), 1);
        assert_eq!(renderer.frame()[0], Rgb::new(1, 255, 255));

        let (top, bottom) = BitplaneEncoder::<8>::new()
            .decode_pixel_pair(&bitplanes, 0)
            .unwrap();
        assert_eq!(top, renderer.frame()[0]);
        assert_eq!(bottom, renderer.frame()[4]);
    }

    #[test]
    fn test_low_depth_without_gamma_keeps_top_bits() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE, 4> =
            Renderer::new(channel.receiver(), &config(Some(EffectId::Plasma))).unwrap();

        let mut bitplanes = [0; 16];
        renderer.render(&mut bitplanes).unwrap();
        assert_eq!(renderer.frame()[0], Rgb::new(1, 255, 255));

        // Red 1 is dark at 4 bits, green and blue are full on every plane
        for plane in 0..4 {
            assert_eq!(bitplanes[plane * 4] & 0b111, 0b110);
        }

        let top_bits = |c: Rgb| Rgb::new(c.r & 0xF0, c.g & 0xF0, c.b & 0xF0);
        let decoder = BitplaneEncoder::<4>::new().with_msb_planes();
        for pair in 0..4 {
            let (top, bottom) = decoder.decode_pixel_pair(&bitplanes, pair).unwrap();
            assert_eq!(top, top_bits(renderer.frame()[pair]));
            assert_eq!(bottom, top_bits(renderer.frame()[pair + 4]));
        }
    }

    #[test]
    fn test_stop_intent_blanks_panel() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(Some(EffectId::Plasma))).unwrap();
        let mut bitplanes = [0; 32];
        renderer.render(&mut bitplanes).unwrap();
        assert!(bitplanes.iter().any(|b| *b != 0));

        channel.sender().stop().unwrap();
        renderer.render(&mut bitplanes).unwrap();
        assert_eq!(bitplanes, [0; 32]);
        assert!(!renderer.state().is_running());
    }

    #[test]
    fn test_restart_resets_time() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(Some(EffectId::Spiral))).unwrap();
        let mut bitplanes = [0; 32];
        for _ in 0..5 {
            renderer.render(&mut bitplanes).unwrap();
        }
        let first_frame = {
            channel.sender().start(EffectId::Spiral).unwrap();
            renderer.render(&mut bitplanes).unwrap();
            renderer.frame().to_vec()
        };
        assert_eq!(renderer.state().time(), 1);

        let channel_b = IntentChannel::<CHANNEL_SIZE>::new();
        let mut fresh: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel_b.receiver(), &config(Some(EffectId::Spiral))).unwrap();
        fresh.render(&mut bitplanes).unwrap();
        assert_eq!(fresh.frame(), first_frame.as_slice());
    }

    #[test]
    fn test_fire_is_ignited_on_start() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(Some(EffectId::Fire))).unwrap();
        let mut bitplanes = [0; 32];
        renderer.render(&mut bitplanes).unwrap();
        assert_eq!(
            &renderer.fire_state().heat()[4..],
            &[FIRE_MAX_INTENSITY; 4]
        );
    }

    #[test]
    fn test_parameter_intents_update_state() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(Some(EffectId::Balatro))).unwrap();
        channel.sender().set_spin_speed(9).unwrap();
        channel.sender().set_warp_amount(2).unwrap();

        let mut bitplanes = [0; 32];
        renderer.render(&mut bitplanes).unwrap();
        assert_eq!(
            renderer.state().params(),
            EffectParams {
                spin_speed: 9,
                warp_amount: 2
            }
        );
        assert_eq!(renderer.state().effect_id(), EffectId::Balatro);
    }

    #[test]
    fn test_panel_larger_than_capacity_is_rejected() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let result: Result<Renderer<'_, 4, CHANNEL_SIZE>, _> =
            Renderer::new(channel.receiver(), &config(None));
        assert!(matches!(result, Err(FrameError::InvalidParameter(_))));
    }

    #[test]
    fn test_wrong_bitplane_length_is_rejected() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(Some(EffectId::Plasma))).unwrap();
        let mut bitplanes = [0xAA; 24];
        assert_eq!(
            renderer.render(&mut bitplanes),
            Err(FrameError::SizeMismatch {
                expected: 32,
                actual: 24
            })
        );
        assert_eq!(bitplanes, [0xAA; 24]);
        assert_eq!(renderer.bitplane_len(), 32);
    }

    #[test]
    fn test_offline_polar_tables() {
        let channel = IntentChannel::<CHANNEL_SIZE>::new();
        let renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(None)).unwrap();
        assert!(renderer.with_polar_tables(&[0; 8], &[0; 7]).is_err());

        let mut renderer: Renderer<'_, 8, CHANNEL_SIZE> =
            Renderer::new(channel.receiver(), &config(None))
                .unwrap()
                .with_polar_tables(&[0; 8], &[0; 8])
                .unwrap();
        channel.sender().start(EffectId::Spiral).unwrap();
        let mut bitplanes = [0; 32];
        renderer.render(&mut bitplanes).unwrap();
        // Flat tables: every pixel shows hue 0
        assert!(renderer.frame().iter().all(|c| *c == Rgb::new(255, 2, 1)));
    }
}
