mod tests {
    use hub75_composer::{EffectId, EffectParams, EffectSlot};

    #[test]
    fn test_effect_id_parse() {
        assert_eq!(EffectId::parse_from_str("plasma"), Some(EffectId::Plasma));
        assert_eq!(EffectId::parse_from_str("fire"), Some(EffectId::Fire));
        assert_eq!(EffectId::parse_from_str("spiral"), Some(EffectId::Spiral));
        assert_eq!(EffectId::parse_from_str("balatro"), Some(EffectId::Balatro));
        assert_eq!(EffectId::parse_from_str("Plasma"), None);
        assert_eq!(EffectId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_effect_id_from_raw() {
        for (raw, id) in EffectId::ALL.iter().enumerate() {
            assert_eq!(EffectId::from_raw(raw as u8), Some(*id));
            assert_eq!(*id as u8, raw as u8);
        }
        assert_eq!(EffectId::from_raw(4), None);
    }

    #[test]
    fn test_effect_id_as_str_round_trips() {
        for id in EffectId::ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_polar_table_users() {
        assert!(!EffectId::Plasma.uses_polar_tables());
        assert!(!EffectId::Fire.uses_polar_tables());
        assert!(EffectId::Spiral.uses_polar_tables());
        assert!(EffectId::Balatro.uses_polar_tables());
    }

    #[test]
    fn test_slot_carries_params() {
        let params = EffectParams {
            spin_speed: 9,
            warp_amount: 3,
        };
        match EffectId::Balatro.to_slot(params) {
            EffectSlot::Balatro(effect) => {
                assert_eq!(effect.spin_speed(), 9);
                assert_eq!(effect.warp_amount(), 3);
            }
            other => panic!("unexpected slot {other:?}"),
        }

        let mut slot = EffectId::Spiral.to_slot(params);
        assert_eq!(slot.id(), EffectId::Spiral);
        slot.set_spin_speed(12);
        match slot {
            EffectSlot::Spiral(effect) => assert_eq!(effect.tightness(), 12),
            other => panic!("unexpected slot {other:?}"),
        }
    }

    #[test]
    fn test_default_slot_and_params() {
        assert_eq!(EffectSlot::default().id(), EffectId::Plasma);
        assert_eq!(
            EffectParams::default(),
            EffectParams {
                spin_speed: 4,
                warp_amount: 14
            }
        );
    }
}
