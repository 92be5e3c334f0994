mod tests {
    use myrtio_light_pwm::channel_map::{
        BulbChannels, ChannelMap, Component, InvalidChannelMap, MULTILIGHT_CHANNELS,
        MULTILIGHT_MAP,
    };
    use myrtio_light_pwm::duty::ChannelId;

    #[test]
    fn test_multilight_layout() {
        assert_eq!(MULTILIGHT_MAP.len(), 6);
        assert!(MULTILIGHT_MAP.fits(MULTILIGHT_CHANNELS));
        assert!(!MULTILIGHT_MAP.fits(8));

        assert_eq!(
            MULTILIGHT_MAP.channel(0, Component::White),
            Some(ChannelId::new(7))
        );
        assert_eq!(
            MULTILIGHT_MAP.channel(5, Component::Green),
            Some(ChannelId::new(9))
        );
        assert_eq!(MULTILIGHT_MAP.channel(0, Component::Red), None);
        assert_eq!(MULTILIGHT_MAP.channel(6, Component::White), None);

        assert_eq!(MULTILIGHT_MAP.mono_bulbs().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(MULTILIGHT_MAP.rgb_bulbs().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(MULTILIGHT_MAP.nth_rgb(1), Some(4));
        assert_eq!(MULTILIGHT_MAP.nth_mono(3), None);
    }

    #[test]
    fn test_computed_white_link() {
        match MULTILIGHT_MAP.bulb(4) {
            Some(BulbChannels::Rgb { computed_white, .. }) => assert_eq!(computed_white, Some(1)),
            other => panic!("unexpected bulb {other:?}"),
        }

        // A link to an RGB bulb is rejected
        let map = ChannelMap::new([
            BulbChannels::rgb(0, 1, 2).with_computed_white(1),
            BulbChannels::rgb(3, 4, 5),
        ]);
        assert!(!map.fits(6));
        assert_eq!(
            map.validate(6),
            Err(InvalidChannelMap::ComputedWhiteNotMono { bulb: 0, white: 1 })
        );

        assert_eq!(
            MULTILIGHT_MAP.validate(8),
            Err(InvalidChannelMap::ChannelOutOfBank {
                bulb: 4,
                channel: ChannelId::new(11),
            })
        );

        // Mono bulbs have nothing to link
        assert_eq!(
            BulbChannels::mono(3).with_computed_white(0),
            BulbChannels::mono(3)
        );
    }

    #[test]
    fn test_bulb_channels() {
        let channels: Vec<_> = BulbChannels::rgb(4, 3, 2)
            .channels()
            .iter()
            .map(|channel| channel.raw())
            .collect();
        assert_eq!(channels, vec![4, 3, 2]);
        assert_eq!(BulbChannels::mono(9).channels().len(), 1);
    }
}
