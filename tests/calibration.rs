mod tests {
    use myrtio_light_pwm::calibration::log_table::{LOG_TABLE_LONG, LOG_TABLE_SHORT};
    use myrtio_light_pwm::calibration::{
        CalibrationEntry, CalibrationTable, SharedCalibration, adjust_intensity, antilog,
    };
    use myrtio_light_pwm::duty::{ChannelId, UnknownChannel};

    #[test]
    fn test_zero_stays_zero() {
        for entry in [
            CalibrationEntry::DEFAULT,
            CalibrationEntry::IDENTITY,
            CalibrationEntry::new(4000, 2048),
            CalibrationEntry::new(1, 1),
        ] {
            assert_eq!(adjust_intensity(0, entry), 0);
        }
    }

    #[test]
    fn test_nonzero_stays_in_range() {
        for entry in [
            CalibrationEntry::DEFAULT,
            CalibrationEntry::IDENTITY,
            CalibrationEntry::new(8192, 256),
            CalibrationEntry::new(512, 4096),
            CalibrationEntry::new(u16::MAX, u16::MAX),
        ] {
            for raw in 1..=255u8 {
                let duty = adjust_intensity(raw, entry);
                assert!((1..=4095).contains(&duty), "raw {raw} -> {duty}");
            }
        }
    }

    #[test]
    fn test_monotonic() {
        for entry in [
            CalibrationEntry::DEFAULT,
            CalibrationEntry::IDENTITY,
            CalibrationEntry::new(8192, 256),
            CalibrationEntry::new(512, 4096),
            CalibrationEntry::new(2867, 1500),
            CalibrationEntry::new(u16::MAX, u16::MAX),
        ] {
            let mut previous = 0;
            for raw in 0..=255u8 {
                let duty = adjust_intensity(raw, entry);
                assert!(duty >= previous, "raw {raw}: {duty} < {previous}");
                previous = duty;
            }
        }
    }

    #[test]
    fn test_identity_is_linear() {
        for raw in 1..=255u8 {
            let duty = i32::from(adjust_intensity(raw, CalibrationEntry::IDENTITY));
            let expected = i32::from(raw) * 4095;
            assert!(
                (duty * 255 - expected).abs() <= 255,
                "raw {raw} -> {duty}"
            );
        }
        assert_eq!(adjust_intensity(1, CalibrationEntry::IDENTITY), 16);
        assert_eq!(adjust_intensity(128, CalibrationEntry::IDENTITY), 2056);
        assert_eq!(adjust_intensity(255, CalibrationEntry::IDENTITY), 4095);
    }

    #[test]
    fn test_default_gamma_curve() {
        assert_eq!(adjust_intensity(1, CalibrationEntry::DEFAULT), 1);
        assert_eq!(adjust_intensity(64, CalibrationEntry::DEFAULT), 85);
        assert_eq!(adjust_intensity(128, CalibrationEntry::DEFAULT), 595);
        assert_eq!(adjust_intensity(254, CalibrationEntry::DEFAULT), 4050);
        assert_eq!(adjust_intensity(255, CalibrationEntry::DEFAULT), 4095);
    }

    #[test]
    fn test_brightness_scales_linearly() {
        let half = CalibrationEntry::new(1024, 512);
        assert_eq!(adjust_intensity(128, half), 1028);
        assert_eq!(adjust_intensity(255, half), 2048);

        let double = CalibrationEntry::new(1024, 2048);
        assert_eq!(adjust_intensity(1, double), 32);
        assert_eq!(adjust_intensity(128, double), 4095);
    }

    #[test]
    fn test_top_of_range_clamps() {
        let bright = CalibrationEntry::new(2867, 1500);
        assert_eq!(adjust_intensity(254, bright), 4095);
        assert_eq!(adjust_intensity(255, bright), 4095);

        let dim = CalibrationEntry::new(8192, 256);
        assert_eq!(adjust_intensity(254, dim), 992);
        assert_eq!(adjust_intensity(255, dim), 1024);
    }

    #[test]
    fn test_antilog_edges() {
        assert_eq!(LOG_TABLE_LONG[1], 34069);
        assert_eq!(LOG_TABLE_LONG[4095], 0);
        assert_eq!(LOG_TABLE_SHORT[255], 0);

        assert_eq!(antilog(0), 4095);
        assert_eq!(antilog(34069), 1);
        assert_eq!(antilog(34070), 0);
        assert_eq!(antilog(u32::MAX), 0);
        assert_eq!(antilog(u32::from(LOG_TABLE_LONG[2])), 2);
    }

    #[test]
    fn test_antilog_inverts_table() {
        for i in 1..4096 {
            assert_eq!(antilog(u32::from(LOG_TABLE_LONG[i])), i as u32);
        }
    }

    #[test]
    fn test_table_lookup() {
        let mut table = CalibrationTable::<4>::new();
        assert_eq!(table.get(ChannelId::new(2)), Some(CalibrationEntry::DEFAULT));
        assert_eq!(table.get(ChannelId::new(4)), None);

        table
            .set(ChannelId::new(2), CalibrationEntry::IDENTITY)
            .unwrap();
        assert_eq!(table.adjust_intensity(128, ChannelId::new(2)), 2056);
        assert_eq!(table.adjust_intensity(128, ChannelId::new(1)), 595);
        // Unknown channels fall back to the default curve
        assert_eq!(table.adjust_intensity(128, ChannelId::new(9)), 595);

        assert_eq!(
            table.set(ChannelId::new(4), CalibrationEntry::IDENTITY),
            Err(UnknownChannel(ChannelId::new(4)))
        );
    }

    #[test]
    fn test_shared_table() {
        let shared = SharedCalibration::<3>::default();
        shared
            .set(ChannelId::new(0), CalibrationEntry::new(2400, 900))
            .unwrap();
        assert_eq!(
            shared.get(ChannelId::new(0)),
            Some(CalibrationEntry::new(2400, 900))
        );

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.entries()[0], CalibrationEntry::new(2400, 900));
        assert_eq!(snapshot.entries()[1], CalibrationEntry::DEFAULT);

        let updated = shared.update(ChannelId::new(0), |entry| {
            CalibrationEntry::new(entry.gamma, 1024)
        });
        assert_eq!(updated, Some(CalibrationEntry::new(2400, 1024)));
        assert_eq!(
            shared.get(ChannelId::new(0)),
            Some(CalibrationEntry::new(2400, 1024))
        );
        assert_eq!(shared.update(ChannelId::new(3), |entry| entry), None);

        shared.replace(CalibrationTable::uniform(CalibrationEntry::IDENTITY));
        assert_eq!(shared.adjust_intensity(255, ChannelId::new(0)), 4095);
        assert_eq!(shared.adjust_intensity(1, ChannelId::new(2)), 16);
    }
}
