mod tests {
    use myrtio_light_pwm::calibration::{CalibrationEntry, SharedCalibration};
    use myrtio_light_pwm::channel_map::{MULTILIGHT_CHANNELS, MULTILIGHT_MAP};
    use myrtio_light_pwm::console::{
        CalibrationCommand, CalibrationConsole, ChannelMask, ConsoleError, LineBuffer,
        Parameter, execute_line, parse_command,
    };
    use myrtio_light_pwm::duty::ChannelId;
    use myrtio_light_pwm::output::{LightOutput, NoThermalCutoff, OutputConfig};
    use myrtio_light_pwm::pending::UpdateQueue;
    use myrtio_light_pwm::persistence::{CalibrationStore, PersistenceError, load_calibration};

    #[derive(Default)]
    struct MemoryStore {
        data: Option<Vec<u8>>,
        fail_writes: bool,
    }

    impl CalibrationStore for MemoryStore {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, PersistenceError> {
            let data = self.data.as_ref().ok_or(PersistenceError::NotFound)?;
            let len = data.len().min(buf.len());
            buf[..len].copy_from_slice(&data[..len]);
            Ok(data.len())
        }

        fn write(&mut self, data: &[u8]) -> Result<(), PersistenceError> {
            if self.fail_writes {
                return Err(PersistenceError::Driver);
            }
            self.data = Some(data.to_vec());
            Ok(())
        }
    }

    fn parse(line: &str) -> Result<Option<CalibrationCommand>, ConsoleError> {
        parse_command(line.as_bytes(), MULTILIGHT_CHANNELS, &MULTILIGHT_MAP)
    }

    fn channels(command: CalibrationCommand) -> Vec<u8> {
        command.channels.iter().map(ChannelId::raw).collect()
    }

    #[test]
    fn test_parse_raw_channel() {
        let command = parse("3 g2400").unwrap().unwrap();
        assert_eq!(command.parameter, Parameter::Gamma);
        assert_eq!(command.value, 2400);
        assert_eq!(channels(command), vec![3]);

        let command = parse("11b900").unwrap().unwrap();
        assert_eq!(command.parameter, Parameter::Brightness);
        assert_eq!(command.value, 900);
        assert_eq!(channels(command), vec![11]);
    }

    #[test]
    fn test_parse_all_channels() {
        let command = parse("* b1024").unwrap().unwrap();
        assert_eq!(command.channels, ChannelMask::all(MULTILIGHT_CHANNELS));
        assert_eq!(command.channels.bits(), 0xfff);
    }

    #[test]
    fn test_parse_bulb_channels() {
        // Second RGB bulb is bulb 4 on channels 1, 0, 11
        assert_eq!(channels(parse("r2 g2600").unwrap().unwrap()), vec![1]);
        assert_eq!(channels(parse("g2 g2600").unwrap().unwrap()), vec![0]);
        assert_eq!(channels(parse("b2 g2600").unwrap().unwrap()), vec![11]);
        assert_eq!(channels(parse("a2 g2600").unwrap().unwrap()), vec![0, 1, 11]);
        assert_eq!(channels(parse("w1 g2600").unwrap().unwrap()), vec![7]);
        assert_eq!(channels(parse("w* g2600").unwrap().unwrap()), vec![5, 6, 7]);
        assert_eq!(channels(parse("r* g2600").unwrap().unwrap()), vec![1, 4, 10]);
        assert_eq!(
            channels(parse("a* g2600").unwrap().unwrap()),
            vec![0, 1, 2, 3, 4, 8, 9, 10, 11]
        );
    }

    #[test]
    fn test_zero_value_is_ignored() {
        assert_eq!(parse("3 g0"), Ok(None));
        assert_eq!(parse("3 g"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("3"), Err(ConsoleError::CommandTooShort));
        assert_eq!(parse(""), Err(ConsoleError::CommandTooShort));

        assert_eq!(parse("12 g2400"), Err(ConsoleError::InvalidChannel));
        assert_eq!(parse("99999 g2400"), Err(ConsoleError::InvalidChannel));
        assert_eq!(parse("x1 g2400"), Err(ConsoleError::InvalidChannel));
        assert_eq!(parse("r0 g2400"), Err(ConsoleError::InvalidChannel));
        assert_eq!(parse("r4 g2400"), Err(ConsoleError::InvalidChannel));
        assert_eq!(parse("w4 g2400"), Err(ConsoleError::InvalidChannel));
        assert_eq!(parse("rx g2400"), Err(ConsoleError::InvalidChannel));

        assert_eq!(parse("3 q2400"), Err(ConsoleError::InvalidCommand));
        assert_eq!(parse("3 "), Err(ConsoleError::InvalidCommand));
        assert_eq!(parse("3 g70000"), Err(ConsoleError::InvalidCommand));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConsoleError::CommandTooShort.to_string(), "Command too short");
        assert_eq!(
            ConsoleError::InvalidChannel.to_string(),
            "Invalid channel specifier"
        );
        assert_eq!(ConsoleError::InvalidCommand.to_string(), "Invalid command");
    }

    #[test]
    fn test_line_buffer() {
        let mut buffer = LineBuffer::new();
        let mut lines = Vec::new();
        for byte in b"3 g1\r\n\n* b2\r" {
            if let Some(line) = buffer.push(*byte) {
                lines.push(line.to_vec());
            }
        }
        assert_eq!(lines, vec![b"3 g1".to_vec(), b"* b2".to_vec()]);
    }

    #[test]
    fn test_line_buffer_truncates() {
        let mut buffer = LineBuffer::new();
        for _ in 0..50 {
            assert!(buffer.push(b'x').is_none());
        }
        let line = buffer.push(b'\n').unwrap();
        assert_eq!(line.len(), 40);
    }

    #[test]
    fn test_execute_updates_and_saves() {
        let queue = UpdateQueue::<MULTILIGHT_CHANNELS>::new();
        let calibration = SharedCalibration::default();
        let mut output = LightOutput::new(
            queue.requester(),
            &calibration,
            &MULTILIGHT_MAP,
            NoThermalCutoff,
            OutputConfig::default(),
        )
        .unwrap();
        let mut store = MemoryStore::default();
        let mut reply = String::new();

        execute_line(b"w* b900", &mut output, &mut store, &mut reply).unwrap();
        assert_eq!(
            reply,
            "channel 5 brightness = 900\r\n\
             channel 6 brightness = 900\r\n\
             channel 7 brightness = 900\r\n"
        );
        assert_eq!(output.get_calibration(ChannelId::new(6)), Some((2867, 900)));
        assert_eq!(output.get_calibration(ChannelId::new(4)), Some((2867, 1024)));

        // Every output was recomputed
        assert_eq!(queue.pending_count(), MULTILIGHT_CHANNELS);

        let saved = load_calibration::<_, MULTILIGHT_CHANNELS>(&mut store);
        assert_eq!(saved, calibration.snapshot());
        assert_eq!(
            saved.get(ChannelId::new(7)),
            Some(CalibrationEntry::new(2867, 900))
        );
    }

    #[test]
    fn test_console_feed() {
        let queue = UpdateQueue::<MULTILIGHT_CHANNELS>::new();
        let calibration = SharedCalibration::default();
        let mut output = LightOutput::new(
            queue.requester(),
            &calibration,
            &MULTILIGHT_MAP,
            NoThermalCutoff,
            OutputConfig::default(),
        )
        .unwrap();
        let mut store = MemoryStore::default();
        let mut console = CalibrationConsole::new();
        let mut reply = String::new();

        for byte in b"r1 g2400\r\n3 z1\r\n" {
            console
                .feed(*byte, &mut output, &mut store, &mut reply)
                .unwrap();
        }

        assert_eq!(
            reply,
            "channel 4 gamma = 2400\r\nInvalid command\r\n"
        );
        assert_eq!(output.get_calibration(ChannelId::new(4)), Some((2400, 1024)));
        assert!(store.data.is_some());
    }

    #[test]
    fn test_ignored_and_failed_lines_do_not_save() {
        let queue = UpdateQueue::<MULTILIGHT_CHANNELS>::new();
        let calibration = SharedCalibration::default();
        let mut output = LightOutput::new(
            queue.requester(),
            &calibration,
            &MULTILIGHT_MAP,
            NoThermalCutoff,
            OutputConfig::default(),
        )
        .unwrap();
        let mut store = MemoryStore::default();
        let mut reply = String::new();

        execute_line(b"3 g0", &mut output, &mut store, &mut reply).unwrap();
        execute_line(b"42 g1", &mut output, &mut store, &mut reply).unwrap();

        assert_eq!(reply, "Invalid channel specifier\r\n");
        assert!(store.data.is_none());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_failed_save_keeps_change() {
        let queue = UpdateQueue::<MULTILIGHT_CHANNELS>::new();
        let calibration = SharedCalibration::default();
        let mut output = LightOutput::new(
            queue.requester(),
            &calibration,
            &MULTILIGHT_MAP,
            NoThermalCutoff,
            OutputConfig::default(),
        )
        .unwrap();
        let mut store = MemoryStore {
            data: None,
            fail_writes: true,
        };
        let mut reply = String::new();

        execute_line(b"0 g1500", &mut output, &mut store, &mut reply).unwrap();
        assert_eq!(reply, "channel 0 gamma = 1500\r\n");
        assert_eq!(output.get_calibration(ChannelId::new(0)), Some((1500, 1024)));
    }
}
