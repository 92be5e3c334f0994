mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_pwm::HardwareChannelSink;
    use myrtio_light_pwm::duty::{ChannelId, Duty};
    use myrtio_light_pwm::pending::UpdateQueue;
    use myrtio_light_pwm::scheduler::PhaseController;
    use myrtio_light_pwm::tick_pacer::{PwmTiming, TickPacer};

    #[derive(Default)]
    struct CountingSink {
        writes: usize,
    }

    impl HardwareChannelSink for CountingSink {
        fn set_duty(&mut self, _channel: ChannelId, _duty: u16) {
            self.writes += 1;
        }

        fn set_full_on(&mut self, _channel: ChannelId) {
            self.writes += 1;
        }

        fn set_full_off(&mut self, _channel: ChannelId) {
            self.writes += 1;
        }
    }

    #[test]
    fn test_pwm_timing() {
        let timing = PwmTiming::default();
        assert_eq!(timing.frequency_hz, 2_000);
        assert_eq!(timing.tick_rate_hz(12), 24_000);
        assert_eq!(timing.reload_counts(12), 341);
        assert_eq!(timing.reload_counts(16), 256);
        assert_eq!(timing.tick_interval(16), Duration::from_hz(32_000));
        assert_eq!(timing.tick_interval(0), Duration::from_ticks(0));
    }

    #[test]
    fn test_pacer_schedule() {
        let queue = UpdateQueue::<4>::new();
        let controller = PhaseController::new(&queue, CountingSink::default());
        let mut pacer = TickPacer::with_tick_interval(controller, Duration::from_micros(100));

        let result = pacer.poll(Instant::from_micros(0));
        assert_eq!(result.next_deadline, Instant::from_micros(100));
        assert_eq!(result.sleep_duration, Duration::from_micros(100));

        let result = pacer.poll(Instant::from_micros(100));
        assert_eq!(result.next_deadline, Instant::from_micros(200));

        // A late poll shortens the next sleep
        let result = pacer.poll(Instant::from_micros(250));
        assert_eq!(result.next_deadline, Instant::from_micros(300));
        assert_eq!(result.sleep_duration, Duration::from_micros(50));

        assert_eq!(pacer.controller().cursor(), 3);
    }

    #[test]
    fn test_pacer_drops_backlog() {
        let queue = UpdateQueue::<4>::new();
        let controller = PhaseController::new(&queue, CountingSink::default());
        let mut pacer = TickPacer::with_tick_interval(controller, Duration::from_micros(100));

        pacer.poll(Instant::from_micros(0));
        let result = pacer.poll(Instant::from_micros(1_000));
        assert_eq!(result.next_deadline, Instant::from_micros(1_100));
        assert_eq!(result.sleep_duration, Duration::from_micros(100));
    }

    #[test]
    fn test_pacer_writes_pending() {
        let queue = UpdateQueue::<2>::new();
        queue
            .request_update(ChannelId::new(1), Duty::Level(300))
            .unwrap();
        let controller = PhaseController::new(&queue, CountingSink::default());
        let mut pacer = TickPacer::new(controller, PwmTiming::DEFAULT);
        assert_eq!(pacer.tick_interval(), Duration::from_hz(4_000));

        let first = pacer.poll(Instant::from_ticks(0));
        assert_eq!(first.written, None);
        let second = pacer.poll(first.next_deadline);
        assert_eq!(second.written, Some((ChannelId::new(1), Duty::Level(300))));
        assert_eq!(pacer.controller().sink().writes, 1);
    }
}
