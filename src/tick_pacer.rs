//! Phase controller timing.
//!
//! [`PwmTiming`] derives the tick rate a hardware timer must be programmed
//! with. [`TickPacer`] drives the controller from a monotonic clock on
//! targets without a spare timer interrupt; the caller is responsible for
//! sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::HardwareChannelSink;
use crate::duty::{ChannelId, Duty};
use crate::scheduler::PhaseController;

/// Default PWM base frequency (about 2 kHz).
pub const DEFAULT_PWM_FREQUENCY_HZ: u32 = 2_000;

/// Counts in one PWM period of a 12-bit bank.
pub const DEFAULT_PERIOD_COUNTS: u16 = 4096;

/// PWM bank timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmTiming {
    /// PWM base frequency
    pub frequency_hz: u32,
    /// Timer counts in one PWM period
    pub period_counts: u16,
}

impl PwmTiming {
    pub const DEFAULT: Self = Self {
        frequency_hz: DEFAULT_PWM_FREQUENCY_HZ,
        period_counts: DEFAULT_PERIOD_COUNTS,
    };

    /// Tick rate needed to visit every channel once per PWM period.
    pub const fn tick_rate_hz(self, channels: usize) -> u64 {
        self.frequency_hz as u64 * channels as u64
    }

    /// Time between two phase controller ticks.
    pub const fn tick_interval(self, channels: usize) -> Duration {
        let rate = self.tick_rate_hz(channels);
        if rate == 0 {
            return Duration::from_ticks(0);
        }
        Duration::from_hz(rate)
    }

    /// Reload value for a phase timer clocked like the PWM timers.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn reload_counts(self, channels: usize) -> u16 {
        if channels == 0 {
            return self.period_counts;
        }
        (self.period_counts as usize / channels) as u16
    }
}

impl Default for PwmTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a pacer poll.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Register written by this tick, if any.
    pub written: Option<(ChannelId, Duty)>,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Clock-driven phase controller.
///
/// # Usage
///
/// ```ignore
/// let mut pacer = TickPacer::new(controller, PwmTiming::DEFAULT);
///
/// loop {
///     let result = pacer.poll(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct TickPacer<'a, S: HardwareChannelSink, const N: usize> {
    controller: PhaseController<'a, S, N>,
    next_tick: Instant,
    tick_interval: Duration,
}

impl<'a, S: HardwareChannelSink, const N: usize> TickPacer<'a, S, N> {
    /// Create a pacer ticking `N` times per PWM period.
    pub const fn new(controller: PhaseController<'a, S, N>, timing: PwmTiming) -> Self {
        Self::with_tick_interval(controller, timing.tick_interval(N))
    }

    /// Create a pacer with a custom tick interval.
    pub const fn with_tick_interval(
        controller: PhaseController<'a, S, N>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            controller,
            next_tick: Instant::from_ticks(0),
            tick_interval,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// After a stall of more than two intervals the backlog is dropped
    /// instead of being caught up, so updates stay one per interval.
    pub fn poll(&mut self, now: Instant) -> TickResult {
        let max_drift = self.tick_interval + self.tick_interval;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let written = self.controller.tick();

        self.next_tick += self.tick_interval;
        let sleep_duration = self.next_tick.saturating_duration_since(now);

        TickResult {
            written,
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub const fn controller(&self) -> &PhaseController<'a, S, N> {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut PhaseController<'a, S, N> {
        &mut self.controller
    }
}
