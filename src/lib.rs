#![no_std]

pub mod calibration;
pub mod channel_map;
pub mod color;
pub mod console;
pub mod duty;
pub mod output;
pub mod pending;
pub mod persistence;
pub mod scheduler;
pub mod tick_pacer;

pub use calibration::{CalibrationEntry, CalibrationTable, SharedCalibration, adjust_intensity};
pub use channel_map::{BulbChannels, ChannelMap, Component, InvalidChannelMap, MULTILIGHT_MAP};
pub use console::{CalibrationConsole, ConsoleError};
pub use duty::{ChannelId, Duty, UnknownChannel};
pub use output::{
    BulbState, LightOutput, NoThermalCutoff, OutputConfig, ThermalMonitor, UnknownBulb,
};
pub use pending::{UpdateQueue, UpdateRequester};
pub use persistence::{CalibrationStore, PersistenceError, load_calibration, save_calibration};
pub use scheduler::PhaseController;
pub use tick_pacer::{PwmTiming, TickPacer};

pub use color::{ComputedWhite, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract PWM bank driver trait
///
/// Implement this trait to support different PWM peripherals.
/// Only the phase controller calls it, at most once per tick.
pub trait HardwareChannelSink {
    /// Write a regular duty in `1..=4095` counts
    fn set_duty(&mut self, channel: ChannelId, duty: u16);

    /// Hold the output high for the whole period
    fn set_full_on(&mut self, channel: ChannelId);

    /// Hold the output low for the whole period
    fn set_full_off(&mut self, channel: ChannelId);

    /// Write `duty` using the matching register form.
    fn apply(&mut self, channel: ChannelId, duty: Duty) {
        match duty {
            Duty::FullOff => self.set_full_off(channel),
            Duty::Level(value) => self.set_duty(channel, value),
            Duty::FullOn => self.set_full_on(channel),
        }
    }
}

impl<S: HardwareChannelSink + ?Sized> HardwareChannelSink for &mut S {
    fn set_duty(&mut self, channel: ChannelId, duty: u16) {
        (**self).set_duty(channel, duty);
    }

    fn set_full_on(&mut self, channel: ChannelId) {
        (**self).set_full_on(channel);
    }

    fn set_full_off(&mut self, channel: ChannelId) {
        (**self).set_full_off(channel);
    }
}
