//! Bulb-level output orchestration.
//!
//! Turns the logical `{on, level, colour}` of a bulb into calibrated duty
//! requests for its channels. Hardware is only touched later, by the phase
//! controller.

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::calibration::{CalibrationEntry, SharedCalibration};
use crate::channel_map::{BulbChannels, ChannelMap, InvalidChannelMap};
use crate::color::{ComputedWhite, Rgb, WHITE, scale_by_level, split_white};
use crate::duty::{ChannelId, Duty, UnknownChannel};
use crate::pending::UpdateRequester;

/// Highest level a ZigBee level-control cluster reports.
pub const MAX_LEVEL: u8 = 254;

/// Error returned when a bulb number lies outside the channel map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownBulb(pub u8);

/// Source of the overheat cutoff signal.
pub trait ThermalMonitor {
    /// `true` while outputs must be forced off.
    fn thermal_shutoff(&self) -> bool;
}

impl ThermalMonitor for AtomicBool {
    fn thermal_shutoff(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: ThermalMonitor + ?Sized> ThermalMonitor for &T {
    fn thermal_shutoff(&self) -> bool {
        (**self).thermal_shutoff()
    }
}

/// Thermal monitor for fixtures without a temperature sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThermalCutoff;

impl ThermalMonitor for NoThermalCutoff {
    fn thermal_shutoff(&self) -> bool {
        false
    }
}

/// Output policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Drive a zero colour component with the hardware full-off state
    /// instead of the lowest calibrated duty.
    pub allow_hardware_full_off: bool,
    /// Cap the bulb level at [`MAX_LEVEL`] before lookup.
    pub cap_level: bool,
    /// Computed white mode of RGB bulbs.
    pub computed_white: ComputedWhite,
}

/// Logical state of one bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulbState {
    pub on: bool,
    pub level: u8,
    /// Last requested colour; ignored by mono bulbs
    pub color: Rgb,
}

impl BulbState {
    /// State before the first request: off, full level, white.
    pub const INITIAL: Self = Self {
        on: false,
        level: 255,
        color: WHITE,
    };
}

impl Default for BulbState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Output orchestrator for a bank of `CHANNELS` outputs and `BULBS` bulbs.
pub struct LightOutput<'a, T: ThermalMonitor, const CHANNELS: usize, const BULBS: usize> {
    // External dependencies and configuration
    updates: UpdateRequester<'a, CHANNELS>,
    calibration: &'a SharedCalibration<CHANNELS>,
    map: &'a ChannelMap<BULBS>,
    thermal: T,
    config: OutputConfig,

    // Internal state
    bulbs: [BulbState; BULBS],
    /// Mono bulbs currently carrying the computed white of an RGB bulb
    white_driven: [bool; BULBS],
    overheated: bool,
}

impl<'a, T: ThermalMonitor, const CHANNELS: usize, const BULBS: usize>
    LightOutput<'a, T, CHANNELS, BULBS>
{
    /// Create an output for `map`.
    ///
    /// Fails if the map names channels outside the bank or links a computed
    /// white to anything but a mono bulb.
    pub fn new(
        updates: UpdateRequester<'a, CHANNELS>,
        calibration: &'a SharedCalibration<CHANNELS>,
        map: &'a ChannelMap<BULBS>,
        thermal: T,
        config: OutputConfig,
    ) -> Result<Self, InvalidChannelMap> {
        map.validate(CHANNELS)?;
        Ok(Self {
            updates,
            calibration,
            map,
            thermal,
            config,
            bulbs: [BulbState::INITIAL; BULBS],
            white_driven: [false; BULBS],
            overheated: false,
        })
    }

    /// Request full off on every mapped channel.
    ///
    /// The first sweep of the phase controller then drives the hardware to
    /// a known state.
    pub fn init(&mut self) {
        for bulb in 0..BULBS {
            if let Some(channels) = self.map.bulb(bulb_number(bulb)) {
                self.request_all(channels, Duty::FullOff);
            }
        }
    }

    /// Set the logical state of a bulb and recompute its outputs.
    ///
    /// `rgb` is ignored by mono bulbs; `None` keeps the previous colour of
    /// an RGB bulb.
    pub fn set_bulb_state(
        &mut self,
        bulb: u8,
        on: bool,
        level: u8,
        rgb: Option<Rgb>,
    ) -> Result<(), UnknownBulb> {
        let channels = self.map.bulb(bulb).ok_or(UnknownBulb(bulb))?;
        self.white_driven[usize::from(bulb)] = false;
        let state = &mut self.bulbs[usize::from(bulb)];
        state.on = on;
        state.level = level;
        if let (true, Some(color)) = (channels.is_rgb(), rgb) {
            state.color = color;
        }

        if let Some(white_bulb) = self.computed_white_bulb(channels) {
            let state = self.bulbs[usize::from(bulb)];
            let (_, white) = split_white(state.color, self.config.computed_white);
            // The link is checked by `ChannelMap::validate` in `new`
            self.bulbs[usize::from(white_bulb)] = BulbState {
                on,
                level: scale_by_level(white, level),
                color: WHITE,
            };
            self.white_driven[usize::from(white_bulb)] = true;
            self.refresh(white_bulb)?;
        }

        self.refresh(bulb)
    }

    /// Recompute and request the outputs of one bulb from its stored state.
    pub fn refresh(&mut self, bulb: u8) -> Result<(), UnknownBulb> {
        let channels = self.map.bulb(bulb).ok_or(UnknownBulb(bulb))?;
        let state = self.bulbs[usize::from(bulb)];
        let overheated = self.poll_thermal();

        if !state.on || overheated {
            self.request_all(channels, Duty::FullOff);
            return Ok(());
        }

        match channels {
            // A computed white is a colour component, not a bulb level
            BulbChannels::Mono { white } if self.white_driven[usize::from(bulb)] => {
                let duty = self.channel_duty(state.level, white);
                self.request(white, duty);
            }
            BulbChannels::Mono { white } => {
                let duty = self.channel_duty(self.effective_level(state.level), white);
                self.request(white, duty);
            }
            BulbChannels::Rgb {
                red, green, blue, ..
            } => {
                let level = self.effective_level(state.level);
                let color = if self.computed_white_bulb(channels).is_some() {
                    split_white(state.color, self.config.computed_white).0
                } else {
                    state.color
                };
                for (component, channel) in [(color.r, red), (color.g, green), (color.b, blue)] {
                    let duty = self.channel_duty(scale_by_level(component, level), channel);
                    self.request(channel, duty);
                }
            }
        }
        Ok(())
    }

    /// Recompute the outputs of every bulb.
    pub fn refresh_all(&mut self) {
        for bulb in 0..BULBS {
            let _ = self.refresh(bulb_number(bulb));
        }
    }

    /// Update one channel's calibration and recompute all outputs.
    pub fn set_calibration(
        &mut self,
        channel: ChannelId,
        gamma: u16,
        brightness: u16,
    ) -> Result<(), UnknownChannel> {
        self.calibration
            .set(channel, CalibrationEntry::new(gamma, brightness))?;
        self.refresh_all();
        Ok(())
    }

    /// `(gamma, brightness)` of one channel.
    pub fn get_calibration(&self, channel: ChannelId) -> Option<(u16, u16)> {
        self.calibration
            .get(channel)
            .map(|entry| (entry.gamma, entry.brightness))
    }

    pub fn bulb_state(&self, bulb: u8) -> Option<BulbState> {
        self.bulbs.get(usize::from(bulb)).copied()
    }

    pub const fn calibration(&self) -> &'a SharedCalibration<CHANNELS> {
        self.calibration
    }

    pub const fn channel_map(&self) -> &'a ChannelMap<BULBS> {
        self.map
    }

    pub const fn config(&self) -> OutputConfig {
        self.config
    }

    /// Thermal cutoff state seen by the last refresh.
    pub const fn is_overheated(&self) -> bool {
        self.overheated
    }

    /// Duty for one channel at an already level-scaled intensity.
    fn channel_duty(&self, intensity: u8, channel: ChannelId) -> Duty {
        let intensity = match intensity {
            0 if self.config.allow_hardware_full_off => return Duty::FullOff,
            0 => 1,
            i => i,
        };
        Duty::from_calibrated(self.calibration.adjust_intensity(intensity, channel))
    }

    fn effective_level(&self, level: u8) -> u8 {
        let level = if self.config.cap_level {
            level.min(MAX_LEVEL)
        } else {
            level
        };
        level.max(1)
    }

    fn computed_white_bulb(&self, channels: BulbChannels) -> Option<u8> {
        if self.config.computed_white == ComputedWhite::Disabled {
            return None;
        }
        match channels {
            BulbChannels::Rgb { computed_white, .. } => computed_white,
            BulbChannels::Mono { .. } => None,
        }
    }

    fn poll_thermal(&mut self) -> bool {
        let shutoff = self.thermal.thermal_shutoff();
        if shutoff != self.overheated {
            #[cfg(feature = "esp32-log")]
            println!("[LightOutput] thermal shutoff {}", if shutoff { "engaged" } else { "released" });
            self.overheated = shutoff;
        }
        shutoff
    }

    fn request_all(&self, channels: BulbChannels, duty: Duty) {
        for channel in channels.channels() {
            self.request(channel, duty);
        }
    }

    fn request(&self, channel: ChannelId, duty: Duty) {
        // Map channels are checked against the bank in `new`
        let _ = self.updates.request_update(channel, duty);
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn bulb_number(index: usize) -> u8 {
    index as u8
}
