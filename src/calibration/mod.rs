//! Per-channel intensity calibration.
//!
//! Every hardware channel carries a `(gamma, brightness)` pair in 6.10 fixed
//! point. The table is read on every output recomputation and written by the
//! calibration console, possibly from an interrupt, so the shared form lives
//! behind a critical section.

mod curve;
pub mod log_table;

use core::cell::RefCell;

use bytemuck::{Pod, Zeroable};
use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use curve::{adjust_intensity, antilog};

use crate::duty::{ChannelId, UnknownChannel};

/// Fixed-point representation of 1.0 for gamma and brightness.
pub const FIXED_ONE: u16 = 1024;

/// Default gamma (2.8), suitable for most LEDs.
pub const DEFAULT_GAMMA: u16 = 2867;

/// Default brightness (1.0).
pub const DEFAULT_BRIGHTNESS: u16 = FIXED_ONE;

/// Calibration record of one channel.
///
/// The layout is the persisted byte image: two native-endian `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct CalibrationEntry {
    /// Exponent applied in the log domain (1024 = 1.0)
    pub gamma: u16,
    /// Linear output scale (1024 = 1.0)
    pub brightness: u16,
}

impl CalibrationEntry {
    /// Factory calibration used when nothing was persisted.
    pub const DEFAULT: Self = Self::new(DEFAULT_GAMMA, DEFAULT_BRIGHTNESS);

    /// Linear response with unity scale.
    pub const IDENTITY: Self = Self::new(FIXED_ONE, FIXED_ONE);

    pub const fn new(gamma: u16, brightness: u16) -> Self {
        Self { gamma, brightness }
    }
}

impl Default for CalibrationEntry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Calibration records for a bank of `N` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationTable<const N: usize> {
    entries: [CalibrationEntry; N],
}

impl<const N: usize> CalibrationTable<N> {
    /// Size of the persisted byte image.
    pub const BYTE_LEN: usize = N * size_of::<CalibrationEntry>();

    /// Table with factory defaults on every channel.
    pub const fn new() -> Self {
        Self::uniform(CalibrationEntry::DEFAULT)
    }

    /// Table with the same record on every channel.
    pub const fn uniform(entry: CalibrationEntry) -> Self {
        Self {
            entries: [entry; N],
        }
    }

    pub const fn from_entries(entries: [CalibrationEntry; N]) -> Self {
        Self { entries }
    }

    pub const fn entries(&self) -> &[CalibrationEntry; N] {
        &self.entries
    }

    pub fn get(&self, channel: ChannelId) -> Option<CalibrationEntry> {
        self.entries.get(channel.index()).copied()
    }

    pub fn set(&mut self, channel: ChannelId, entry: CalibrationEntry) -> Result<(), UnknownChannel> {
        let slot = self
            .entries
            .get_mut(channel.index())
            .ok_or(UnknownChannel(channel))?;
        *slot = entry;
        Ok(())
    }

    /// Corrected duty for `raw` on `channel`.
    ///
    /// Channels outside the bank use the default calibration.
    pub fn adjust_intensity(&self, raw: u8, channel: ChannelId) -> u16 {
        let entry = self.get(channel).unwrap_or(CalibrationEntry::DEFAULT);
        adjust_intensity(raw, entry)
    }

    /// Persisted byte image of the table.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.entries)
    }

    /// Rebuild a table from its byte image.
    ///
    /// Returns `None` unless `bytes` is exactly [`Self::BYTE_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned::<[CalibrationEntry; N]>(bytes)
            .ok()
            .map(Self::from_entries)
    }
}

impl<const N: usize> Default for CalibrationTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Calibration table shared between execution contexts.
///
/// Reads and writes of a record happen inside one critical section, so a
/// recomputation never sees a half-updated `(gamma, brightness)` pair.
pub struct SharedCalibration<const N: usize> {
    inner: Mutex<RefCell<CalibrationTable<N>>>,
}

impl<const N: usize> SharedCalibration<N> {
    pub const fn new(table: CalibrationTable<N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(table)),
        }
    }

    pub fn get(&self, channel: ChannelId) -> Option<CalibrationEntry> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().get(channel))
    }

    pub fn set(&self, channel: ChannelId, entry: CalibrationEntry) -> Result<(), UnknownChannel> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[SharedCalibration.set] channel {} gamma={} brightness={}",
            channel.raw(),
            entry.gamma,
            entry.brightness
        );
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().set(channel, entry))
    }

    /// Replace the record of `channel` with `f(record)` in one critical
    /// section.
    ///
    /// Returns the new record, or `None` if the channel is outside the bank.
    pub fn update(
        &self,
        channel: ChannelId,
        f: impl FnOnce(CalibrationEntry) -> CalibrationEntry,
    ) -> Option<CalibrationEntry> {
        let entry = critical_section::with(|cs| {
            let mut table = self.inner.borrow(cs).borrow_mut();
            let entry = f(table.get(channel)?);
            table.set(channel, entry).ok()?;
            Some(entry)
        })?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[SharedCalibration.update] channel {} gamma={} brightness={}",
            channel.raw(),
            entry.gamma,
            entry.brightness
        );
        Some(entry)
    }

    /// Copy of the whole table, e.g. for persisting.
    pub fn snapshot(&self) -> CalibrationTable<N> {
        critical_section::with(|cs| *self.inner.borrow(cs).borrow())
    }

    /// Replace the whole table, e.g. after loading from storage.
    pub fn replace(&self, table: CalibrationTable<N>) {
        critical_section::with(|cs| {
            *self.inner.borrow(cs).borrow_mut() = table;
        });
    }

    /// Run `f` against the table while holding the critical section.
    pub fn with<R>(&self, f: impl FnOnce(&CalibrationTable<N>) -> R) -> R {
        critical_section::with(|cs| f(&self.inner.borrow(cs).borrow()))
    }

    pub fn adjust_intensity(&self, raw: u8, channel: ChannelId) -> u16 {
        self.with(|table| table.adjust_intensity(raw, channel))
    }
}

impl<const N: usize> Default for SharedCalibration<N> {
    fn default() -> Self {
        Self::new(CalibrationTable::new())
    }
}
