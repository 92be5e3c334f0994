//! Loading and saving the calibration table.
//!
//! The store only moves bytes; the table's byte image is its `Pod` layout.
//! A failed or short read is never an error for the caller: the lights must
//! keep working, so the factory calibration is used instead.

use bytemuck::Zeroable;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::calibration::{CalibrationEntry, CalibrationTable};

/// Error type reported by a calibration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    /// Nothing was saved yet
    NotFound,
    /// The stored record has a different size than the table
    SizeMismatch,
    /// The storage driver failed
    Driver,
}

/// Non-volatile storage for the calibration record.
pub trait CalibrationStore {
    /// Read the stored record into `buf`.
    ///
    /// Returns the size of the stored record, which the caller compares with
    /// `buf.len()`.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, PersistenceError>;

    /// Replace the stored record with `data`.
    fn write(&mut self, data: &[u8]) -> Result<(), PersistenceError>;
}

/// Load the calibration table, falling back to defaults on any failure.
pub fn load_calibration<S: CalibrationStore, const N: usize>(store: &mut S) -> CalibrationTable<N> {
    let mut entries = [CalibrationEntry::zeroed(); N];
    let buf = bytemuck::bytes_of_mut(&mut entries);
    let expected = buf.len();

    match store.read(buf) {
        Ok(read) if read == expected => CalibrationTable::from_entries(entries),
        Ok(_read) => {
            #[cfg(feature = "esp32-log")]
            println!(
                "[load_calibration] size mismatch: {} != {}, using defaults",
                _read, expected
            );
            CalibrationTable::new()
        }
        Err(_err) => {
            #[cfg(feature = "esp32-log")]
            println!("[load_calibration] read failed: {:?}, using defaults", _err);
            CalibrationTable::new()
        }
    }
}

/// Persist the calibration table.
pub fn save_calibration<S: CalibrationStore, const N: usize>(
    store: &mut S,
    table: &CalibrationTable<N>,
) -> Result<(), PersistenceError> {
    store.write(table.as_bytes())
}
