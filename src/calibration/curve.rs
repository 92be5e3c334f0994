//! Gamma and brightness correction in the log domain.
//!
//! A power law `x^gamma` becomes a multiplication once `x` is in log form,
//! so the whole curve is two table lookups and two fixed-point products.

use super::CalibrationEntry;
use super::log_table::{LOG_TABLE_LONG, LOG_TABLE_SHORT};
use crate::duty::PWM_MAX;

/// Divide a 22.10 fixed-point product by 1024, rounding half up.
#[inline]
const fn round_fixed(value: u32) -> u32 {
    (value >> 10) + ((value & 512) >> 9)
}

/// Inverse of the long log table.
///
/// Returns the duty `i` in `1..=4095` whose `LOG_TABLE_LONG[i]` is closest
/// to `y`, or `0` when `y` lies beyond the darkest representable duty.
#[allow(clippy::cast_possible_truncation)]
pub fn antilog(y: u32) -> u32 {
    if y > u32::from(LOG_TABLE_LONG[1]) {
        return 0;
    }

    // LOG_TABLE_LONG[left] >= y >= LOG_TABLE_LONG[right]
    let mut left = 1;
    let mut right = PWM_MAX as usize;
    while left + 1 != right {
        let mid = (left + right) >> 1;
        if u32::from(LOG_TABLE_LONG[mid]) < y {
            right = mid;
        } else {
            left = mid;
        }
    }

    let diff_left = u32::from(LOG_TABLE_LONG[left]) - y;
    let diff_right = y - u32::from(LOG_TABLE_LONG[right]);
    if diff_left < diff_right {
        left as u32
    } else {
        right as u32
    }
}

/// Map a raw 8-bit intensity to a 12-bit duty using one channel's calibration.
///
/// `0` is always `0`. Any other input yields a value in `1..=4095`, so a
/// channel that is nominally on never reaches a zero duty.
#[allow(clippy::cast_possible_truncation)]
pub fn adjust_intensity(raw: u8, calibration: CalibrationEntry) -> u16 {
    if raw == 0 {
        return 0;
    }

    let y = u32::from(LOG_TABLE_SHORT[usize::from(raw)]) * u32::from(calibration.gamma);
    let y = round_fixed(y);

    let x = antilog(y) * u32::from(calibration.brightness);
    let x = round_fixed(x);

    x.clamp(1, u32::from(PWM_MAX)) as u16
}
