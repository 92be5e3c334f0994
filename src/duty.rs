//! Duty-cycle values and hardware channel identifiers.

/// Highest duty value of the regular PWM range.
pub const PWM_MAX: u16 = 4095;

/// Register value that drives a channel permanently high.
pub const FULL_ON_REGISTER: u16 = 4096;

/// Index of one physical PWM output in the hardware bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(u8);

impl ChannelId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Error returned when a channel id lies outside the configured bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownChannel(pub ChannelId);

/// Duty cycle of a single PWM channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duty {
    /// Output held low for the whole period.
    #[default]
    FullOff,
    /// Regular duty in `1..=4095` counts of a 4096-count period.
    Level(u16),
    /// Output held high for the whole period.
    FullOn,
}

impl Duty {
    /// Decode a hardware register value (`0..=4096`).
    ///
    /// `0` is full off, `4096` and above is full on.
    pub const fn from_register(value: u16) -> Self {
        match value {
            0 => Self::FullOff,
            v if v >= FULL_ON_REGISTER => Self::FullOn,
            v => Self::Level(v),
        }
    }

    /// Encode as a hardware register value (`0..=4096`).
    pub const fn to_register(self) -> u16 {
        match self {
            Self::FullOff => 0,
            Self::Level(v) => {
                if v > PWM_MAX {
                    PWM_MAX
                } else {
                    v
                }
            }
            Self::FullOn => FULL_ON_REGISTER,
        }
    }

    /// Map a calibrated duty onto the hardware range.
    ///
    /// The top of the calibrated range becomes full on so that the output
    /// has no residual low pulse.
    pub const fn from_calibrated(value: u16) -> Self {
        if value >= PWM_MAX {
            Self::FullOn
        } else {
            Self::from_register(value)
        }
    }

    pub const fn is_off(self) -> bool {
        matches!(self, Self::FullOff)
    }
}
