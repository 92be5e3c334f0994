//! Static map of bulbs to hardware channels.
//!
//! Bulbs are numbered in map order. A mono bulb drives one white channel,
//! an RGB bulb drives three colour channels and may borrow a mono bulb as
//! its computed-white output.

use heapless::Vec;

use crate::duty::ChannelId;

/// Colour component of a bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    White,
    Red,
    Green,
    Blue,
}

/// Hardware channels driven by one bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulbChannels {
    Mono {
        white: ChannelId,
    },
    Rgb {
        red: ChannelId,
        green: ChannelId,
        blue: ChannelId,
        /// Mono bulb that outputs the white part of this bulb's colour
        computed_white: Option<u8>,
    },
}

impl BulbChannels {
    pub const fn mono(white: u8) -> Self {
        Self::Mono {
            white: ChannelId::new(white),
        }
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgb {
            red: ChannelId::new(red),
            green: ChannelId::new(green),
            blue: ChannelId::new(blue),
            computed_white: None,
        }
    }

    /// Use mono bulb `bulb` as the computed-white output.
    #[must_use]
    pub const fn with_computed_white(self, bulb: u8) -> Self {
        match self {
            Self::Rgb {
                red, green, blue, ..
            } => Self::Rgb {
                red,
                green,
                blue,
                computed_white: Some(bulb),
            },
            mono @ Self::Mono { .. } => mono,
        }
    }

    pub const fn is_rgb(self) -> bool {
        matches!(self, Self::Rgb { .. })
    }

    /// Channel of `component`, if the bulb has one.
    pub const fn channel(self, component: Component) -> Option<ChannelId> {
        match (self, component) {
            (Self::Mono { white }, Component::White) => Some(white),
            (Self::Rgb { red, .. }, Component::Red) => Some(red),
            (Self::Rgb { green, .. }, Component::Green) => Some(green),
            (Self::Rgb { blue, .. }, Component::Blue) => Some(blue),
            _ => None,
        }
    }

    /// All channels of the bulb in white or red, green, blue order.
    pub fn channels(self) -> Vec<ChannelId, 3> {
        let mut channels = Vec::new();
        match self {
            Self::Mono { white } => {
                let _ = channels.push(white);
            }
            Self::Rgb {
                red, green, blue, ..
            } => {
                let _ = channels.push(red);
                let _ = channels.push(green);
                let _ = channels.push(blue);
            }
        }
        channels
    }
}

/// Reason a channel map cannot drive a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChannelMap {
    /// A bulb names a channel the bank does not have
    ChannelOutOfBank { bulb: u8, channel: ChannelId },
    /// A computed-white link points to a missing or RGB bulb
    ComputedWhiteNotMono { bulb: u8, white: u8 },
}

/// Bulb to channel table for `BULBS` bulbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMap<const BULBS: usize> {
    bulbs: [BulbChannels; BULBS],
}

impl<const BULBS: usize> ChannelMap<BULBS> {
    pub const fn new(bulbs: [BulbChannels; BULBS]) -> Self {
        Self { bulbs }
    }

    pub const fn len(&self) -> usize {
        BULBS
    }

    pub const fn is_empty(&self) -> bool {
        BULBS == 0
    }

    pub fn bulb(&self, bulb: u8) -> Option<BulbChannels> {
        self.bulbs.get(usize::from(bulb)).copied()
    }

    pub fn channel(&self, bulb: u8, component: Component) -> Option<ChannelId> {
        self.bulb(bulb)?.channel(component)
    }

    /// Bulb number of the `n`-th (0-based) mono bulb.
    pub fn nth_mono(&self, n: usize) -> Option<u8> {
        self.bulbs_where(|b| !b.is_rgb()).nth(n)
    }

    /// Bulb number of the `n`-th (0-based) RGB bulb.
    pub fn nth_rgb(&self, n: usize) -> Option<u8> {
        self.bulbs_where(BulbChannels::is_rgb).nth(n)
    }

    pub fn mono_bulbs(&self) -> impl Iterator<Item = u8> + '_ {
        self.bulbs_where(|b| !b.is_rgb())
    }

    pub fn rgb_bulbs(&self) -> impl Iterator<Item = u8> + '_ {
        self.bulbs_where(BulbChannels::is_rgb)
    }

    /// Check every channel fits a bank of `channels` outputs and every
    /// computed-white reference names a mono bulb.
    #[allow(clippy::cast_possible_truncation)]
    pub fn validate(&self, channels: usize) -> Result<(), InvalidChannelMap> {
        for (index, bulb) in self.bulbs.iter().enumerate() {
            let bulb_number = index as u8;
            if let Some(channel) = bulb.channels().into_iter().find(|c| c.index() >= channels) {
                return Err(InvalidChannelMap::ChannelOutOfBank {
                    bulb: bulb_number,
                    channel,
                });
            }
            if let BulbChannels::Rgb {
                computed_white: Some(white),
                ..
            } = bulb
            {
                if !self.bulb(*white).is_some_and(|b| !b.is_rgb()) {
                    return Err(InvalidChannelMap::ComputedWhiteNotMono {
                        bulb: bulb_number,
                        white: *white,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn fits(&self, channels: usize) -> bool {
        self.validate(channels).is_ok()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn bulbs_where<'a>(
        &'a self,
        f: impl Fn(BulbChannels) -> bool + 'a,
    ) -> impl Iterator<Item = u8> + 'a {
        self.bulbs
            .iter()
            .enumerate()
            .filter(move |(_, bulb)| f(**bulb))
            .map(|(index, _)| index as u8)
    }
}

/// Number of channels on the reference board.
pub const MULTILIGHT_CHANNELS: usize = 12;

/// Number of bulbs on the reference board.
pub const MULTILIGHT_BULBS: usize = 6;

/// Three mono and three RGB bulbs on a 12-channel bank.
///
/// Mono bulb `n` doubles as the computed white of RGB bulb `n + 3`.
pub const MULTILIGHT_MAP: ChannelMap<MULTILIGHT_BULBS> = ChannelMap::new([
    BulbChannels::mono(7),
    BulbChannels::mono(6),
    BulbChannels::mono(5),
    BulbChannels::rgb(4, 3, 2).with_computed_white(0),
    BulbChannels::rgb(1, 0, 11).with_computed_white(1),
    BulbChannels::rgb(10, 9, 8).with_computed_white(2),
]);
