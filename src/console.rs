//! Line-oriented calibration console.
//!
//! Commands take the form `<channel specifier> <command><value>`:
//!
//! - `3 g2400`: raw channel 3
//! - `* b900`: every channel
//! - `r2 g2600`: red channel of the second RGB bulb
//! - `w* b1024`: every mono bulb
//! - `a1 g2867`: all colour channels of the first RGB bulb
//!
//! `g` sets gamma, `b` sets brightness (both 1024 = 1.0). A zero or missing
//! value is ignored. Accepted changes are echoed per channel, applied to the
//! outputs and saved.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::calibration::CalibrationEntry;
use crate::channel_map::{ChannelMap, Component};
use crate::duty::ChannelId;
use crate::output::{LightOutput, ThermalMonitor};
use crate::persistence::{CalibrationStore, save_calibration};

/// Longest accepted line; further characters are dropped.
pub const MAX_LINE_LEN: usize = 40;

/// Parse error of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    CommandTooShort,
    InvalidChannel,
    InvalidCommand,
}

impl ConsoleError {
    /// Response text sent back for the error.
    pub const fn message(self) -> &'static str {
        match self {
            Self::CommandTooShort => "Command too short",
            Self::InvalidChannel => "Invalid channel specifier",
            Self::InvalidCommand => "Invalid command",
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Calibration parameter changed by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Gamma,
    Brightness,
}

impl Parameter {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gamma => "gamma",
            Self::Brightness => "brightness",
        }
    }

    /// `entry` with this parameter replaced by `value`.
    pub const fn apply(self, entry: CalibrationEntry, value: u16) -> CalibrationEntry {
        match self {
            Self::Gamma => CalibrationEntry::new(value, entry.brightness),
            Self::Brightness => CalibrationEntry::new(entry.gamma, value),
        }
    }
}

/// Set of channels selected by a command; bit `n` is channel `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelMask(u32);

impl ChannelMask {
    pub const EMPTY: Self = Self(0);

    /// Every channel of a bank of `channels` outputs.
    pub const fn all(channels: usize) -> Self {
        if channels >= 32 {
            Self(u32::MAX)
        } else {
            Self((1 << channels) - 1)
        }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, channel: ChannelId) -> bool {
        channel.index() < 32 && self.0 & (1 << channel.index()) != 0
    }

    pub const fn with(self, channel: ChannelId) -> Self {
        if channel.index() < 32 {
            Self(self.0 | (1 << channel.index()))
        } else {
            self
        }
    }

    /// Selected channels in ascending order.
    pub fn iter(self) -> impl Iterator<Item = ChannelId> {
        (0..32u8)
            .map(ChannelId::new)
            .filter(move |channel| self.contains(*channel))
    }
}

/// A parsed calibration command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationCommand {
    pub channels: ChannelMask,
    pub parameter: Parameter,
    pub value: u16,
}

/// Parse one console line.
///
/// Returns `Ok(None)` for a well-formed command whose value is zero or
/// missing, which is ignored.
pub fn parse_command<const BULBS: usize>(
    line: &[u8],
    channels: usize,
    map: &ChannelMap<BULBS>,
) -> Result<Option<CalibrationCommand>, ConsoleError> {
    if line.len() < 2 {
        return Err(ConsoleError::CommandTooShort);
    }

    let (mask, rest) = parse_channel_specifier(line, channels, map)?;

    let rest = skip_while(rest, |c| c == b' ');
    let parameter = match rest.first() {
        Some(b'g') => Parameter::Gamma,
        Some(b'b') => Parameter::Brightness,
        _ => return Err(ConsoleError::InvalidCommand),
    };
    let (value, _) = parse_number(&rest[1..]).ok_or(ConsoleError::InvalidCommand)?;
    if value == 0 {
        return Ok(None);
    }

    Ok(Some(CalibrationCommand {
        channels: mask,
        parameter,
        value,
    }))
}

fn parse_channel_specifier<'l, const BULBS: usize>(
    line: &'l [u8],
    channels: usize,
    map: &ChannelMap<BULBS>,
) -> Result<(ChannelMask, &'l [u8]), ConsoleError> {
    match line[0] {
        b'0'..=b'9' => {
            let (n, rest) = parse_number(line).ok_or(ConsoleError::InvalidChannel)?;
            let n = usize::from(n);
            if n >= channels.min(32) {
                return Err(ConsoleError::InvalidChannel);
            }
            #[allow(clippy::cast_possible_truncation)]
            let mask = ChannelMask::EMPTY.with(ChannelId::new(n as u8));
            Ok((mask, rest))
        }
        b'*' => Ok((ChannelMask::all(channels), &line[1..])),
        kind @ (b'r' | b'g' | b'b' | b'w' | b'a') => {
            let mono = kind == b'w';
            let (bulbs, rest) = match line[1] {
                b'0'..=b'9' => {
                    let (n, rest) = parse_number(&line[1..]).ok_or(ConsoleError::InvalidChannel)?;
                    // Bulb numbers start at 1
                    let index = usize::from(n).checked_sub(1).ok_or(ConsoleError::InvalidChannel)?;
                    let bulb = if mono {
                        map.nth_mono(index)
                    } else {
                        map.nth_rgb(index)
                    };
                    let bulb = bulb.ok_or(ConsoleError::InvalidChannel)?;
                    (BulbSelection::One(bulb), rest)
                }
                b'*' => (BulbSelection::All { mono }, &line[2..]),
                _ => return Err(ConsoleError::InvalidChannel),
            };

            let components: &[Component] = match kind {
                b'a' => &[Component::Red, Component::Green, Component::Blue],
                b'r' => &[Component::Red],
                b'g' => &[Component::Green],
                b'b' => &[Component::Blue],
                _ => &[Component::White],
            };

            let mut mask = ChannelMask::EMPTY;
            bulbs.for_each(map, |bulb| {
                for component in components {
                    if let Some(channel) = map.channel(bulb, *component) {
                        mask = mask.with(channel);
                    }
                }
            });
            Ok((mask, rest))
        }
        _ => Err(ConsoleError::InvalidChannel),
    }
}

enum BulbSelection {
    One(u8),
    All { mono: bool },
}

impl BulbSelection {
    fn for_each<const BULBS: usize>(self, map: &ChannelMap<BULBS>, mut f: impl FnMut(u8)) {
        match self {
            Self::One(bulb) => f(bulb),
            Self::All { mono: true } => map.mono_bulbs().for_each(f),
            Self::All { mono: false } => map.rgb_bulbs().for_each(f),
        }
    }
}

/// Parse a decimal `u16` after optional leading whitespace.
///
/// No digits parse as `0`. Returns `None` on overflow.
fn parse_number(input: &[u8]) -> Option<(u16, &[u8])> {
    let input = skip_while(input, |c| matches!(c, b' ' | b'\r' | b'\n' | b'\t'));
    let digits = input.iter().take_while(|c| c.is_ascii_digit()).count();
    let value = input[..digits].iter().try_fold(0u16, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u16::from(digit - b'0'))
    })?;
    Some((value, &input[digits..]))
}

fn skip_while(input: &[u8], f: impl Fn(u8) -> bool) -> &[u8] {
    let skip = input.iter().take_while(|c| f(**c)).count();
    &input[skip..]
}

/// Accumulates received bytes into lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    line: Vec<u8, MAX_LINE_LEN>,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self { line: Vec::new() }
    }

    /// Add a received byte.
    ///
    /// Returns the completed line on `\r` or `\n`. Empty lines are skipped,
    /// so a CRLF pair ends only one line.
    pub fn push(&mut self, byte: u8) -> Option<Vec<u8, MAX_LINE_LEN>> {
        if byte == b'\r' || byte == b'\n' {
            let line = core::mem::take(&mut self.line);
            return (!line.is_empty()).then_some(line);
        }
        // Overlong lines are truncated
        let _ = self.line.push(byte);
        None
    }
}

/// Calibration console bound to a light output.
#[derive(Debug, Default)]
pub struct CalibrationConsole {
    line: LineBuffer,
}

impl CalibrationConsole {
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Feed one received byte, executing a command when a line completes.
    ///
    /// Responses are written to `reply`.
    pub fn feed<T, S, W, const CHANNELS: usize, const BULBS: usize>(
        &mut self,
        byte: u8,
        output: &mut LightOutput<'_, T, CHANNELS, BULBS>,
        store: &mut S,
        reply: &mut W,
    ) -> fmt::Result
    where
        T: ThermalMonitor,
        S: CalibrationStore,
        W: fmt::Write,
    {
        match self.line.push(byte) {
            Some(line) => execute_line(&line, output, store, reply),
            None => Ok(()),
        }
    }
}

/// Parse and execute one console line.
pub fn execute_line<T, S, W, const CHANNELS: usize, const BULBS: usize>(
    line: &[u8],
    output: &mut LightOutput<'_, T, CHANNELS, BULBS>,
    store: &mut S,
    reply: &mut W,
) -> fmt::Result
where
    T: ThermalMonitor,
    S: CalibrationStore,
    W: fmt::Write,
{
    let command = match parse_command(line, CHANNELS, output.channel_map()) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(()),
        Err(err) => {
            #[cfg(feature = "esp32-log")]
            println!("[CalibrationConsole] {}", err);
            return write!(reply, "{}\r\n", err);
        }
    };

    let calibration = output.calibration();
    for channel in command.channels.iter() {
        let updated = calibration.update(channel, |entry| {
            command.parameter.apply(entry, command.value)
        });
        if updated.is_none() {
            continue;
        }
        write!(
            reply,
            "channel {} {} = {}\r\n",
            channel.raw(),
            command.parameter.name(),
            command.value
        )?;
    }

    output.refresh_all();

    if let Err(_err) = save_calibration(store, &calibration.snapshot()) {
        #[cfg(feature = "esp32-log")]
        println!("[CalibrationConsole] save failed: {:?}", _err);
    }
    Ok(())
}
