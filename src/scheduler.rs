//! Phase-staggered application of duty updates.
//!
//! Writing every duty register at once steps the load current of all LED
//! drivers in the same instant. The phase controller is ticked
//! `CHANNELS` times per PWM period and services one channel per tick, so a
//! full sweep covers the bank once per period and at most one register is
//! written per tick.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::HardwareChannelSink;
use crate::duty::{ChannelId, Duty};
use crate::pending::UpdateQueue;

/// Round-robin committer of pending duty updates.
///
/// Owns the hardware sink and the committed duty of every channel. Call
/// [`PhaseController::tick`] from the periodic timer interrupt.
pub struct PhaseController<'a, S: HardwareChannelSink, const N: usize> {
    queue: &'a UpdateQueue<N>,
    sink: S,
    committed: [Duty; N],
    cursor: usize,
}

impl<'a, S: HardwareChannelSink, const N: usize> PhaseController<'a, S, N> {
    /// Create a controller with every channel committed as full off.
    ///
    /// Nothing is written to the sink until a tick finds a pending update.
    pub const fn new(queue: &'a UpdateQueue<N>, sink: S) -> Self {
        const {
            assert!(N > 0, "channel bank must not be empty");
            assert!(N <= 256, "channel ids are 8-bit");
        }
        Self {
            queue,
            sink,
            committed: [Duty::FullOff; N],
            cursor: 0,
        }
    }

    /// Service the channel under the cursor and advance the cursor.
    ///
    /// Returns the channel and duty written to hardware, if any.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self) -> Option<(ChannelId, Duty)> {
        let index = self.cursor;
        self.cursor = (index + 1) % N;

        let duty = self.queue.take(index)?;
        let channel = ChannelId::new(index as u8);
        self.committed[index] = duty;
        self.sink.apply(channel, duty);

        #[cfg(feature = "esp32-log")]
        println!("[PhaseController.tick] channel {} <- {:?}", index, duty);

        Some((channel, duty))
    }

    /// Run one full sweep over the bank.
    ///
    /// Returns the number of register writes.
    pub fn sweep(&mut self) -> usize {
        (0..N).filter(|_| self.tick().is_some()).count()
    }

    /// Index of the channel the next tick will service.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Duty currently driving `channel`.
    pub fn committed(&self, channel: ChannelId) -> Option<Duty> {
        self.committed.get(channel.index()).copied()
    }

    pub const fn committed_duties(&self) -> &[Duty; N] {
        &self.committed
    }

    pub const fn queue(&self) -> &'a UpdateQueue<N> {
        self.queue
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
