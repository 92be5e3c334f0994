//! Lock-free handoff of pending duty updates.
//!
//! One cell per channel: the foreground writes a value and raises the dirty
//! flag, the tick context clears the flag and reads the value. Only atomic
//! loads and stores are used, so the cells also work on cores without
//! compare-and-swap.
//!
//! The tick side clears the flag *before* reading the value. A write that
//! races with the tick is therefore either picked up now or leaves the flag
//! raised for the next sweep; it is never lost.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::duty::{ChannelId, Duty, UnknownChannel};

struct PendingCell {
    duty: AtomicU16,
    dirty: AtomicBool,
}

impl PendingCell {
    const fn new() -> Self {
        Self {
            duty: AtomicU16::new(0),
            dirty: AtomicBool::new(false),
        }
    }

    fn store(&self, duty: Duty) {
        self.duty.store(duty.to_register(), Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn take(&self) -> Option<Duty> {
        if !self.dirty.load(Ordering::SeqCst) {
            return None;
        }
        self.dirty.store(false, Ordering::SeqCst);
        Some(Duty::from_register(self.duty.load(Ordering::SeqCst)))
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }
}

/// Pending duty values for a bank of `N` channels.
///
/// Updates to the same channel collapse: only the last value written before
/// the tick reaches the channel is ever applied.
pub struct UpdateQueue<const N: usize> {
    cells: [PendingCell; N],
}

impl<const N: usize> UpdateQueue<N> {
    /// Create a queue with nothing pending.
    pub const fn new() -> Self {
        Self {
            cells: [const { PendingCell::new() }; N],
        }
    }

    /// Get a requester handle for this queue.
    ///
    /// Requesters are cheap to copy and may be handed to any foreground code.
    pub const fn requester(&self) -> UpdateRequester<'_, N> {
        UpdateRequester { queue: self }
    }

    /// Number of channels in the bank.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Mark `duty` as the next value for `channel`.
    ///
    /// Overwrites any value that was not applied yet.
    pub fn request_update(&self, channel: ChannelId, duty: Duty) -> Result<(), UnknownChannel> {
        let cell = self.cells.get(channel.index()).ok_or(UnknownChannel(channel))?;
        cell.store(duty);
        Ok(())
    }

    /// Check if `channel` has a value waiting to be applied.
    pub fn is_pending(&self, channel: ChannelId) -> bool {
        self.cells
            .get(channel.index())
            .is_some_and(PendingCell::is_dirty)
    }

    /// Number of channels with a value waiting to be applied.
    pub fn pending_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_dirty()).count()
    }

    /// Take the pending value of `channel`, clearing its dirty flag.
    pub(crate) fn take(&self, index: usize) -> Option<Duty> {
        self.cells.get(index).and_then(PendingCell::take)
    }
}

impl<const N: usize> Default for UpdateQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A requester handle for an [`UpdateQueue`].
///
/// This is the foreground side of the handoff; it never touches hardware.
#[derive(Clone, Copy)]
pub struct UpdateRequester<'a, const N: usize> {
    queue: &'a UpdateQueue<N>,
}

impl<const N: usize> UpdateRequester<'_, N> {
    /// Mark `duty` as the next value for `channel`.
    pub fn request_update(&self, channel: ChannelId, duty: Duty) -> Result<(), UnknownChannel> {
        self.queue.request_update(channel, duty)
    }

    /// Check if `channel` has a value waiting to be applied.
    pub fn is_pending(&self, channel: ChannelId) -> bool {
        self.queue.is_pending(channel)
    }
}
