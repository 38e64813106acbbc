//! Cooperative timer queue
//!
//! A single-threaded replacement for platform one-shot timers. The queue owns
//! a virtual clock that only moves when the host calls
//! [`advance_to`](TimerQueue::advance_to); due timers are then collected with
//! [`take_due`](TimerQueue::take_due) and dispatched by the owner.
//!
//! Timer ids are versioned slotmap keys. Once a timer fires or is cancelled its
//! id is dead forever, so a component can compare a fired id against the one
//! it currently holds and ignore stale fires. Re-arming or cancelling a timer
//! from inside its own callback is therefore always safe.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::Duration;

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

struct TimerEntry<T> {
    deadline: Duration,
    /// Insertion sequence, breaks ties between equal deadlines
    seq: u64,
    tag: T,
}

/// One-shot timers against a host-driven virtual clock
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, TimerEntry<T>>,
    now: Duration,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward
    ///
    /// Time never runs backwards; an earlier instant is ignored.
    pub fn advance_to(&mut self, instant: Duration) {
        if instant > self.now {
            self.now = instant;
        }
    }

    /// Move the clock forward by `dt`
    pub fn advance_by(&mut self, dt: Duration) {
        self.now += dt;
    }

    /// Arm a one-shot timer that fires `delay` after the current time
    pub fn schedule(&mut self, delay: Duration, tag: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            deadline: self.now + delay,
            seq,
            tag,
        })
    }

    /// Disarm a timer
    ///
    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Whether the timer is still armed
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Absolute deadline of an armed timer
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.timers.get(id).map(|t| t.deadline)
    }

    /// Time left before an armed timer fires
    pub fn remaining(&self, id: TimerId) -> Option<Duration> {
        self.deadline(id)
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Earliest deadline among armed timers
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Number of armed timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Disarm everything
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Remove and return every timer whose deadline has passed
    ///
    /// Results are ordered by deadline, then by scheduling order.
    pub fn take_due(&mut self) -> SmallVec<[(TimerId, T); 4]> {
        let now = self.now;
        let mut due: SmallVec<[(TimerId, Duration, u64); 4]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= now)
            .map(|(id, t)| (id, t.deadline, t.seq))
            .collect();
        due.sort_by_key(|&(_, deadline, seq)| (deadline, seq));

        due.into_iter()
            .filter_map(|(id, _, _)| self.timers.remove(id).map(|t| (id, t.tag)))
            .collect()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TimerQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("armed", &self.timers.len())
            .finish()
    }
}
