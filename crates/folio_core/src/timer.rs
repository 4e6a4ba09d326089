//! Virtual-clock timer queue
//!
//! Deferred callbacks are modeled as data: a component schedules a payload
//! with a delay and keeps the returned [`TimerToken`]. The host advances the
//! clock and receives the payloads that came due, in deadline order (ties in
//! scheduling order). Cancelling a token guarantees its payload is never
//! delivered.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerToken;
}

#[derive(Debug)]
struct Pending<T> {
    deadline: Duration,
    seq: u64,
    payload: T,
}

/// Pending timers keyed by token
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: SlotMap<TimerToken, Pending<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: SlotMap::with_key(),
        }
    }

    /// Time elapsed since the queue was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` from now
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerToken {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(Pending {
            deadline: self.now + delay,
            seq,
            payload,
        })
    }

    /// Cancel a pending timer; returns its payload if it had not fired
    pub fn cancel(&mut self, token: TimerToken) -> Option<T> {
        self.pending.remove(token).map(|p| p.payload)
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the clock by `by` and drain every timer now due
    pub fn advance(&mut self, by: Duration) -> Vec<(TimerToken, T)> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(TimerToken, Duration, u64)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(token, p)| (token, p.deadline, p.seq))
            .collect();
        due.sort_by_key(|(_, deadline, seq)| (*deadline, *seq));

        due.into_iter()
            .filter_map(|(token, _, _)| self.pending.remove(token).map(|p| (token, p.payload)))
            .collect()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
