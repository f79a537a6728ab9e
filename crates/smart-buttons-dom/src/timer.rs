//! One-shot deferred callbacks driven by host time.

use std::time::Duration;

use crate::document::Document;

/// Identifier of a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

pub(crate) type TimerCallback = Box<dyn FnOnce(&Document)>;

struct Timer {
    id: TimerId,
    due: Duration,
    callback: TimerCallback,
}

/// Pending callbacks ordered by due time, ties broken by scheduling order.
pub(crate) struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub(crate) fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn schedule(&mut self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            due: self.now + delay,
            callback,
        });
        id
    }

    pub(crate) fn advance_clock(&mut self, delta: Duration) {
        self.now += delta;
    }

    /// Remove and return the earliest callback that is due.
    pub(crate) fn pop_due(&mut self) -> Option<TimerCallback> {
        let now = self.now;
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= now)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index)?;
        Some(self.pending.swap_remove(index).callback)
    }
}
