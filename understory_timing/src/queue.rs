// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered queue of one-shot timers.

use alloc::vec::Vec;

/// Identifies a scheduled timer.
///
/// Ids are unique per queue and never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Timer<K> {
    id: TimerId,
    deadline: u64,
    key: K,
}

/// One-shot timers ordered by deadline.
///
/// Timers with equal deadlines fire in scheduling order. The queue owns no
/// clock: callers pass the current time to [`TimerQueue::pop_expired`].
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    // Sorted by (deadline, id).
    timers: Vec<Timer<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: u64, key: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self.timers.partition_point(|t| t.deadline <= deadline);
        self.timers.insert(at, Timer { id, deadline, key });
        id
    }

    /// Schedules `key` to fire `delay` milliseconds after `now`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, key: K) -> TimerId {
        self.schedule_at(now.saturating_add(delay), key)
    }

    /// Cancels a pending timer, returning its key.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<K> {
        let index = self.timers.iter().position(|t| t.id == id)?;
        Some(self.timers.remove(index).key)
    }

    /// Returns `true` while `id` has neither fired nor been cancelled.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.first().map(|t| t.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Call in a loop to fire everything that is due. Timers scheduled while
    /// handling a fired one are honored by the same loop if already due.
    pub fn pop_expired(&mut self, now: u64) -> Option<(TimerId, K)> {
        if self.timers.first()?.deadline > now {
            return None;
        }
        let timer = self.timers.remove(0);
        Some((timer.id, timer.key))
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

impl<K: PartialEq> TimerQueue<K> {
    /// Cancels every pending timer carrying `key`, returning how many were removed.
    pub fn cancel_key(&mut self, key: &K) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.key != *key);
        before - self.timers.len()
    }
}
