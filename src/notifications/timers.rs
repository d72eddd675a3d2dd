// SPDX-License-Identifier: MPL-2.0
//! Deferred removal of dismissed toasts.
//!
//! A dismissed toast stays in the queue for a short delay so the renderer can
//! play an exit animation. [`RemovalTimers`] keeps one pending deadline per id;
//! the host fires due deadlines through `NotificationQueue::tick` or the tokio
//! driver. Time is read through a [`Clock`] so tests control it.

use super::id::ToastId;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of "now" for removal deadlines.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock backed by tokio's time source, so paused-time runtimes and
/// [`super::driver::drive`] agree with the queue about deadlines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Hand-driven clock for tests. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Pending removal deadlines keyed by toast id.
#[derive(Debug, Default)]
pub struct RemovalTimers {
    deadlines: HashMap<ToastId, Instant>,
}

impl RemovalTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules removal of `id` at `deadline`.
    ///
    /// An already pending timer is left untouched; returns `false` in that case.
    pub fn schedule(&mut self, id: ToastId, deadline: Instant) -> bool {
        if self.deadlines.contains_key(&id) {
            return false;
        }
        self.deadlines.insert(id, deadline);
        true
    }

    #[must_use]
    pub fn is_pending(&self, id: ToastId) -> bool {
        self.deadlines.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due: Vec<(Instant, ToastId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort_unstable();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ToastId {
        ToastId::from_raw(raw)
    }

    #[test]
    fn schedule_suppresses_duplicates() {
        let clock = ManualClock::new();
        let mut timers = RemovalTimers::new();

        assert!(timers.schedule(id(1), clock.now() + Duration::from_secs(1)));
        assert!(!timers.schedule(id(1), clock.now() + Duration::from_secs(5)));
        assert_eq!(timers.len(), 1);
        assert_eq!(
            timers.next_deadline(),
            Some(clock.now() + Duration::from_secs(1))
        );
    }

    #[test]
    fn take_due_returns_only_expired_in_deadline_order() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut timers = RemovalTimers::new();
        timers.schedule(id(1), start + Duration::from_millis(300));
        timers.schedule(id(2), start + Duration::from_millis(100));
        timers.schedule(id(3), start + Duration::from_millis(900));

        clock.advance(Duration::from_millis(500));
        assert_eq!(timers.take_due(clock.now()), vec![id(2), id(1)]);
        assert_eq!(timers.len(), 1);
        assert!(timers.is_pending(id(3)));
    }

    #[test]
    fn take_due_on_empty_is_empty() {
        let mut timers = RemovalTimers::new();
        assert!(timers.take_due(Instant::now()).is_empty());
        assert!(timers.next_deadline().is_none());
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_secs(2));
        assert_eq!(other.now() - before, Duration::from_secs(2));
    }
}
