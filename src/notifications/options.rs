// SPDX-License-Identifier: MPL-2.0
//! Queue tuning newtypes.
//!
//! Values are clamped on construction so a queue can never be built with a
//! zero capacity or an unbounded removal delay.

use crate::config::defaults::{
    DEFAULT_REMOVE_DELAY_MS, DEFAULT_TOAST_CAPACITY, MAX_REMOVE_DELAY_MS, MAX_TOAST_CAPACITY,
    MIN_REMOVE_DELAY_MS, MIN_TOAST_CAPACITY,
};
use std::time::Duration;

/// Maximum number of toasts tracked at once.
///
/// # Example
///
/// ```
/// use toast_queue::notifications::Capacity;
///
/// assert_eq!(Capacity::new(0).value(), 1);
/// assert_eq!(Capacity::default().value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(usize);

impl Capacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_TOAST_CAPACITY, MAX_TOAST_CAPACITY))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(DEFAULT_TOAST_CAPACITY)
    }
}

/// Time a dismissed toast stays tracked before it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveDelay(Duration);

impl RemoveDelay {
    /// Creates a delay from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(
            millis.clamp(MIN_REMOVE_DELAY_MS, MAX_REMOVE_DELAY_MS),
        ))
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(MAX_REMOVE_DELAY_MS)
    }
}

impl Default for RemoveDelay {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_REMOVE_DELAY_MS))
    }
}

/// Construction parameters for a `NotificationQueue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueOptions {
    pub capacity: Capacity,
    pub remove_delay: RemoveDelay,
}

impl QueueOptions {
    #[must_use]
    pub fn new(capacity: Capacity, remove_delay: RemoveDelay) -> Self {
        Self {
            capacity,
            remove_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps() {
        assert_eq!(Capacity::new(0).value(), MIN_TOAST_CAPACITY);
        assert_eq!(Capacity::new(10_000).value(), MAX_TOAST_CAPACITY);
        assert_eq!(Capacity::new(3).value(), 3);
    }

    #[test]
    fn capacity_default_is_five() {
        assert_eq!(Capacity::default().value(), 5);
    }

    #[test]
    fn remove_delay_clamps() {
        assert_eq!(
            RemoveDelay::from_millis(u64::MAX).as_millis(),
            MAX_REMOVE_DELAY_MS
        );
        assert_eq!(RemoveDelay::from_millis(250).as_millis(), 250);
    }

    #[test]
    fn remove_delay_at_upper_bound_reports_exact_millis() {
        let delay = RemoveDelay::from_millis(MAX_REMOVE_DELAY_MS);
        assert_eq!(delay.as_millis(), MAX_REMOVE_DELAY_MS);
        assert_eq!(delay.duration(), Duration::from_millis(MAX_REMOVE_DELAY_MS));
    }

    #[test]
    fn remove_delay_default_is_one_second() {
        assert_eq!(RemoveDelay::default().duration(), Duration::from_secs(1));
    }
}
