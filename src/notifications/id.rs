// SPDX-License-Identifier: MPL-2.0
//! Toast identifiers.
//!
//! Ids come from a per-queue counter rather than a global one so that two
//! queues (or two tests) never observe each other's sequence.

use std::fmt;

/// Largest integer a JavaScript number represents exactly (`2^53 - 1`).
///
/// The counter wraps back to zero here so ids stay representable by any web
/// front end the snapshot is forwarded to.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Unique identifier for a toast within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id counter, wrapping at [`MAX_SAFE_INTEGER`].
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    count: u64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that resumes after `count`.
    #[must_use]
    pub fn starting_after(count: u64) -> Self {
        Self {
            count: count % MAX_SAFE_INTEGER,
        }
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> ToastId {
        self.count = (self.count + 1) % MAX_SAFE_INTEGER;
        ToastId(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_one() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), ToastId::from_raw(1));
        assert_eq!(ids.next_id(), ToastId::from_raw(2));
    }

    #[test]
    fn wraps_to_zero_at_max_safe_integer() {
        let mut ids = IdGenerator::starting_after(MAX_SAFE_INTEGER - 2);
        assert_eq!(ids.next_id().value(), MAX_SAFE_INTEGER - 1);
        assert_eq!(ids.next_id().value(), 0);
        assert_eq!(ids.next_id().value(), 1);
    }

    #[test]
    fn generators_are_independent() {
        let mut a = IdGenerator::new();
        let mut b = IdGenerator::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), ToastId::from_raw(1));
    }

    #[test]
    fn display_prints_raw_value() {
        assert_eq!(ToastId::from_raw(42).to_string(), "42");
    }
}
