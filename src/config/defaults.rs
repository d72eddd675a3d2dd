// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Toast capacity bounds
//! - **Removal**: Delay between dismissal and removal
//! - **Toaster**: Tick interval of the rendering adapter

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts tracked at once.
pub const DEFAULT_TOAST_CAPACITY: usize = 5;

/// Minimum toast capacity.
pub const MIN_TOAST_CAPACITY: usize = 1;

/// Maximum toast capacity.
pub const MAX_TOAST_CAPACITY: usize = 50;

// ==========================================================================
// Removal Defaults
// ==========================================================================

/// Default delay between dismissal and removal (in milliseconds).
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 1_000;

/// Minimum removal delay (in milliseconds).
pub const MIN_REMOVE_DELAY_MS: u64 = 0;

/// Maximum removal delay (in milliseconds).
pub const MAX_REMOVE_DELAY_MS: u64 = 600_000;

// ==========================================================================
// Toaster Defaults
// ==========================================================================

/// Default interval of the toaster tick subscription (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_default_is_within_bounds() {
        assert!((MIN_TOAST_CAPACITY..=MAX_TOAST_CAPACITY).contains(&DEFAULT_TOAST_CAPACITY));
    }

    #[test]
    fn remove_delay_default_is_within_bounds() {
        assert!((MIN_REMOVE_DELAY_MS..=MAX_REMOVE_DELAY_MS).contains(&DEFAULT_REMOVE_DELAY_MS));
    }

    #[test]
    fn tick_interval_is_shorter_than_default_delay() {
        assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_REMOVE_DELAY_MS);
        assert!((MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&DEFAULT_TICK_INTERVAL_MS));
    }
}
