// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is the toast notification system of a personal portfolio site.
//!
//! It provides a capacity-bounded, observable queue of transient notifications
//! with deferred removal, a TOML configuration layer, and an iced overlay that
//! renders the queue.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
