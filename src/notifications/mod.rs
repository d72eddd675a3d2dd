// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Application code surfaces transient feedback ("Saved", "Logout failed") by
//! enqueueing toasts; renderers subscribe to the queue and draw the snapshot
//! they receive. Dismissed toasts linger for a short removal delay so exit
//! animations can play, then disappear.
//!
//! # Components
//!
//! - [`id`] - `ToastId` and the wrapping id counter
//! - [`notification`] - `Notification` record and the default `ToastContent` payload
//! - [`state`] - `QueueState` snapshot and the `Action` reducer
//! - [`timers`] - removal deadlines and the `Clock` seam
//! - [`queue`] - `NotificationQueue`, the shared manager
//! - [`driver`] - tokio task that fires removal timers
//!
//! # Usage
//!
//! ```
//! use toast_queue::notifications::{NotificationQueue, QueueOptions, ToastContent};
//!
//! let queue = NotificationQueue::<ToastContent>::new(QueueOptions::default());
//! let _subscription = queue.subscribe(|state| println!("{} toasts", state.len()));
//!
//! let toast = queue.enqueue(ToastContent::titled("Saving..."));
//! toast.update(ToastContent::titled("Saved"));
//! toast.dismiss();
//! ```
//!
//! # Design Considerations
//!
//! - Capacity: 5 toasts by default, newest first; overflow drops the oldest
//! - Removal delay: 1s by default after dismissal
//! - Single-threaded: the queue is `!Send` and lives on the UI thread

pub mod driver;
mod id;
mod notification;
mod options;
mod queue;
mod state;
mod timers;

pub use id::{IdGenerator, ToastId, MAX_SAFE_INTEGER};
pub use notification::{Notification, ToastAction, ToastContent, Variant};
pub use options::{Capacity, QueueOptions, RemoveDelay};
pub use queue::{NotificationQueue, ToastHandle, Unsubscribe};
pub use state::{Action, QueueState};
pub use timers::{Clock, ManualClock, RemovalTimers, SystemClock, TokioClock};
