// SPDX-License-Identifier: MPL-2.0
//! Tokio-driven removal timers.
//!
//! Hosts without a periodic tick can run [`drive`] on a current-thread runtime
//! (or inside a `LocalSet`). It sleeps until the next removal deadline and
//! wakes early when a new timer is scheduled.
//!
//! Use a queue built on [`super::TokioClock`] when the runtime's time is paused,
//! otherwise the queue and tokio disagree about "now".

use super::queue::NotificationQueue;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Fires removal timers for `queue` as they come due. Never returns.
pub async fn drive<C: Clone + 'static>(queue: &NotificationQueue<C>) {
    let timer_scheduled = queue.timer_signal();
    loop {
        match queue.next_deadline() {
            Some(deadline) => {
                tokio::select! {
                    () = sleep_until(Instant::from_std(deadline)) => {}
                    () = timer_scheduled.notified() => {}
                }
            }
            None => timer_scheduled.notified().await,
        }

        let fired = queue.tick();
        if fired > 0 {
            tracing::trace!(fired, "removal driver woke");
        }
    }
}

/// Spawns [`drive`] on the current `LocalSet`.
///
/// # Panics
///
/// Panics if called outside of a `LocalSet` (see [`tokio::task::spawn_local`]).
pub fn spawn_local<C: Clone + 'static>(queue: NotificationQueue<C>) -> JoinHandle<()> {
    tokio::task::spawn_local(async move { drive(&queue).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{QueueOptions, ToastContent, TokioClock};
    use std::time::Duration;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    fn tokio_queue() -> NotificationQueue<ToastContent> {
        NotificationQueue::with_clock(QueueOptions::default(), TokioClock)
    }

    #[tokio::test(start_paused = true)]
    async fn removes_dismissed_toast_after_delay() {
        let queue = tokio_queue();
        let handle = queue.enqueue(ToastContent::titled("Saved"));
        handle.dismiss();

        tokio::select! {
            () = drive(&queue) => unreachable!("driver never returns"),
            () = sleep(Duration::from_millis(1500)) => {}
        }

        assert!(queue.is_empty());
        assert_eq!(queue.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_toast_until_deadline() {
        let queue = tokio_queue();
        let handle = queue.enqueue(ToastContent::titled("Saving..."));
        handle.dismiss();

        tokio::select! {
            () = drive(&queue) => unreachable!("driver never returns"),
            () = sleep(Duration::from_millis(500)) => {}
        }

        let state = queue.state();
        assert!(state.contains(handle.id()));
        assert!(!state.get(handle.id()).unwrap().is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_driver_wakes_for_new_timer() {
        let queue = tokio_queue();
        let handle = queue.enqueue(ToastContent::titled("Logout failed"));

        LocalSet::new()
            .run_until(async {
                let driver = spawn_local(queue.clone());

                sleep(Duration::from_millis(300)).await;
                handle.dismiss();
                sleep(Duration::from_millis(1100)).await;

                assert!(queue.is_empty());
                driver.abort();
            })
            .await;
    }
}
