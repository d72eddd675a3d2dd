// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! [`NotificationQueue`] owns the tracked toasts, broadcasts every change to its
//! subscribers and keeps the removal timers for dismissed toasts. It is a
//! single-threaded shared object: clones refer to the same queue, and it must
//! stay on the thread that created it.

use super::id::{IdGenerator, ToastId};
use super::notification::Notification;
use super::options::QueueOptions;
use super::state::{Action, QueueState};
use super::timers::{Clock, RemovalTimers, SystemClock};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;
use tokio::sync::Notify;

type Listener<C> = Rc<dyn Fn(&QueueState<C>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Inner<C> {
    state: QueueState<C>,
    options: QueueOptions,
    ids: IdGenerator,
    timers: RemovalTimers,
    listeners: Vec<(ListenerId, Listener<C>)>,
    next_listener: u64,
    clock: Rc<dyn Clock>,
    timer_scheduled: Rc<Notify>,
    /// Snapshots waiting to be delivered, oldest first.
    pending_broadcasts: VecDeque<QueueState<C>>,
    broadcasting: bool,
}

/// Capacity-bounded, observable queue of toasts.
pub struct NotificationQueue<C> {
    inner: Rc<RefCell<Inner<C>>>,
}

impl<C> Clone for NotificationQueue<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> fmt::Debug for NotificationQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("NotificationQueue")
                .field("options", &inner.options)
                .field("toasts", &inner.state.len())
                .field("pending_removals", &inner.timers.len())
                .field("listeners", &inner.listeners.len())
                .field("broadcasting", &inner.broadcasting)
                .finish(),
            Err(_) => f.write_str("NotificationQueue { <busy> }"),
        }
    }
}

impl<C: Clone + 'static> Default for NotificationQueue<C> {
    fn default() -> Self {
        Self::new(QueueOptions::default())
    }
}

impl<C: Clone + 'static> NotificationQueue<C> {
    /// Creates an empty queue on the system clock.
    #[must_use]
    pub fn new(options: QueueOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }

    /// Creates an empty queue reading time from `clock`.
    pub fn with_clock(options: QueueOptions, clock: impl Clock + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: QueueState::new(),
                options,
                ids: IdGenerator::new(),
                timers: RemovalTimers::new(),
                listeners: Vec::new(),
                next_listener: 0,
                clock: Rc::new(clock),
                timer_scheduled: Rc::new(Notify::new()),
                pending_broadcasts: VecDeque::new(),
                broadcasting: false,
            })),
        }
    }

    #[must_use]
    pub fn options(&self) -> QueueOptions {
        self.inner.borrow().options
    }

    /// Shows a new toast and returns a handle scoped to it.
    ///
    /// The toast is prepended; the oldest toasts beyond capacity are dropped.
    pub fn enqueue(&self, content: C) -> ToastHandle<C> {
        let id = self.inner.borrow_mut().ids.next_id();
        tracing::debug!(%id, "toast enqueued");
        self.dispatch(Action::Add(Notification::new(id, content)));
        ToastHandle {
            id,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Replaces the content of toast `id`. Visibility is unchanged.
    pub fn update(&self, id: ToastId, content: C) {
        self.dispatch(Action::Update { id, content });
    }

    /// Edits the content of toast `id` in place. No-op if `id` is not tracked.
    pub fn update_with(&self, id: ToastId, edit: impl FnOnce(&mut C)) {
        let current = self
            .inner
            .borrow()
            .state
            .get(id)
            .map(|n| n.content().clone());

        if let Some(mut content) = current {
            edit(&mut content);
            self.update(id, content);
        }
    }

    /// Hides toast `id`, or every toast when `None`, and schedules removal.
    ///
    /// A toast that already has a pending removal keeps its original deadline.
    pub fn dismiss(&self, id: Option<ToastId>) {
        {
            let mut inner = self.inner.borrow_mut();
            let targets: Vec<ToastId> = match id {
                Some(id) => inner.state.get(id).map(Notification::id).into_iter().collect(),
                None => inner.state.ids().collect(),
            };
            let deadline = inner.clock.now() + inner.options.remove_delay.duration();

            let mut scheduled = 0usize;
            for target in targets {
                if inner.timers.schedule(target, deadline) {
                    scheduled += 1;
                }
            }
            if scheduled > 0 {
                inner.timer_scheduled.notify_one();
            }
            match id {
                Some(id) => tracing::debug!(%id, scheduled, "toast dismissed"),
                None => tracing::debug!(scheduled, "all toasts dismissed"),
            }
        }
        self.dispatch(Action::Dismiss(id));
    }

    /// Deletes toast `id` immediately, or every toast when `None`.
    pub fn remove(&self, id: Option<ToastId>) {
        match id {
            Some(id) => tracing::debug!(%id, "toast removed"),
            None => tracing::debug!("all toasts removed"),
        }
        self.dispatch(Action::Remove(id));
    }

    /// Registers `listener`; it receives the full state after every change.
    pub fn subscribe(&self, listener: impl Fn(&QueueState<C>) + 'static) -> Unsubscribe<C> {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_listener);
        inner.next_listener += 1;
        let listener: Listener<C> = Rc::new(listener);
        inner.listeners.push((id, listener));
        Unsubscribe {
            id,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> QueueState<C> {
        self.inner.borrow().state.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().state.is_empty()
    }

    /// Applies `action` and broadcasts the result to every subscriber.
    ///
    /// The internal borrow is released before listeners run, so a listener may
    /// call back into the queue. A mutation made from inside a listener is
    /// applied at once, but its snapshot is delivered only after the current
    /// one has reached every listener, so all subscribers see the same states
    /// in the same order.
    pub fn dispatch(&self, action: Action<C>) {
        {
            let mut inner = self.inner.borrow_mut();
            let capacity = inner.options.capacity.value();
            inner.state.apply(action, capacity);
            let snapshot = inner.state.clone();
            inner.pending_broadcasts.push_back(snapshot);
            if inner.broadcasting {
                return;
            }
            inner.broadcasting = true;
        }

        let _guard = BroadcastGuard { inner: &self.inner };
        while let Some((snapshot, listeners)) = self.next_broadcast() {
            tracing::trace!(
                toasts = snapshot.len(),
                listeners = listeners.len(),
                "broadcasting toast state"
            );
            for listener in listeners {
                listener(&snapshot);
            }
        }
    }

    fn next_broadcast(&self) -> Option<(QueueState<C>, Vec<Listener<C>>)> {
        let mut inner = self.inner.borrow_mut();
        let snapshot = inner.pending_broadcasts.pop_front()?;
        let listeners = inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
        Some((snapshot, listeners))
    }

    /// Fires every removal timer that is due. Returns how many fired.
    ///
    /// A timer for a toast that is no longer tracked fires as a no-op.
    pub fn tick(&self) -> usize {
        let due = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.clock.now();
            inner.timers.take_due(now)
        };

        for id in &due {
            tracing::debug!(%id, "removal timer fired");
            self.remove(Some(*id));
        }
        due.len()
    }

    /// Earliest pending removal deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().timers.next_deadline()
    }

    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    #[must_use]
    pub fn is_removal_pending(&self, id: ToastId) -> bool {
        self.inner.borrow().timers.is_pending(id)
    }

    /// Signalled whenever a new removal timer is scheduled.
    pub(crate) fn timer_signal(&self) -> Rc<Notify> {
        Rc::clone(&self.inner.borrow().timer_scheduled)
    }
}

/// Clears the broadcasting flag when the outermost dispatch finishes, even if
/// a listener panics.
struct BroadcastGuard<'a, C> {
    inner: &'a RefCell<Inner<C>>,
}

impl<C> Drop for BroadcastGuard<'_, C> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.broadcasting = false;
            inner.pending_broadcasts.clear();
        }
    }
}

/// Handle returned by [`NotificationQueue::enqueue`], scoped to one toast.
///
/// Holds a weak reference: once the queue is gone every method is a no-op.
pub struct ToastHandle<C> {
    id: ToastId,
    queue: Weak<RefCell<Inner<C>>>,
}

impl<C> Clone for ToastHandle<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            queue: Weak::clone(&self.queue),
        }
    }
}

impl<C> fmt::Debug for ToastHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle").field("id", &self.id).finish()
    }
}

impl<C: Clone + 'static> ToastHandle<C> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn dismiss(&self) {
        if let Some(queue) = self.queue() {
            queue.dismiss(Some(self.id));
        }
    }

    pub fn update(&self, content: C) {
        if let Some(queue) = self.queue() {
            queue.update(self.id, content);
        }
    }

    pub fn update_with(&self, edit: impl FnOnce(&mut C)) {
        if let Some(queue) = self.queue() {
            queue.update_with(self.id, edit);
        }
    }

    fn queue(&self) -> Option<NotificationQueue<C>> {
        self.queue.upgrade().map(|inner| NotificationQueue { inner })
    }
}

/// Deregisters a listener added by [`NotificationQueue::subscribe`].
///
/// Dropping the handle does not deregister the listener.
#[must_use = "the listener stays registered; keep the handle to unsubscribe later"]
pub struct Unsubscribe<C> {
    id: ListenerId,
    queue: Weak<RefCell<Inner<C>>>,
}

impl<C> fmt::Debug for Unsubscribe<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe").field("id", &self.id.0).finish()
    }
}

impl<C> Unsubscribe<C> {
    /// Stops future broadcasts to the listener. Safe to call repeatedly.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.queue.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(listener, _)| *listener != self.id);
        }
    }
}
