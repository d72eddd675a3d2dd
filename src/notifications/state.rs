// SPDX-License-Identifier: MPL-2.0
//! Queue state and the reducer that mutates it.
//!
//! Every change to the tracked toasts is expressed as an [`Action`] and applied
//! by [`QueueState::apply`]. The reducer only touches the sequence; removal
//! timers are the queue's business.

use super::id::ToastId;
use super::notification::Notification;

/// A single state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<C> {
    /// Prepend a toast, then truncate to capacity.
    Add(Notification<C>),
    /// Replace the content of an existing toast.
    Update { id: ToastId, content: C },
    /// Hide one toast, or every toast when `None`.
    Dismiss(Option<ToastId>),
    /// Delete one toast, or every toast when `None`.
    Remove(Option<ToastId>),
}

/// Snapshot of the tracked toasts, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueState<C> {
    notifications: Vec<Notification<C>>,
}

impl<C> Default for QueueState<C> {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }
}

impl<C> QueueState<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All tracked toasts, newest first, including dismissed ones.
    pub fn notifications(&self) -> &[Notification<C>] {
        &self.notifications
    }

    /// Toasts that should currently be drawn.
    pub fn visible(&self) -> impl Iterator<Item = &Notification<C>> {
        self.notifications.iter().filter(|n| n.is_visible())
    }

    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.notifications.iter().map(Notification::id)
    }

    pub fn get(&self, id: ToastId) -> Option<&Notification<C>> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ToastId) -> Option<&mut Notification<C>> {
        self.notifications.iter_mut().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Applies `action`, keeping at most `capacity` toasts.
    ///
    /// Unknown ids are ignored.
    pub fn apply(&mut self, action: Action<C>, capacity: usize) {
        match action {
            Action::Add(notification) => {
                let id = notification.id();
                // Only reachable after the id counter wraps.
                self.notifications.retain(|n| n.id() != id);
                self.notifications.insert(0, notification);
                self.notifications.truncate(capacity);
            }
            Action::Update { id, content } => {
                if let Some(notification) = self.get_mut(id) {
                    notification.set_content(content);
                }
            }
            Action::Dismiss(Some(id)) => {
                if let Some(notification) = self.get_mut(id) {
                    notification.hide();
                }
            }
            Action::Dismiss(None) => {
                for notification in &mut self.notifications {
                    notification.hide();
                }
            }
            Action::Remove(Some(id)) => {
                self.notifications.retain(|n| n.id() != id);
            }
            Action::Remove(None) => {
                self.notifications.clear();
            }
        }
    }
}
