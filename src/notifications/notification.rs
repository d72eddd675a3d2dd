// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! `Notification<C>` is what the queue tracks. `C` is the display payload and
//! is never inspected by the queue; [`ToastContent`] is the payload the
//! toaster overlay knows how to draw.

use super::id::ToastId;

/// One tracked toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<C> {
    id: ToastId,
    content: C,
    visible: bool,
}

impl<C> Notification<C> {
    /// Creates a visible notification.
    pub fn new(id: ToastId, content: C) -> Self {
        Self {
            id,
            content,
            visible: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub(crate) fn set_content(&mut self, content: C) {
        self.content = content;
    }

    /// Returns whether the toast should still be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

/// Display flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    /// Failure feedback (red accent).
    Destructive,
}

/// Optional button shown on a toast (e.g. "Undo", "Retry").
///
/// `key` is handed back to the host when the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub label: String,
    pub key: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

/// Default toast payload: title, description, optional action, variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub action: Option<ToastAction>,
    pub variant: Variant,
}

impl ToastContent {
    /// Creates content with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a destructive toast, typically for a failed operation.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::titled(title)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_is_visible() {
        let n = Notification::new(ToastId::from_raw(1), ToastContent::titled("hi"));
        assert!(n.is_visible());
        assert_eq!(n.id(), ToastId::from_raw(1));
    }

    #[test]
    fn hide_clears_visibility_only() {
        let mut n = Notification::new(ToastId::from_raw(3), "payload");
        n.hide();
        assert!(!n.is_visible());
        assert_eq!(*n.content(), "payload");
    }

    #[test]
    fn content_builder_pattern_works() {
        let content = ToastContent::destructive("Logout failed")
            .with_description("Please try again")
            .with_action(ToastAction::new("Retry", "retry-logout"));

        assert_eq!(content.variant, Variant::Destructive);
        assert_eq!(content.title.as_deref(), Some("Logout failed"));
        assert_eq!(content.description.as_deref(), Some("Please try again"));
        assert_eq!(
            content.action.as_ref().map(|a| a.key.as_str()),
            Some("retry-logout")
        );
    }

    #[test]
    fn titled_uses_default_variant() {
        assert_eq!(ToastContent::titled("Saved").variant, Variant::Default);
    }
}
