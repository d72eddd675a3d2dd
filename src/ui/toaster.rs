// SPDX-License-Identifier: MPL-2.0
//! iced overlay that renders a toast queue.
//!
//! Toasts appear as small cards in the bottom-right corner with a variant
//! colored accent, an optional action button and a close button. Only visible
//! toasts are drawn; dismissed ones disappear immediately while the queue keeps
//! them until their removal timer fires.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::notifications::{
    Notification, NotificationQueue, QueueState, ToastContent, ToastId, Variant,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, time, Color, Element, Length, Subscription, Theme};
use std::time::{Duration, Instant};

/// Messages emitted by the toaster.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Close button pressed.
    Dismiss(ToastId),
    /// Action button pressed; `key` identifies the action for the host.
    Action { id: ToastId, key: String },
    /// Periodic tick for removal timers.
    Tick(Instant),
}

/// Handles a toaster message against `queue`.
///
/// Returns the action key when an action button was pressed. Pressing an
/// action also dismisses its toast.
pub fn handle_message<C: Clone + 'static>(
    queue: &NotificationQueue<C>,
    message: &Message,
) -> Option<String> {
    match message {
        Message::Dismiss(id) => {
            queue.dismiss(Some(*id));
            None
        }
        Message::Action { id, key } => {
            queue.dismiss(Some(*id));
            Some(key.clone())
        }
        Message::Tick(_) => {
            queue.tick();
            None
        }
    }
}

/// Ticks every `interval` while a removal is pending.
pub fn subscription<C: Clone + 'static>(
    queue: &NotificationQueue<C>,
    interval: Duration,
) -> Subscription<Message> {
    if queue.pending_removals() > 0 {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Toast widget rendering.
pub struct Toaster;

impl Toaster {
    /// Renders a single toast card.
    pub fn view<'a>(notification: &Notification<ToastContent>) -> Element<'a, Message> {
        let id = notification.id();
        let content = notification.content();
        let accent_color = Self::accent_color(content.variant);

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = &content.title {
            body = body.push(
                Text::new(title.clone())
                    .size(typography::TITLE)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(description) = &content.description {
            body = body.push(Text::new(description.clone()).size(typography::BODY));
        }

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = &content.action {
            row = row.push(
                button(Text::new(action.label.clone()).size(typography::BODY))
                    .on_press(Message::Action {
                        id,
                        key: action.key.clone(),
                    })
                    .padding(spacing::XXS)
                    .style(move |theme: &Theme, status: button::Status| {
                        action_button_style(theme, status, accent_color)
                    }),
            );
        }

        row = row.push(
            button(Text::new("×").size(typography::BODY))
                .on_press(Message::Dismiss(id))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every visible toast, stacked in the bottom-right corner.
    pub fn view_overlay<'a>(state: &QueueState<ToastContent>) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = state
            .visible()
            .map(|notification| Self::view(notification))
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    fn accent_color(variant: Variant) -> Color {
        match variant {
            Variant::Default => palette::PRIMARY_500,
            Variant::Destructive => palette::ERROR_500,
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn action_button_style(
    theme: &Theme,
    status: button::Status,
    accent_color: Color,
) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let fill = match status {
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(Color {
            a: fill,
            ..accent_color
        })),
        text_color,
        border: iced::Border {
            color: accent_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{ManualClock, QueueOptions, ToastAction};

    fn queue_with_clock() -> (NotificationQueue<ToastContent>, ManualClock) {
        let clock = ManualClock::new();
        (
            NotificationQueue::with_clock(QueueOptions::default(), clock.clone()),
            clock,
        )
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::ERROR_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn destructive_variant_uses_error_accent() {
        assert_eq!(Toaster::accent_color(Variant::Destructive), palette::ERROR_500);
        assert_eq!(Toaster::accent_color(Variant::Default), palette::PRIMARY_500);
    }

    #[test]
    fn dismiss_button_has_no_background_at_rest() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(hovered.background.is_some());
    }

    #[test]
    fn dismiss_message_hides_toast_and_schedules_removal() {
        let (queue, _) = queue_with_clock();
        let handle = queue.enqueue(ToastContent::titled("Profile saved"));

        let result = handle_message(&queue, &Message::Dismiss(handle.id()));

        assert!(result.is_none());
        assert_eq!(queue.state().visible().count(), 0);
        assert!(queue.is_removal_pending(handle.id()));
    }

    #[test]
    fn action_message_returns_key_and_dismisses() {
        let (queue, _) = queue_with_clock();
        let handle = queue.enqueue(
            ToastContent::destructive("Logout failed")
                .with_action(ToastAction::new("Retry", "retry")),
        );

        let result = handle_message(
            &queue,
            &Message::Action {
                id: handle.id(),
                key: "retry".to_string(),
            },
        );

        assert_eq!(result.as_deref(), Some("retry"));
        assert!(!queue.state().get(handle.id()).unwrap().is_visible());
    }

    #[test]
    fn tick_message_fires_due_removals() {
        let (queue, clock) = queue_with_clock();
        let handle = queue.enqueue(ToastContent::titled("Copied"));
        handle.dismiss();

        clock.advance(QueueOptions::default().remove_delay.duration());
        handle_message(&queue, &Message::Tick(Instant::now()));

        assert!(queue.is_empty());
    }

    #[test]
    fn overlay_builds_for_empty_and_populated_state() {
        let (queue, _) = queue_with_clock();
        let _empty = Toaster::view_overlay(&queue.state());

        queue.enqueue(ToastContent::titled("One").with_description("first"));
        queue.enqueue(
            ToastContent::destructive("Two").with_action(ToastAction::new("Undo", "undo")),
        );
        let _populated = Toaster::view_overlay(&queue.state());
    }
}
