// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes uncaptured keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Escape),
        _ => None,
    })
}

/// Ticks every 100ms while notifications are pending so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
