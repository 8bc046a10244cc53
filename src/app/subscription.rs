// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes Escape to the overlay while a modal is open.
pub fn create_overlay_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window| match &event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Overlay(event.clone())),
        _ => None,
    })
}

/// Creates a periodic tick subscription for toast expiry, the search
/// debounce and the row highlight.
pub fn create_tick_subscription(
    has_notifications: bool,
    orders_pending: bool,
) -> Subscription<Message> {
    if has_notifications || orders_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
