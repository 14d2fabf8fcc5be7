// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the showcase.

use super::Message;
use crate::ui::toasts::{widget, Manager};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick cadence while any toast is on screen. Animation frames while
/// something is actually moving, a slow keepalive otherwise (pinned static
/// toasts still need their dismissals processed).
pub fn create_tick_subscription(manager: &Manager) -> Subscription<Message> {
    if !manager.has_toasts() {
        return Subscription::none();
    }
    let interval = if widget::is_animating(manager) {
        Duration::from_millis(16)
    } else {
        Duration::from_millis(250)
    };
    time::every(interval).map(Message::Tick)
}

/// Window resizes feed the viewport width used by percentage-based toast
/// widths.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}
