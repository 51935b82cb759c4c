// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard) to the
//! availability dialog based on the current application state.

use super::Message;
use crate::ui::availability;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes Escape to the availability dialog while one is open.
///
/// No global event routing is needed otherwise: every other interaction in
/// the app is plain widget clicks and text input.
pub fn create_event_subscription(dialog_open: bool) -> Subscription<Message> {
    if !dialog_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            match status {
                event::Status::Ignored => Some(Message::Availability(
                    availability::Message::CloseRequested,
                )),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the in-flight spinner animation.
pub fn create_tick_subscription(
    checking: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if checking || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
