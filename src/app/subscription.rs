// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the playground.

use super::Message;
use crate::ui::toasts::ToastContainer;
use iced::keyboard::{self, key};
use iced::{event, Subscription};

/// Routes an unhandled Escape press to [`Message::ClearToasts`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => Some(Message::ClearToasts),
            _ => None,
        }
    })
}

/// Store watch and expiry ticks of the toast container.
pub fn create_toast_subscription(toasts: &ToastContainer) -> Subscription<Message> {
    toasts.subscription().map(Message::Toast)
}
