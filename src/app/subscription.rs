// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only the Escape key is routed: it dismisses the add item dialog the same
//! way a click on the backdrop does.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the shopping list screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
