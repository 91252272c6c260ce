// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts for the gallery: arrow keys step through the media and
//! Escape closes the preview overlay.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

type EventHandler = fn(Event, event::Status, window::Id) -> Option<Message>;

/// Creates the keyboard subscription, or none when shortcuts are disabled.
pub fn create_keyboard_subscription(enabled: bool) -> Subscription<Message> {
    keyboard_handler(enabled).map_or_else(Subscription::none, event::listen_with)
}

fn keyboard_handler(enabled: bool) -> Option<EventHandler> {
    enabled.then_some(route_event as EventHandler)
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match status {
        event::Status::Ignored => map_key_event(&event),
        event::Status::Captured => None,
    }
}

fn map_key_event(event: &Event) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    let gallery_message = match key {
        Key::Named(Named::ArrowLeft) => gallery::Message::PreviousMedia,
        Key::Named(Named::ArrowRight) => gallery::Message::NextMedia,
        Key::Named(Named::Escape) => gallery::Message::DismissRequested,
        _ => return None,
    };
    Some(Message::Gallery(gallery_message))
}
