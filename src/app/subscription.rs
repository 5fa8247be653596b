// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Translates native window and keyboard events into viewer [`InputEvent`]s.
//! Window events are always forwarded; keyboard events only when no widget
//! captured them.

use super::Message;
use crate::ui::viewer::{InputEvent, Key, KeyPress};
use iced::keyboard::{self, key::Named, Modifiers};
use iced::{event, window, Event, Subscription};

/// Creates the event subscription feeding the viewer.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        translate_event(&event, status).map(Message::Viewer)
    })
}

fn translate_event(event: &Event, status: event::Status) -> Option<InputEvent> {
    match event {
        // Handle window close request before anything else
        Event::Window(window::Event::CloseRequested) => Some(InputEvent::Quit),
        Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(InputEvent::Resize {
            width: size.width.max(0.0).round() as u32,
            height: size.height.max(0.0).round() as u32,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key,
            modified_key,
            modifiers,
            text,
            ..
        }) => match status {
            event::Status::Ignored => {
                translate_key(key, modified_key, *modifiers, text.as_deref())
            }
            event::Status::Captured => None,
        },
        _ => None,
    }
}

/// Maps one key press to viewer input.
///
/// Named keys keep their identity, `Ctrl`+letter becomes a control chord on
/// the unmodified letter, and everything else is taken from the layout-aware
/// text so `:` arrives as `:` whatever the layout. Multi-character text
/// (dead keys, compose sequences) becomes [`InputEvent::TextInput`].
pub(crate) fn translate_key(
    key: &keyboard::Key,
    modified_key: &keyboard::Key,
    modifiers: Modifiers,
    text: Option<&str>,
) -> Option<InputEvent> {
    let ctrl = modifiers.command();

    if let keyboard::Key::Named(named) = key {
        let mapped = match named {
            Named::ArrowUp => Key::Up,
            Named::ArrowDown => Key::Down,
            Named::ArrowLeft => Key::Left,
            Named::ArrowRight => Key::Right,
            Named::Enter => Key::Enter,
            Named::Escape => Key::Escape,
            Named::Backspace => Key::Backspace,
            Named::Space => Key::Char(' '),
            _ => return None,
        };
        return Some(InputEvent::KeyPress(KeyPress { key: mapped, ctrl }));
    }

    if ctrl {
        let keyboard::Key::Character(c) = key else {
            return None;
        };
        let c = c.chars().next()?.to_ascii_lowercase();
        return Some(InputEvent::KeyPress(KeyPress::ctrl(c)));
    }

    let typed = match (text, modified_key) {
        (Some(text), _) if !text.is_empty() && !text.chars().any(char::is_control) => text,
        (_, keyboard::Key::Character(c)) => c.as_str(),
        _ => return None,
    };

    let mut chars = typed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(InputEvent::KeyPress(KeyPress::plain(Key::Char(c)))),
        (Some(_), Some(_)) => Some(InputEvent::TextInput(typed.to_string())),
        (None, _) => None,
    }
}
