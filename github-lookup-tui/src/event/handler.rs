//! Event translation.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage};

/// Wait up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into the message it stands for.
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(&key_event),
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: &KeyEvent) -> AppMessage {
    // Press only; Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Checked before anything else so text entry can never swallow it
    if DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::CONFIRM.matches(key) {
        return AppMessage::Confirm;
    }

    if DefaultKeymap::BACKSPACE.matches(key) {
        return AppMessage::Input(InputMessage::Backspace);
    }

    if DefaultKeymap::CLEAR_INPUT.matches(key) {
        return AppMessage::Input(InputMessage::Clear);
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => {
            AppMessage::Input(InputMessage::Insert(ch))
        }
        _ => AppMessage::Noop,
    }
}
