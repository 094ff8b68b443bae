//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key plus the exact modifiers it must be pressed with.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether `key` is exactly this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // Input editing
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
