//! Render styles.
//!
//! A `Theme` is built once at startup and handed to the renderer; nothing
//! reads styles from global state.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Section headings ("GITHUB SEARCH", "USER PROFILE", ...).
    pub title: Style,
    /// Field labels and hints.
    pub label: Style,
    /// Field values.
    pub value: Style,
    /// Repository name and star count.
    pub repository: Style,
    /// Repository descriptions.
    pub description: Style,
    pub error: Style,
    /// Input prompt marker.
    pub prompt: Style,
    /// Shown in place of an empty input buffer.
    pub placeholder: Style,
}

impl Theme {
    /// Colored theme for dark terminals.
    pub fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Rgb(125, 86, 244))
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Rgb(118, 118, 118)),
            value: Style::default().fg(Color::White),
            repository: Style::default()
                .fg(Color::Rgb(4, 181, 117))
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Rgb(221, 221, 221)),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(Color::Rgb(125, 86, 244)),
            placeholder: Style::default()
                .fg(Color::Rgb(118, 118, 118))
                .add_modifier(Modifier::ITALIC),
        }
    }

    /// No colors or modifiers, for terminals without color support.
    pub fn plain() -> Self {
        let none = Style::default();
        Self {
            title: none,
            label: none,
            value: none,
            repository: none,
            description: none,
            error: none,
            prompt: none,
            placeholder: none,
        }
    }

    /// `plain()` when `NO_COLOR` is set, `dark()` otherwise.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            Self::plain()
        } else {
            Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
