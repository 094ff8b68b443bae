use crate::view::theme::Theme;
use crate::view::DEFAULT_WIDTH;

use super::AppState;

/// Everything the view needs; changed only by `update`.
pub struct App {
    /// Set by the quit key; the main loop exits after the next draw.
    pub should_quit: bool,

    /// Terminal width in columns, used for wrapping only.
    pub width: u16,

    pub state: AppState,

    /// Render styles, fixed for the session.
    pub theme: Theme,
}

impl App {
    /// Fresh session on an empty input screen.
    pub fn new(theme: Theme) -> Self {
        Self {
            should_quit: false,
            width: DEFAULT_WIDTH,
            state: AppState::input(),
            theme,
        }
    }

    /// Replace the default width with the terminal's.
    #[must_use]
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
