//! Screen state of the lookup session.

use github_lookup_provider::CombinedResult;

/// Longest username the input buffer accepts.
pub const INPUT_CHAR_LIMIT: usize = 156;

/// What the user is looking at.
///
/// Exactly one variant is live, so combinations such as "loading with an
/// error" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Typing a username. Initial state and the target of every reset.
    Input { buffer: String },
    /// A query for `query` is in flight.
    Loading { query: String },
    /// Last query succeeded.
    Result { data: CombinedResult },
    /// Last query failed.
    Error { message: String },
}

impl AppState {
    /// Empty input prompt.
    pub fn input() -> Self {
        Self::Input {
            buffer: String::new(),
        }
    }

    /// Which of the four screens this state is.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Input { .. } => Mode::Input,
            Self::Loading { .. } => Mode::Loading,
            Self::Result { .. } => Mode::Result,
            Self::Error { .. } => Mode::Error,
        }
    }

    /// Mutable access to the input buffer; `None` outside `Input`.
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Input { buffer } => Some(buffer),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::input()
    }
}

/// Discriminant of [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Input,
    Loading,
    Result,
    Error,
}

impl Mode {
    /// Result and error screens wait for a confirm before accepting input again.
    pub fn is_settled(self) -> bool {
        matches!(self, Mode::Result | Mode::Error)
    }
}
