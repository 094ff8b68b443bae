//! Update layer: the state machine.
//!
//! `update` is the only place the model changes. It never performs I/O;
//! when a query must start it returns a [`Command`] for the runtime to
//! execute, and the outcome comes back later as another message.
//!
//! Rules, in priority order:
//!
//! 1. `Quit` ends the session from any state.
//! 2. `Resize` records the width and leaves the state alone.
//! 3. `Confirm` resets `Result`/`Error` to an empty `Input`, turns `Input`
//!    into `Loading` (emitting `Command::RunQuery`), and is ignored while
//!    `Loading`.
//! 4. `Input(..)` edits the buffer only in `Input`.
//! 5. `QueryCompleted` / `QueryFailed` settle a `Loading` state. Outside
//!    `Loading` they are dropped.
//!
//! Because the only transition that emits `RunQuery` starts from `Input`
//! and lands in `Loading`, at most one query is ever in flight.

mod input;

use crate::message::AppMessage;
use crate::model::{App, AppState, Mode};

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up the profile and repositories of this username.
    RunQuery(String),
}

/// Apply `msg` to the model and return the side effect it asks for, if any.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Resize(width) => {
            app.width = width;
        }

        AppMessage::Confirm => return confirm(app),

        AppMessage::Input(input_msg) => {
            // Only the input screen owns keyboard focus
            if let Some(buffer) = app.state.buffer_mut() {
                input::update(buffer, input_msg);
            }
        }

        AppMessage::QueryCompleted(data) => {
            if app.state.mode() == Mode::Loading {
                app.state = AppState::Result { data };
            } else {
                log::debug!(
                    "Dropping result for '{}' received in {:?} state",
                    data.profile.login,
                    app.state.mode()
                );
            }
        }

        AppMessage::QueryFailed(err) => {
            if app.state.mode() == Mode::Loading {
                app.state = AppState::Error {
                    message: err.to_string(),
                };
            } else {
                log::debug!("Dropping failure received in {:?} state: {err}", app.state.mode());
            }
        }

        AppMessage::Noop => {}
    }

    None
}

fn confirm(app: &mut App) -> Option<Command> {
    if app.state.mode().is_settled() {
        app.state = AppState::input();
        return None;
    }

    match &mut app.state {
        AppState::Input { buffer } => {
            let query = std::mem::take(buffer);
            log::info!("Searching for '{query}'");
            app.state = AppState::Loading {
                query: query.clone(),
            };
            Some(Command::RunQuery(query))
        }
        _ => None,
    }
}
