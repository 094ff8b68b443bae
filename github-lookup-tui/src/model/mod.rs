//! Model layer: application state.
//!
//! `App` is owned by the main loop and only mutated by `update::update`.

mod app;
mod state;

pub use app::App;
pub use state::{AppState, Mode, INPUT_CHAR_LIMIT};
