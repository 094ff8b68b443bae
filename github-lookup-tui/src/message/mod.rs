//! Message layer: everything that can change the model.
//!
//! Keyboard input and query completions arrive as the same `AppMessage`
//! type, so the update layer sees one ordered stream.

mod app;
mod input;

pub use app::AppMessage;
pub use input::InputMessage;
