//! Event layer: turns terminal input into messages.
//!
//! `handle_event` translates a crossterm event into an `AppMessage` without
//! looking at the model; whether a key has any effect in the current state
//! is decided by the update layer. `EventReader` runs that translation on
//! its own thread and queues the result for the main loop.

mod handler;
mod keymap;
mod reader;

pub use reader::EventReader;
