//! Util layer: terminal setup and logging.
//!
//! `init_terminal` puts the terminal in raw mode on the alternate screen;
//! `restore_terminal` undoes it and must run on every exit path, including
//! when the main loop returns an error. `install_panic_hook` covers the
//! one path that skips it.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal};
