//! github-lookup
//!
//! Look up a GitHub user's profile and recent repositories from the terminal.
//!
//! ## Architecture
//!
//! The Elm Architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: events that change it (`message/`)
//! - **Update**: the state machine (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: terminal input translation (`event/`)
//! - **Backend**: query execution (`backend/`)
//! - **Util**: terminal setup and logging (`util/`)

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use github_lookup_provider::{ClientConfig, QueryService};
use tokio::sync::mpsc;

use backend::QueryRunner;
use event::EventReader;
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};
use view::theme::Theme;

fn main() {
    let _log_guard = init_logging();

    if let Err(e) = run_app() {
        log::error!("Fatal error: {e:#}");
        println!("Error: {e:#}");
    }
}

fn run_app() -> Result<()> {
    // 1. Query backend (before touching the terminal so errors print normally)
    let runtime = tokio::runtime::Runtime::new()?;
    let config = ClientConfig::default().with_token(std::env::var("GITHUB_TOKEN").ok());
    let service = QueryService::from_config(config)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = QueryRunner::new(service, runtime.handle().clone(), tx.clone());

    // 2. Terminal
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 3. App
    let mut app = model::App::new(Theme::from_env());
    if let Ok(size) = terminal.size() {
        app = app.with_width(size.width);
    }
    log::info!("github-lookup started");

    // 4. Main loop; keys and query outcomes arrive on the same channel
    let reader = EventReader::spawn(tx);
    let result = app::run(&mut terminal, &mut app, &runner, &mut rx);
    let input_result = reader.stop();

    // 5. Restore the terminal whether or not the loop failed
    restore_terminal(&mut terminal)?;

    result.and(input_result)
}
