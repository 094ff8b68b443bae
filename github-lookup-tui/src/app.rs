//! Main loop.
//!
//! Each iteration draws the current state, then blocks on the message
//! channel. Keys (from the `EventReader` thread) and query outcomes (from
//! the `QueryRunner`) share that channel, so they are applied strictly in
//! arrival order.

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::QueryRunner;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::view;

/// Run until the model asks to quit or every sender has gone away.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &QueryRunner,
    messages: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        let Some(msg) = messages.blocking_recv() else {
            log::warn!("Message channel closed, leaving main loop");
            break;
        };

        if let Some(command) = update::update(app, msg) {
            runner.execute(command);
        }
    }

    Ok(())
}
