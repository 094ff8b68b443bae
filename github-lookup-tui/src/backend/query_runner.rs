//! Executes [`Command`]s on the tokio runtime.
//!
//! Spawned queries never see the model. Their outcome is sent back over the
//! message channel and applied by the main loop like any other event.

use github_lookup_provider::QueryService;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::AppMessage;
use crate::update::Command;

/// Turns commands into spawned tasks whose results come back as messages.
pub struct QueryRunner {
    service: QueryService,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl QueryRunner {
    /// Runner spawning on `handle` and reporting through `tx`.
    pub fn new(service: QueryService, handle: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self {
            service,
            handle,
            tx,
        }
    }

    /// Start the work `command` asks for; returns without waiting for it.
    pub fn execute(&self, command: Command) {
        match command {
            Command::RunQuery(username) => self.spawn_query(username),
        }
    }

    fn spawn_query(&self, username: String) {
        let service = self.service.clone();
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let msg = match service.run_query(&username).await {
                Ok(data) => AppMessage::QueryCompleted(data),
                Err(e) => AppMessage::QueryFailed(e),
            };

            if tx.send(msg).is_err() {
                log::debug!("UI closed before query for '{username}' finished");
            }
        });
    }
}
