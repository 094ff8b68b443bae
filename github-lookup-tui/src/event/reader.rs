//! Keyboard-reading thread.
//!
//! Terminal events are translated on a dedicated thread and sent into the
//! same channel the query runner reports through, so the main loop sees
//! keys and query outcomes in the order they arrived.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::Event;
use tokio::sync::mpsc::UnboundedSender;

use super::handler::{handle_event, poll_event};
use crate::message::AppMessage;

/// How often the thread checks whether it should stop.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle to the running reader thread.
pub struct EventReader {
    stop: Arc<AtomicBool>,
    thread: JoinHandle<Result<()>>,
}

impl EventReader {
    /// Start reading terminal events into `tx`.
    pub fn spawn(tx: UnboundedSender<AppMessage>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let thread = thread::spawn(move || {
            let result = read_events(&flag, |event| forward(&tx, event));
            if let Err(e) = &result {
                log::error!("Terminal input failed: {e:#}");
                // Unblock the main loop so the error can surface
                let _ = tx.send(AppMessage::Quit);
            }
            result
        });

        Self { stop, thread }
    }

    /// Stop the thread and return the error that ended it, if any.
    pub fn stop(self) -> Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        self.thread
            .join()
            .map_err(|_| anyhow!("terminal input thread panicked"))?
    }
}

fn read_events(stop: &AtomicBool, mut send: impl FnMut(Event) -> bool) -> Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if let Some(event) = poll_event(POLL_TIMEOUT)? {
            if !send(event) {
                break;
            }
        }
    }
    Ok(())
}

/// Translate `event` and queue it; `false` once the main loop has gone away.
fn forward(tx: &UnboundedSender<AppMessage>, event: Event) -> bool {
    match handle_event(event) {
        AppMessage::Noop => true,
        msg => tx.send(msg).is_ok(),
    }
}
