//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to
//! `<cache dir>/github-lookup/github-lookup.log`. `log` records from the
//! provider crate are captured by the subscriber as well. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "github-lookup";
const LOG_FILE: &str = "github-lookup.log";

/// Install the file subscriber.
///
/// Returns the writer guard, which must live until exit so buffered lines
/// are flushed. Returns `None` (logging disabled) when no cache directory is
/// available or it cannot be created.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(guard)
}

fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR))
}
