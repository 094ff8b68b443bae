use github_lookup_provider::{CombinedResult, QueryError};

use super::InputMessage;

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Leave the application from any screen.
    Quit,

    /// Terminal width changed.
    Resize(u16),

    /// Submit the username, or reset a finished search.
    Confirm,

    /// Edit the username buffer.
    Input(InputMessage),

    /// A query finished successfully.
    QueryCompleted(CombinedResult),

    /// A query failed.
    QueryFailed(QueryError),

    /// Ignored event.
    Noop,
}
