use thiserror::Error;

/// Failure of a single HTTP GET issued by a [`JsonFetcher`](crate::JsonFetcher).
///
/// Each call is attempted exactly once, so every variant is final for that call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS resolution, connect
    /// failure, reset, timeout, or an unreadable body).
    #[error("network error: {detail}")]
    Transport {
        /// Error details from the HTTP client.
        detail: String,
    },

    /// The server answered with a status other than `200 OK`.
    #[error("API error: {code}")]
    HttpStatus {
        /// HTTP status code returned by the server.
        code: u16,
    },

    /// The body of a `200 OK` response was not the expected JSON.
    #[error("invalid response body: {detail}")]
    Decode {
        /// Parser error details.
        detail: String,
    },
}

/// Failure of a whole profile query.
///
/// Only the profile half of a query can fail it; repository failures are
/// absorbed by [`QueryService`](crate::QueryService).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The profile could not be fetched or decoded.
    #[error("could not load profile for '{username}': {cause}")]
    ProfileUnavailable {
        /// Username the query was issued for.
        username: String,
        /// Underlying fetch failure.
        #[source]
        cause: FetchError,
    },
}

/// Result alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
