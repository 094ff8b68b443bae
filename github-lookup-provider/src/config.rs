//! HTTP client configuration.

use std::time::Duration;

/// Public GitHub REST endpoint.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Identifying header sent with every request; GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "github-lookup-tui";

/// Repositories requested per query.
pub const DEFAULT_REPO_LIMIT: u8 = 10;

/// Connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Whole-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for [`GithubHttpClient`](crate::GithubHttpClient) and
/// [`QueryService`](crate::QueryService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Maximum number of repositories kept per query.
    pub repo_limit: u8,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Personal access token sent as a bearer credential when present.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            repo_limit: DEFAULT_REPO_LIMIT,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Point at another API root, e.g. GitHub Enterprise.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use `token` for bearer auth; blank values are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Limit on a whole request, including the body.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// URL of the profile endpoint for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    /// URL of the recently-updated repository list for `username`.
    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url,
            urlencoding::encode(username),
            self.repo_limit
        )
    }
}
