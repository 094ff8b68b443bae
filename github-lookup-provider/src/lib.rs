//! # github-lookup-provider
//!
//! Looks up a GitHub user's public profile and most recently updated
//! repositories through the GitHub REST API.
//!
//! ## Endpoints
//!
//! | Request | Purpose |
//! |---------|---------|
//! | `GET /users/{username}` | profile (login, name, bio, location, counts) |
//! | `GET /users/{username}/repos?sort=updated&per_page=10` | recent repositories |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for TLS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use github_lookup_provider::{ClientConfig, QueryService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = QueryService::from_config(ClientConfig::default())?;
//!
//!     let result = service.run_query("octocat").await?;
//!     println!("{} has {} followers", result.profile.login, result.profile.followers);
//!     for repo in &result.repositories {
//!         println!("{} (★ {})", repo.name, repo.stargazers_count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! - [`FetchError`] describes a single GET: transport failure, non-200
//!   status, or an undecodable body. No call is retried.
//! - [`QueryError`] is returned by [`QueryService::run_query`] only when the
//!   profile cannot be loaded. A failed repository fetch yields an empty
//!   repository list instead.

mod config;
mod error;
mod http_client;
mod query;
mod traits;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{ClientConfig, DEFAULT_REPO_LIMIT, DEFAULT_USER_AGENT, GITHUB_API_BASE};
pub use error::{FetchError, FetchResult, QueryError};
pub use http_client::GithubHttpClient;
pub use query::QueryService;
pub use traits::JsonFetcher;
pub use types::{CombinedResult, Profile, RepositorySummary};
