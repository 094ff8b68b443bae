//! Profile query: one profile fetch plus one repository-list fetch, folded
//! into a single outcome.
//!
//! The profile is essential and its failure fails the query. The repository
//! list is supplementary: any failure there yields an empty list.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{FetchError, FetchResult, QueryError};
use crate::http_client::GithubHttpClient;
use crate::traits::JsonFetcher;
use crate::types::{CombinedResult, Profile, RepositorySummary};

/// Runs profile queries against a [`JsonFetcher`].
///
/// Cheap to clone; clones share the underlying fetcher.
#[derive(Clone)]
pub struct QueryService {
    fetcher: Arc<dyn JsonFetcher>,
    config: ClientConfig,
}

impl QueryService {
    /// Service over the given fetcher.
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: ClientConfig) -> Self {
        Self { fetcher, config }
    }

    /// Service backed by a [`GithubHttpClient`] built from `config`.
    pub fn from_config(config: ClientConfig) -> FetchResult<Self> {
        let client = GithubHttpClient::new(&config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Fetch the profile and recent repositories of `username`.
    ///
    /// The repository list is only requested once the profile has loaded.
    pub async fn run_query(&self, username: &str) -> Result<CombinedResult, QueryError> {
        log::info!("Querying profile for '{username}'");

        let profile: Profile = self
            .fetch_as(&self.config.profile_url(username))
            .await
            .map_err(|cause| {
                log::warn!("Profile fetch for '{username}' failed: {cause}");
                QueryError::ProfileUnavailable {
                    username: username.to_string(),
                    cause,
                }
            })?;

        let repositories = match self
            .fetch_as::<Vec<RepositorySummary>>(&self.config.repos_url(username))
            .await
        {
            Ok(mut repos) => {
                repos.truncate(usize::from(self.config.repo_limit));
                repos
            }
            Err(e) => {
                log::warn!("Repository fetch for '{username}' failed, showing none: {e}");
                Vec::new()
            }
        };

        log::info!(
            "Loaded '{}' with {} repositories",
            profile.login,
            repositories.len()
        );

        Ok(CombinedResult {
            profile,
            repositories,
        })
    }

    async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let value = self.fetcher.fetch(url).await?;
        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            detail: e.to_string(),
        })
    }
}

impl std::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService")
            .field("base_url", &self.config.base_url)
            .field("repo_limit", &self.config.repo_limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockFetcher, octocat_profile_json, repo_json};
    use serde_json::json;

    const PROFILE_URL: &str = "https://api.github.com/users/octocat";
    const REPOS_URL: &str = "https://api.github.com/users/octocat/repos?sort=updated&per_page=10";

    fn service(fetcher: &Arc<MockFetcher>) -> QueryService {
        QueryService::new(fetcher.clone(), ClientConfig::default())
    }

    #[tokio::test]
    async fn combines_profile_and_repositories() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PROFILE_URL, Ok(octocat_profile_json()));
        fetcher.respond(
            REPOS_URL,
            Ok(json!([repo_json("Hello-World", None, 1), repo_json("Spoon-Knife", Some("fork me"), 12)])),
        );

        let result = service(&fetcher).run_query("octocat").await.unwrap();

        assert_eq!(result.profile.login, "octocat");
        assert_eq!(result.profile.public_repos, 8);
        assert_eq!(result.repositories.len(), 2);
        assert_eq!(result.repositories[0].name, "Hello-World");
        assert_eq!(result.repositories[0].description, None);
        assert_eq!(result.repositories[1].stargazers_count, 12);
        assert_eq!(fetcher.requested(), vec![PROFILE_URL, REPOS_URL]);
    }

    #[tokio::test]
    async fn profile_failure_fails_query_without_fetching_repositories() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PROFILE_URL, Err(FetchError::HttpStatus { code: 404 }));
        fetcher.respond(REPOS_URL, Ok(json!([])));

        let err = service(&fetcher).run_query("octocat").await.unwrap_err();

        assert_eq!(
            err,
            QueryError::ProfileUnavailable {
                username: "octocat".into(),
                cause: FetchError::HttpStatus { code: 404 },
            }
        );
        assert_eq!(fetcher.requested(), vec![PROFILE_URL]);
    }

    #[tokio::test]
    async fn undecodable_profile_fails_query() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PROFILE_URL, Ok(json!({ "message": "no login here" })));

        let err = service(&fetcher).run_query("octocat").await.unwrap_err();
        let QueryError::ProfileUnavailable { cause, .. } = err;
        assert!(matches!(cause, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn repository_failure_yields_empty_list() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PROFILE_URL, Ok(octocat_profile_json()));
        fetcher.respond(
            REPOS_URL,
            Err(FetchError::Transport {
                detail: "connection reset".into(),
            }),
        );

        let result = service(&fetcher).run_query("octocat").await.unwrap();

        assert_eq!(result.profile.followers, 10000);
        assert!(result.repositories.is_empty());
    }

    #[tokio::test]
    async fn malformed_repository_list_yields_empty_list() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PROFILE_URL, Ok(octocat_profile_json()));
        fetcher.respond(REPOS_URL, Ok(json!({ "message": "not a list" })));

        let result = service(&fetcher).run_query("octocat").await.unwrap();
        assert!(result.repositories.is_empty());
    }

    #[tokio::test]
    async fn repository_list_is_capped() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PROFILE_URL, Ok(octocat_profile_json()));
        let repos: Vec<_> = (0..15)
            .map(|i| repo_json(&format!("repo-{i}"), None, i))
            .collect();
        fetcher.respond(REPOS_URL, Ok(serde_json::Value::Array(repos)));

        let result = service(&fetcher).run_query("octocat").await.unwrap();

        assert_eq!(result.repositories.len(), 10);
        assert_eq!(result.repositories[0].name, "repo-0");
        assert_eq!(result.repositories[9].name, "repo-9");
    }

    #[tokio::test]
    async fn empty_username_is_not_validated_locally() {
        let fetcher = Arc::new(MockFetcher::new());

        let err = service(&fetcher).run_query("").await.unwrap_err();

        assert!(matches!(err, QueryError::ProfileUnavailable { ref username, .. } if username.is_empty()));
        assert_eq!(fetcher.requested(), vec!["https://api.github.com/users/"]);
    }
}
