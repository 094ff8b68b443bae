//! Shared fixtures for unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use github_lookup_provider::{
    ClientConfig, CombinedResult, FetchError, FetchResult, JsonFetcher, Profile, QueryService,
    RepositorySummary,
};
use serde_json::{json, Value};

/// The public `octocat` account as the renderer sees it.
pub fn octocat_result() -> CombinedResult {
    CombinedResult {
        profile: Profile {
            login: "octocat".into(),
            name: Some("The Octocat".into()),
            bio: None,
            location: None,
            public_repos: 8,
            followers: 10000,
        },
        repositories: vec![RepositorySummary {
            name: "Hello-World".into(),
            description: None,
            stargazers_count: 1,
        }],
    }
}

/// Serves a fixed profile for `octocat` and fails everything else.
pub struct OctocatFetcher;

#[async_trait]
impl JsonFetcher for OctocatFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Value> {
        if url.ends_with("/users/octocat") {
            Ok(json!({ "login": "octocat", "public_repos": 8, "followers": 10000 }))
        } else if url.contains("/users/octocat/repos") {
            Ok(json!([{ "name": "Hello-World", "description": null, "stargazers_count": 1 }]))
        } else {
            Err(FetchError::HttpStatus { code: 404 })
        }
    }
}

pub fn octocat_service() -> QueryService {
    QueryService::new(Arc::new(OctocatFetcher), ClientConfig::default())
}
