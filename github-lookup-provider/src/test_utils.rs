//! Test doubles and fixtures.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{FetchError, FetchResult};
use crate::traits::JsonFetcher;

// ===== MockFetcher =====

/// Canned-response fetcher. Unknown URLs answer HTTP 404.
pub struct MockFetcher {
    responses: Mutex<HashMap<String, FetchResult<Value>>>,
    requested: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, url: &str, response: FetchResult<Value>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// URLs fetched so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Value> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::HttpStatus { code: 404 }))
    }
}

// ===== Fixtures =====

pub fn octocat_profile_json() -> Value {
    json!({
        "login": "octocat",
        "id": 583_231,
        "name": "The Octocat",
        "bio": null,
        "location": "San Francisco",
        "public_repos": 8,
        "followers": 10000,
        "following": 9
    })
}

pub fn repo_json(name: &str, description: Option<&str>, stars: u64) -> Value {
    json!({
        "name": name,
        "full_name": format!("octocat/{name}"),
        "description": description,
        "stargazers_count": stars
    })
}
