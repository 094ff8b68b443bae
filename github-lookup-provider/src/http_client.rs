//! reqwest-backed [`JsonFetcher`].
//!
//! Every request carries the configured `User-Agent` plus the GitHub JSON
//! `Accept` header, and a bearer token when one is configured.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};

use crate::config::ClientConfig;
use crate::error::{FetchError, FetchResult};
use crate::traits::JsonFetcher;
use crate::utils::log_sanitizer::truncate_for_log;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubHttpClient {
    client: Client,
}

impl GithubHttpClient {
    /// Build a client with the headers and timeouts from `config`.
    pub fn new(config: &ClientConfig) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| FetchError::Transport {
                detail: format!("invalid user agent: {e}"),
            })?,
        );

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                FetchError::Transport {
                    detail: format!("invalid token value: {e}"),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl JsonFetcher for GithubHttpClient {
    async fn fetch(&self, url: &str) -> FetchResult<serde_json::Value> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if status != StatusCode::OK {
            log::warn!("GET {url} returned HTTP {}", status.as_u16());
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            detail: format!("failed to read response body: {e}"),
        })?;
        log::debug!("Response Body: {}", truncate_for_log(&body));

        parse_json(&body)
    }
}

fn transport_error(e: &reqwest::Error) -> FetchError {
    let detail = if e.is_timeout() {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    };
    FetchError::Transport { detail }
}

fn parse_json(body: &str) -> FetchResult<serde_json::Value> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        FetchError::Decode {
            detail: e.to_string(),
        }
    })
}
