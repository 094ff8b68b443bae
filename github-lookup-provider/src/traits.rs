use async_trait::async_trait;

use crate::error::FetchResult;

/// Issues one GET and decodes the body as JSON.
///
/// Implementations make exactly one attempt per call and never retry.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetch `url` and return the decoded body of a `200 OK` response.
    async fn fetch(&self, url: &str) -> FetchResult<serde_json::Value>;
}
