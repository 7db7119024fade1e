//! HTTP client abstraction for testability
//!
//! Futures are not `Send` because the browser's fetch is single-threaded.

use async_trait::async_trait;

use crate::error::{ApiError, Result};

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse>;

    /// Send a DELETE request
    async fn delete(&self, url: &str) -> Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(method: &str, url: &str, response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("GET {} failed: {}", url, e)))?;

        Self::finish("GET", url, response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("POST {} failed: {}", url, e)))?;

        Self::finish("POST", url, response).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("DELETE {} failed: {}", url, e)))?;

        Self::finish("DELETE", url, response).await
    }
}
