//! InfraWatch backend client

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{Check, ErrorBody, NewCheck, Summary};
use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use crate::io::{HttpClient, HttpResponse, ReqwestHttpClient};

/// Client for the `/api/checks` endpoints
#[derive(Clone)]
pub struct CheckApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for CheckApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CheckApi {
    pub fn new(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created CheckApi for {}", config.api_base_url);
        Self {
            base_url: config.api_base_url.clone(),
            http,
        }
    }

    /// Client backed by reqwest
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn checks_url(&self) -> String {
        format!("{}/api/checks", self.base_url)
    }

    /// `id` is percent-encoded as a single path segment
    pub fn check_url(&self, id: &str) -> String {
        format!("{}/api/checks/{}", self.base_url, urlencoding::encode(id))
    }

    pub fn summary_url(&self, id: &str) -> String {
        format!(
            "{}/api/checks/{}/summary",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    /// `GET /api/checks`
    pub async fn list_checks(&self) -> Result<Vec<Check>> {
        let response = self.http.get(&self.checks_url()).await?;
        decode(response)
    }

    /// `POST /api/checks`
    ///
    /// Any 2xx is a success. The created check is returned when the body
    /// parses as one.
    pub async fn create_check(&self, check: &NewCheck) -> Result<Option<Check>> {
        let body = serde_json::to_value(check).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.http.post_json(&self.checks_url(), &body).await?;
        ensure_success(&response)?;

        match serde_json::from_str(&response.body) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                tracing::debug!("Create response is not a check: {}", e);
                Ok(None)
            }
        }
    }

    /// `GET /api/checks/{id}/summary`
    pub async fn fetch_summary(&self, id: &str) -> Result<Summary> {
        let response = self.http.get(&self.summary_url(id)).await?;
        decode(response)
    }

    /// `DELETE /api/checks/{id}`; the response body is ignored
    pub async fn delete_check(&self, id: &str) -> Result<()> {
        let response = self.http.delete(&self.check_url(id)).await?;
        ensure_success(&response)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the backend's
/// `error` field when the body carries one
fn ensure_success(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.error);

    tracing::debug!(
        "Backend returned {} (message: {:?})",
        response.status,
        message
    );

    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    ensure_success(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
