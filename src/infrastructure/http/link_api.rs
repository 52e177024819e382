//! reqwest implementation of the remote shortening API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{CreationRequest, CreationResult};
use crate::domain::repositories::LinkApi;
use crate::error::{AppError, GENERIC_FAILURE_MESSAGE};
use crate::utils::url_normalizer::api_endpoint;

/// Listing of the caller's links.
pub const MY_URLS_PATH: &str = "/api/url/myurls";
/// Link creation.
pub const SHORTEN_PATH: &str = "/api/url/shorten";

/// HTTP client for the shortening API.
///
/// Every request carries `Authorization: Bearer <token>`. Non-success statuses
/// become [`AppError::Remote`] with the body's `message` when there is one.
#[derive(Debug, Clone)]
pub struct HttpLinkApi {
    client: Client,
    base_url: Url,
}

impl HttpLinkApi {
    /// Builds a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] if the HTTP client cannot be constructed
    /// (e.g. TLS backend initialisation failure).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        api_endpoint(&self.base_url, path).map_err(|e| AppError::Transport(e.to_string()))
    }
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn fetch_links(&self, token: &str) -> Result<Value, AppError> {
        let url = self.endpoint(MY_URLS_PATH)?;
        tracing::debug!(%url, "Fetching links");

        let response = self.client.get(url).bearer_auth(token).send().await?;
        let response = ensure_success(response, "Failed to fetch links").await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn shorten(
        &self,
        token: &str,
        request: &CreationRequest,
    ) -> Result<CreationResult, AppError> {
        let url = self.endpoint(SHORTEN_PATH)?;
        tracing::debug!(%url, validity = %request.validity_period, "Creating short link");

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        let response = ensure_success(response, GENERIC_FAILURE_MESSAGE).await?;

        response
            .json::<CreationResult>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Passes successful responses through; turns the rest into [`AppError::Remote`].
async fn ensure_success(response: Response, fallback: &str) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string());

    Err(AppError::remote(status.as_u16(), message))
}
