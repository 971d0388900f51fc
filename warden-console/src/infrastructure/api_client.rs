use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;
use warden_model::ApiResponse;

use crate::app::AppConfig;
use crate::infrastructure::constants::routes::API_BASE;

/// Failures reported by the user-management service itself.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized - please sign in again")]
    Unauthorized,

    /// Non-success status; `message` is the server's own error text when it
    /// sent one.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Empty response from server")]
    EmptyResponse,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// HTTP client for the user-management service
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token: Option<Arc<str>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            // In development, don't follow redirects to avoid HTTP->HTTPS issues
            .redirect(if cfg!(debug_assertions) {
                reqwest::redirect::Policy::none()
            } else {
                reqwest::redirect::Policy::default()
            })
            .build()?;

        info!("[ApiClient] Creating new API client with base URL: {}", base_url);

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Self::new(config.server_url(), config.request_timeout())?;
        Ok(match config.api_token() {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Arc::from(token.into()));
        self
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        if p.starts_with(API_BASE) {
            format!("{}{}", self.base_url, p)
        } else {
            let path = p.trim_start_matches('/');
            format!("{}{}/{}", self.base_url, API_BASE, path)
        }
    }

    /// URL of one item under `collection`. `segment` is encoded as a single
    /// path segment, so `/`, `?`, `#` and `%` in it reach the server intact.
    pub fn item_url(&self, collection: &str, segment: &str) -> Result<String> {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(anyhow!("Invalid path segment `{}`", segment));
        }

        let mut url = Url::parse(&self.build_url(collection))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .push(segment);
        Ok(url.into())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach authentication headers
    fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Execute a request and unwrap the response envelope
    async fn execute_request<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let api_response: ApiResponse<T> = response.json().await?;
                api_response
                    .data
                    .ok_or_else(|| ApiError::EmptyResponse.into())
            }
            _ => Err(Self::failure(response).await.into()),
        }
    }

    /// Execute a request whose body, if any, is ignored
    async fn execute_without_body(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::failure(response).await.into())
        }
    }

    async fn failure(response: Response) -> ApiError {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("[ApiClient] Request rejected as unauthorized");
            return ApiError::Unauthorized;
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.failure_text().map(str::to_string))
            .unwrap_or_else(|| format!("Request failed with status {}: {}", status, body));

        ApiError::Status { status, message }
    }

    /// GET request with authentication
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET request to: {}", url);

        let request = self.build_request(self.client.get(&url));
        self.execute_request(request).await
    }

    /// POST request with authentication
    pub async fn post<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R> {
        let url = self.build_url(path);
        debug!("POST request to: {}", url);

        let request = self.build_request(self.client.post(&url).json(body));
        self.execute_request(request).await
    }

    /// DELETE request; accepts both an envelope and 204 No Content
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!("DELETE request to: {}", url);

        let request = self.build_request(self.client.delete(&url));
        self.execute_without_body(request).await
    }
}
