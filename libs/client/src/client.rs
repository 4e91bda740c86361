//! HTTP client for Resource Manager.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::{Authorizer, ClientConfig, ClientError};

/// Header carrying the ARM request ID on responses.
const REQUEST_ID_HEADER: &str = "x-ms-request-id";

/// A Resource Manager client bound to one subscription.
#[derive(Debug, Clone)]
pub struct ArmClient {
    http: reqwest::Client,
    base_uri: String,
    subscription_id: String,
    authorizer: Arc<dyn Authorizer>,
}

impl ArmClient {
    /// Create a client from a base URI, subscription, and authorizer.
    pub fn new(
        base_uri: &str,
        subscription_id: impl Into<String>,
        authorizer: Arc<dyn Authorizer>,
    ) -> Result<Self, ClientError> {
        let base_uri = base_uri.trim().trim_end_matches('/');
        let scheme_ok = base_uri.starts_with("https://") || base_uri.starts_with("http://");
        if !scheme_ok || Url::parse(base_uri).is_err() {
            return Err(ClientError::InvalidBaseUri(base_uri.to_string()));
        }

        let subscription_id = subscription_id.into();
        if subscription_id.trim().is_empty() {
            return Err(ClientError::Config(
                "subscription id cannot be empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("armkit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_uri: base_uri.to_string(),
            subscription_id,
            authorizer,
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let subscription_id = config.require_subscription_id()?;
        let token = config.access_token.clone().ok_or_else(|| {
            ClientError::Authorization("missing access token. Set ARM_ACCESS_TOKEN.".to_string())
        })?;

        Self::new(
            &config.resource_manager_endpoint,
            subscription_id,
            Arc::new(token),
        )
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Build a URL for a path, or validate an absolute URL (such as a
    /// `nextLink`) against the origin of the base URI.
    fn url(&self, path_or_url: &str, api_version: &str) -> Result<String, ClientError> {
        if path_or_url.starts_with("https://") || path_or_url.starts_with("http://") {
            let link = Url::parse(path_or_url).map_err(|e| {
                ClientError::InvalidResponse(format!("invalid link {path_or_url}: {e}"))
            })?;
            let base = Url::parse(&self.base_uri)
                .map_err(|_| ClientError::InvalidBaseUri(self.base_uri.clone()))?;
            if link.origin() != base.origin() {
                return Err(ClientError::InvalidResponse(format!(
                    "refusing to follow link outside {}: {}",
                    self.base_uri, path_or_url
                )));
            }
            return Ok(path_or_url.to_string());
        }

        let separator = if path_or_url.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{}{}{}api-version={}",
            self.base_uri, path_or_url, separator, api_version
        ))
    }

    /// Make a GET request and decode the JSON body.
    ///
    /// Absolute URLs are used as-is (they already carry an `api-version`).
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path_or_url: &str,
        api_version: &str,
    ) -> Result<T, ClientError> {
        let url = self.url(path_or_url, api_version)?;
        let authorization = self.authorizer.authorization().await?;

        debug!(method = "GET", url = %url, "Sending request");
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %url, "Received response");

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::InvalidResponse(format!("failed to parse response: {e}")))
        } else {
            self.handle_error(response).await
        }
    }

    /// Handle an error response.
    async fn handle_error<T>(&self, response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body: ArmErrorResponse = response.json().await.unwrap_or_else(|_| ArmErrorResponse {
            error: ArmErrorBody {
                code: "unknown".to_string(),
                message: "Unknown error".to_string(),
            },
        });

        warn!(
            status,
            code = %body.error.code,
            request_id = ?request_id,
            "Resource Manager request failed"
        );

        Err(ClientError::api(
            status,
            body.error.code,
            body.error.message,
            request_id,
        ))
    }
}

/// ARM error envelope: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ArmErrorResponse {
    error: ArmErrorBody,
}

#[derive(Debug, Deserialize)]
struct ArmErrorBody {
    code: String,
    message: String,
}
