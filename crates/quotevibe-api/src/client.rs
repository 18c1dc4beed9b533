//! Backend REST client plumbing: URL building, bearer auth, JSON decoding,
//! and error mapping shared by every endpoint module.

use quotevibe_core::{config::ApiConfig, error::QuoteVibeError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

/// Client for the QuoteVibe backend REST API.
///
/// The bearer token is shared interior state: the session sets it after a
/// login or restore and clears it on logout, and every authenticated
/// request reads the current value.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create from config values.
    pub fn from_config(config: &ApiConfig) -> Result<Self, QuoteVibeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| QuoteVibeError::Api(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Install the bearer token used for authenticated requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Whether a bearer token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// GET a JSON body, optionally with query params.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        authed: bool,
    ) -> Result<T, QuoteVibeError> {
        let url = self.url(path);
        debug!("api: GET {url}");

        let mut req = self.client.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if authed {
            req = self.attach_bearer(req)?;
        }

        let resp = req
            .send()
            .await
            .map_err(|e| QuoteVibeError::Api(format!("GET {path} failed: {e}")))?;
        Self::decode(path, resp).await
    }

    /// POST a JSON body and decode a JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        authed: bool,
    ) -> Result<T, QuoteVibeError> {
        let url = self.url(path);
        debug!("api: POST {url}");

        let mut req = self.client.post(&url).json(body);
        if authed {
            req = self.attach_bearer(req)?;
        }

        let resp = req
            .send()
            .await
            .map_err(|e| QuoteVibeError::Api(format!("POST {path} failed: {e}")))?;
        Self::decode(path, resp).await
    }

    fn attach_bearer(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, QuoteVibeError> {
        let token = self.current_token().ok_or(QuoteVibeError::Unauthenticated)?;
        Ok(req.header("Authorization", format!("Bearer {token}")))
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        resp: reqwest::Response,
    ) -> Result<T, QuoteVibeError> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(QuoteVibeError::Unauthenticated);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(QuoteVibeError::Api(format!(
                "{path} returned {status}: {text}"
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| QuoteVibeError::Api(format!("{path} returned malformed body: {e}")))
    }
}
