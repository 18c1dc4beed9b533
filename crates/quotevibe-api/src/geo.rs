//! External IP geolocation client (ipapi.co).

use async_trait::async_trait;
use quotevibe_core::{
    config::GeoConfig, error::QuoteVibeError, model::GeoInfo, traits::Geolocator,
};
use std::time::Duration;
use tracing::debug;

/// Geolocation lookup timeout. Kept short so a slow lookup never holds up
/// session start for long.
const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Client for the external IP geolocation service.
pub struct GeoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoClient {
    /// Create from config values.
    pub fn from_config(config: &GeoConfig) -> Result<Self, QuoteVibeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .map_err(|e| QuoteVibeError::Api(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Geolocator for GeoClient {
    async fn lookup(&self) -> Result<GeoInfo, QuoteVibeError> {
        debug!("geo: GET {}", self.endpoint);

        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| QuoteVibeError::Api(format!("geolocation request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(QuoteVibeError::Api(format!(
                "geolocation returned {}",
                resp.status()
            )));
        }

        resp.json::<GeoInfo>()
            .await
            .map_err(|e| QuoteVibeError::Api(format!("geolocation returned malformed body: {e}")))
    }
}
