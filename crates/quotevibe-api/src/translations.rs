//! Translation bundle and language-list endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use quotevibe_core::{error::QuoteVibeError, model::Language, traits::TranslationSource};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
struct TranslationsResponse {
    #[serde(default)]
    translations: HashMap<String, String>,
}

#[async_trait]
impl TranslationSource for ApiClient {
    async fn fetch_bundle(
        &self,
        language: &str,
    ) -> Result<HashMap<String, String>, QuoteVibeError> {
        let resp: TranslationsResponse = self
            .get_json(&format!("/translations/{language}"), &[], false)
            .await?;
        Ok(resp.translations)
    }

    async fn languages(&self) -> Result<Vec<Language>, QuoteVibeError> {
        self.get_json("/languages", &[], false).await
    }
}
