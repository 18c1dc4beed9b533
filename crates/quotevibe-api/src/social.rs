//! Social toggle endpoints. Every POST returns the server-confirmed new
//! state of the flag, which the caller applies as-is.

use crate::client::ApiClient;
use async_trait::async_trait;
use quotevibe_core::{
    error::QuoteVibeError,
    model::{FollowStatus, InteractionStatus},
    traits::SocialApi,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct LikeResponse {
    liked: bool,
}

#[derive(Deserialize)]
struct SaveResponse {
    saved: bool,
}

#[derive(Deserialize)]
struct FollowResponse {
    following: bool,
}

/// Empty JSON body for toggle POSTs.
#[derive(serde::Serialize)]
struct Empty {}

#[async_trait]
impl SocialApi for ApiClient {
    async fn quote_status(&self, quote_id: &str) -> Result<InteractionStatus, QuoteVibeError> {
        self.get_json(&format!("/quotes/{quote_id}/status"), &[], true)
            .await
    }

    async fn toggle_like(&self, quote_id: &str) -> Result<bool, QuoteVibeError> {
        let resp: LikeResponse = self
            .post_json(&format!("/quotes/{quote_id}/like"), &Empty {}, true)
            .await?;
        Ok(resp.liked)
    }

    async fn toggle_save(&self, quote_id: &str) -> Result<bool, QuoteVibeError> {
        let resp: SaveResponse = self
            .post_json(&format!("/quotes/{quote_id}/save"), &Empty {}, true)
            .await?;
        Ok(resp.saved)
    }

    async fn follow_status(&self, user_id: &str) -> Result<FollowStatus, QuoteVibeError> {
        self.get_json(&format!("/users/{user_id}/follow-status"), &[], true)
            .await
    }

    async fn toggle_follow(&self, user_id: &str) -> Result<bool, QuoteVibeError> {
        let resp: FollowResponse = self
            .post_json(&format!("/users/{user_id}/follow"), &Empty {}, true)
            .await?;
        Ok(resp.following)
    }
}
