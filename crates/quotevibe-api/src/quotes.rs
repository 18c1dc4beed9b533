//! Quote browsing endpoints (public, no auth required).

use crate::client::ApiClient;
use quotevibe_core::{
    error::QuoteVibeError,
    model::{Quote, User},
};

/// Filters for `GET /api/quotes`.
#[derive(Debug, Clone, Default)]
pub struct QuoteQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub category_id: Option<String>,
    pub user_id: Option<String>,
    pub search: Option<String>,
}

impl QuoteQuery {
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(ref category_id) = self.category_id {
            params.push(("category_id", category_id.clone()));
        }
        if let Some(ref user_id) = self.user_id {
            params.push(("user_id", user_id.clone()));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

impl ApiClient {
    /// List quotes, newest first, with optional filters.
    pub async fn quotes(&self, query: &QuoteQuery) -> Result<Vec<Quote>, QuoteVibeError> {
        self.get_json("/quotes", &query.to_params(), false).await
    }

    /// Fetch a single quote by id.
    pub async fn quote(&self, quote_id: &str) -> Result<Quote, QuoteVibeError> {
        self.get_json(&format!("/quotes/{quote_id}"), &[], false)
            .await
    }

    /// Fetch a public user profile.
    pub async fn user(&self, user_id: &str) -> Result<User, QuoteVibeError> {
        self.get_json(&format!("/users/{user_id}"), &[], false)
            .await
    }
}
