use crate::{
    error::QuoteVibeError,
    model::{AuthSession, FollowStatus, GeoInfo, InteractionStatus, Language, User},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Authentication API -- login, registration, and session restore.
///
/// Implemented by the backend REST client; mocked in tests.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Install the bearer token used for authenticated requests.
    fn set_token(&self, token: &str);

    /// Drop the bearer token (logout).
    fn clear_token(&self);

    /// Log an existing user in. Returns the bearer token and user record.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, QuoteVibeError>;

    /// Register a new account.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, QuoteVibeError>;

    /// Fetch the current user for the stored token.
    async fn me(&self) -> Result<User, QuoteVibeError>;
}

/// Social interaction API -- per-entity status fetches and toggles.
///
/// Every toggle is server-confirmed: the returned boolean is the new state
/// as decided by the backend, not an echo of the request.
#[async_trait]
pub trait SocialApi: Send + Sync {
    /// Fetch liked/saved flags for a quote as seen by the current viewer.
    async fn quote_status(&self, quote_id: &str) -> Result<InteractionStatus, QuoteVibeError>;

    /// Flip the like flag on a quote. Returns the new state.
    async fn toggle_like(&self, quote_id: &str) -> Result<bool, QuoteVibeError>;

    /// Flip the save flag on a quote. Returns the new state.
    async fn toggle_save(&self, quote_id: &str) -> Result<bool, QuoteVibeError>;

    /// Fetch the follow flag for a profile as seen by the current viewer.
    async fn follow_status(&self, user_id: &str) -> Result<FollowStatus, QuoteVibeError>;

    /// Flip the follow flag on a profile. Returns the new state.
    async fn toggle_follow(&self, user_id: &str) -> Result<bool, QuoteVibeError>;
}

/// Translation bundle source.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// Fetch the key → text bundle for one language.
    async fn fetch_bundle(&self, language: &str)
        -> Result<HashMap<String, String>, QuoteVibeError>;

    /// List the languages the backend knows about.
    async fn languages(&self) -> Result<Vec<Language>, QuoteVibeError>;
}

/// IP-based geolocation lookup.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Look up the caller's country from its IP address.
    async fn lookup(&self) -> Result<GeoInfo, QuoteVibeError>;
}
