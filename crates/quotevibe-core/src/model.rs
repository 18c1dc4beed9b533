use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Preferred display language (ISO-like short code, e.g. "en", "tr").
    #[serde(default)]
    pub language: Option<String>,
    /// Preferred country (name or ISO code).
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// A language entry from `GET /api/languages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// A quote as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub saves_count: u64,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-quote interaction flags for the current viewer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InteractionStatus {
    pub liked: bool,
    pub saved: bool,
}

/// Per-profile follow flag for the current viewer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FollowStatus {
    pub following: bool,
}

/// Response from the external IP geolocation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoInfo {
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_calling_code: Option<String>,
}
