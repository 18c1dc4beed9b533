//! Locale model -- the resolved (language, country) pair and the precedence
//! tiers that compete to set it.

use serde::{Deserialize, Serialize};

/// Hard default language when no other source wins.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Hard default country when no other source wins.
pub const DEFAULT_COUNTRY: &str = "US";

/// The resolved locale governing displayed text and regional defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleState {
    /// ISO-like short code, e.g. "en", "tr". Never empty.
    pub language: String,
    /// Country name or ISO code. Never empty.
    pub country: String,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Priority rank among competing sources of the locale value.
///
/// Ordering matters: a source may only overwrite the current state when its
/// tier is greater than or equal to the tier that last won. This keeps a
/// slow geolocation response from clobbering a persisted or user-profile
/// choice that arrived first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrecedenceTier {
    /// Hard defaults ("en"/"US").
    Fallback,
    /// IP geolocation lookup.
    Geolocation,
    /// Previously persisted local choice (or an explicit change this session).
    Stored,
    /// Authenticated user's profile preference.
    UserProfile,
}

/// Map an ISO-3166 alpha-2 country code to a default display language.
///
/// Unmapped countries get no suggestion; the resolver falls back to "en".
pub fn language_for_country(country_code: &str) -> Option<&'static str> {
    match country_code {
        "TR" => Some("tr"),
        "US" | "GB" => Some("en"),
        _ => None,
    }
}
