//! Locale resolution -- a single authoritative (language, country) pair per
//! session, with one writer entry point.
//!
//! Competing sources are ranked by [`PrecedenceTier`]: authenticated user
//! profile, then persisted local choice, then IP geolocation, then hard
//! defaults. Geolocation resolves asynchronously, so a tier guard decides
//! whether its result may still be applied by the time it arrives.

#[cfg(test)]
mod tests;

use quotevibe_core::{
    config::LocaleConfig,
    error::QuoteVibeError,
    locale::{language_for_country, LocaleState, PrecedenceTier, DEFAULT_LANGUAGE},
    model::User,
    traits::Geolocator,
};
use quotevibe_store::Store;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves and owns the session locale.
///
/// Language and country are tracked with separate tiers: a user may have a
/// persisted language while the country still comes from geolocation.
pub struct LocaleResolver {
    state: LocaleState,
    language_tier: PrecedenceTier,
    country_tier: PrecedenceTier,
    store: Store,
    geolocator: Arc<dyn Geolocator>,
}

impl LocaleResolver {
    /// Create a resolver seeded with the configured hard defaults.
    pub fn new(store: Store, geolocator: Arc<dyn Geolocator>, defaults: &LocaleConfig) -> Self {
        let mut state = LocaleState::default();
        if !defaults.default_language.is_empty() {
            state.language = defaults.default_language.clone();
        }
        if !defaults.default_country.is_empty() {
            state.country = defaults.default_country.clone();
        }
        Self {
            state,
            language_tier: PrecedenceTier::Fallback,
            country_tier: PrecedenceTier::Fallback,
            store,
            geolocator,
        }
    }

    /// The current locale.
    pub fn state(&self) -> &LocaleState {
        &self.state
    }

    /// The active display language.
    pub fn language(&self) -> &str {
        &self.state.language
    }

    /// Apply persisted values from the store, if any. Never does network
    /// I/O; a store read failure degrades to the defaults.
    pub async fn resolve_initial(&mut self) -> LocaleState {
        match self.store.app_language().await {
            Ok(Some(language)) => {
                self.offer_language(PrecedenceTier::Stored, &language);
            }
            Ok(None) => {}
            Err(e) => warn!("failed to read persisted language: {e}"),
        }
        match self.store.app_country().await {
            Ok(Some(country)) => {
                self.offer_country(PrecedenceTier::Stored, &country);
            }
            Ok(None) => {}
            Err(e) => warn!("failed to read persisted country: {e}"),
        }
        self.state.clone()
    }

    /// Ask the geolocation service and fill in whatever is still running on
    /// hard defaults. Lookup failures are logged and leave the state
    /// untouched; this never blocks or fails the session.
    pub async fn apply_geolocation(&mut self) {
        let info = match self.geolocator.lookup().await {
            Ok(info) => info,
            Err(e) => {
                warn!("geolocation lookup failed: {e}");
                return;
            }
        };

        if let Some(country) = info.country_name.as_deref().filter(|c| !c.is_empty()) {
            self.offer_country(PrecedenceTier::Geolocation, country);
        }
        if let Some(code) = info.country_code.as_deref().filter(|c| !c.is_empty()) {
            let language = language_for_country(code).unwrap_or(DEFAULT_LANGUAGE);
            self.offer_language(PrecedenceTier::Geolocation, language);
        }
    }

    /// Explicit language change. No-op on empty input. Persists the choice
    /// and returns whether the active language actually changed, so the
    /// caller knows to reload translations.
    pub async fn change_language(&mut self, code: &str) -> Result<bool, QuoteVibeError> {
        if code.is_empty() {
            debug!("ignoring empty language change");
            return Ok(false);
        }
        let changed = self.state.language != code;
        self.state.language = code.to_string();
        self.language_tier = PrecedenceTier::Stored;
        self.store.set_app_language(code).await?;
        Ok(changed)
    }

    /// Explicit country change. No-op on empty input. Persists the choice;
    /// has no cascading effect on translations.
    pub async fn change_country(&mut self, country: &str) -> Result<(), QuoteVibeError> {
        if country.is_empty() {
            debug!("ignoring empty country change");
            return Ok(());
        }
        self.state.country = country.to_string();
        self.country_tier = PrecedenceTier::Stored;
        self.store.set_app_country(country).await?;
        Ok(())
    }

    /// An authenticated user became available (login or session restore):
    /// their profile preferences win over everything and are persisted.
    /// Returns whether the active language changed.
    pub async fn on_user_change(&mut self, user: &User) -> Result<bool, QuoteVibeError> {
        let mut language_changed = false;

        if let Some(language) = user.language.as_deref().filter(|l| !l.is_empty()) {
            language_changed = self.offer_language(PrecedenceTier::UserProfile, language);
            self.store.set_app_language(language).await?;
        }
        if let Some(country) = user.country.as_deref().filter(|c| !c.is_empty()) {
            self.offer_country(PrecedenceTier::UserProfile, country);
            self.store.set_app_country(country).await?;
        }

        Ok(language_changed)
    }

    /// Apply a candidate language from `tier` unless a higher tier already
    /// won. Returns whether the value changed.
    fn offer_language(&mut self, tier: PrecedenceTier, language: &str) -> bool {
        if tier < self.language_tier {
            debug!(
                "discarding {tier:?} language '{language}', {:?} already applied",
                self.language_tier
            );
            return false;
        }
        self.language_tier = tier;
        if self.state.language == language {
            return false;
        }
        self.state.language = language.to_string();
        true
    }

    /// Same guard for the country half of the pair.
    fn offer_country(&mut self, tier: PrecedenceTier, country: &str) -> bool {
        if tier < self.country_tier {
            debug!(
                "discarding {tier:?} country '{country}', {:?} already applied",
                self.country_tier
            );
            return false;
        }
        self.country_tier = tier;
        if self.state.country == country {
            return false;
        }
        self.state.country = country.to_string();
        true
    }
}
