//! Session -- the composition root wiring store, auth, locale, translations,
//! and interaction state together.
//!
//! Startup order mirrors what a frontend needs: restore the token and user,
//! resolve the locale, load translations for it, then let geolocation fill
//! in asynchronously (reloading translations only if it actually changed
//! the language).

use crate::i18n::TranslationCache;
use crate::locale::LocaleResolver;
use crate::social::Interactions;
use quotevibe_api::{ApiClient, GeoClient};
use quotevibe_core::{
    config::Config,
    error::QuoteVibeError,
    locale::LocaleState,
    model::{AuthSession, User},
    traits::{AuthApi, Geolocator, SocialApi, TranslationSource},
};
use quotevibe_store::Store;
use std::sync::Arc;
use tracing::{info, warn};

/// One viewer's session against the QuoteVibe backend.
pub struct Session {
    store: Store,
    auth: Arc<dyn AuthApi>,
    geo_enabled: bool,
    locale: LocaleResolver,
    i18n: TranslationCache,
    social: Interactions,
    user: Option<User>,
}

impl Session {
    /// Production wiring: SQLite store, REST client, ipapi geolocation.
    pub async fn connect(config: &Config) -> Result<Self, QuoteVibeError> {
        let store = Store::new(&config.store).await?;
        let api = Arc::new(ApiClient::from_config(&config.api)?);
        let geolocator = Arc::new(GeoClient::from_config(&config.geo)?);
        Ok(Self::with_parts(
            config,
            store,
            api.clone(),
            api.clone(),
            api,
            geolocator,
        ))
    }

    /// Assemble a session from parts. The seams are traits so tests (or an
    /// embedder with its own transport) can swap any of them out.
    pub fn with_parts(
        config: &Config,
        store: Store,
        auth: Arc<dyn AuthApi>,
        social_api: Arc<dyn SocialApi>,
        translations: Arc<dyn TranslationSource>,
        geolocator: Arc<dyn Geolocator>,
    ) -> Self {
        let locale = LocaleResolver::new(store.clone(), geolocator, &config.locale);
        let i18n = TranslationCache::new(translations, &config.locale.default_language);
        let social = Interactions::new(social_api);
        Self {
            store,
            auth,
            geo_enabled: config.geo.enabled,
            locale,
            i18n,
            social,
            user: None,
        }
    }

    /// Start the session: restore auth, resolve locale, load translations,
    /// then apply geolocation. Restore and geolocation failures degrade to
    /// a logged-out session and the already-resolved locale.
    pub async fn start(&mut self) -> Result<(), QuoteVibeError> {
        if let Some(token) = self.store.token().await? {
            self.auth.set_token(&token);
            match self.auth.me().await {
                Ok(user) => {
                    info!("restored session for {}", user.username);
                    self.user = Some(user);
                }
                Err(e) => {
                    warn!("session restore failed: {e}");
                    self.auth.clear_token();
                }
            }
        }

        self.locale.resolve_initial().await;
        if let Some(user) = self.user.clone() {
            self.locale.on_user_change(&user).await?;
        }
        self.social.set_authenticated(self.user.is_some());

        let language = self.locale.language().to_string();
        self.i18n.load(&language).await;

        if self.geo_enabled {
            let before = self.locale.language().to_string();
            self.locale.apply_geolocation().await;
            let after = self.locale.language().to_string();
            if after != before {
                self.i18n.load(&after).await;
            }
        }

        Ok(())
    }

    /// Log in with credentials. Empty fields are rejected before any
    /// network call.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, QuoteVibeError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(QuoteVibeError::Validation(
                "email and password are required".to_string(),
            ));
        }
        let auth_session = self.auth.login(email, password).await?;
        self.establish(auth_session).await
    }

    /// Register a new account and log it in.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, QuoteVibeError> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(QuoteVibeError::Validation(
                "username, email, and password are required".to_string(),
            ));
        }
        let auth_session = self.auth.register(username, email, password).await?;
        self.establish(auth_session).await
    }

    async fn establish(&mut self, auth_session: AuthSession) -> Result<User, QuoteVibeError> {
        self.store.set_token(&auth_session.token).await?;
        self.auth.set_token(&auth_session.token);

        let user = auth_session.user;
        if self.locale.on_user_change(&user).await? {
            let language = self.locale.language().to_string();
            self.i18n.load(&language).await;
        }

        self.social.set_authenticated(true);
        self.user = Some(user.clone());
        info!("logged in as {}", user.username);
        Ok(user)
    }

    /// Log out: forget the token and all viewer-bound interaction state.
    /// Locale and translations stay as they are.
    pub async fn logout(&mut self) -> Result<(), QuoteVibeError> {
        self.store.clear_token().await?;
        self.auth.clear_token();
        self.user = None;
        self.social.set_authenticated(false);
        Ok(())
    }

    /// Change the display language; reloads translations when it actually
    /// changed. Empty input is a no-op.
    pub async fn change_language(&mut self, code: &str) -> Result<(), QuoteVibeError> {
        if self.locale.change_language(code).await? {
            let language = self.locale.language().to_string();
            self.i18n.load(&language).await;
        }
        Ok(())
    }

    /// Change the country. No cascading effects.
    pub async fn change_country(&mut self, country: &str) -> Result<(), QuoteVibeError> {
        self.locale.change_country(country).await
    }

    /// Resolve a UI string key for the active language.
    pub fn translate(&self, key: &str) -> String {
        self.i18n.lookup(key)
    }

    /// The resolved locale.
    pub fn locale(&self) -> &LocaleState {
        self.locale.state()
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Interaction state, read-only.
    pub fn social(&self) -> &Interactions {
        &self.social
    }

    /// Interaction state for fetches and toggles.
    pub fn social_mut(&mut self) -> &mut Interactions {
        &mut self.social
    }
}
