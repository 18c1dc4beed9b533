use super::LocaleResolver;
use async_trait::async_trait;
use quotevibe_core::{
    config::LocaleConfig,
    error::QuoteVibeError,
    model::{GeoInfo, User},
    traits::Geolocator,
};
use quotevibe_store::Store;
use std::sync::Arc;

/// Geolocator that answers with a fixed result, or fails when `None`.
struct MockGeo(Option<GeoInfo>);

#[async_trait]
impl Geolocator for MockGeo {
    async fn lookup(&self) -> Result<GeoInfo, QuoteVibeError> {
        match &self.0 {
            Some(info) => Ok(info.clone()),
            None => Err(QuoteVibeError::Api("geolocation unreachable".to_string())),
        }
    }
}

fn geo(country_name: &str, country_code: &str) -> Arc<MockGeo> {
    Arc::new(MockGeo(Some(GeoInfo {
        country_name: Some(country_name.to_string()),
        country_code: Some(country_code.to_string()),
        country_calling_code: None,
    })))
}

fn failing_geo() -> Arc<MockGeo> {
    Arc::new(MockGeo(None))
}

async fn resolver(geolocator: Arc<MockGeo>) -> LocaleResolver {
    let store = Store::in_memory().await.unwrap();
    LocaleResolver::new(store, geolocator, &LocaleConfig::default())
}

fn user_with(language: Option<&str>, country: Option<&str>) -> User {
    User {
        id: "u1".to_string(),
        username: "ayse".to_string(),
        display_name: None,
        bio: None,
        language: language.map(str::to_string),
        country: country.map(str::to_string),
        followers_count: 0,
        following_count: 0,
        created_at: None,
    }
}

#[tokio::test]
async fn test_hard_defaults_when_nothing_else() {
    let mut resolver = resolver(failing_geo()).await;
    let state = resolver.resolve_initial().await;
    assert_eq!(state.language, "en");
    assert_eq!(state.country, "US");
}

#[tokio::test]
async fn test_geolocation_fills_in_over_defaults() {
    let mut resolver = resolver(geo("Turkey", "TR")).await;
    resolver.resolve_initial().await;
    resolver.apply_geolocation().await;
    assert_eq!(resolver.language(), "tr");
    assert_eq!(resolver.state().country, "Turkey");
}

#[tokio::test]
async fn test_unmapped_country_falls_back_to_english() {
    let mut resolver = resolver(geo("France", "FR")).await;
    resolver.resolve_initial().await;
    resolver.apply_geolocation().await;
    assert_eq!(resolver.language(), "en");
    assert_eq!(resolver.state().country, "France");
}

#[tokio::test]
async fn test_geolocation_failure_leaves_state_untouched() {
    let mut resolver = resolver(failing_geo()).await;
    resolver.resolve_initial().await;
    resolver.apply_geolocation().await;
    assert_eq!(resolver.language(), "en");
    assert_eq!(resolver.state().country, "US");
}

#[tokio::test]
async fn test_persisted_choice_beats_late_geolocation() {
    let store = Store::in_memory().await.unwrap();
    store.set_app_language("de").await.unwrap();
    let mut resolver = LocaleResolver::new(store, geo("France", "FR"), &LocaleConfig::default());

    let state = resolver.resolve_initial().await;
    assert_eq!(state.language, "de", "persisted value applies immediately");

    // Geolocation settles after the persisted choice already won.
    resolver.apply_geolocation().await;
    assert_eq!(resolver.language(), "de");
    assert_eq!(
        resolver.state().country,
        "France",
        "country had no persisted value, so geolocation may fill it"
    );
}

#[tokio::test]
async fn test_user_profile_beats_persisted() {
    let store = Store::in_memory().await.unwrap();
    store.set_app_language("en").await.unwrap();
    let mut resolver = LocaleResolver::new(store, failing_geo(), &LocaleConfig::default());
    resolver.resolve_initial().await;

    let changed = resolver
        .on_user_change(&user_with(Some("tr"), Some("Turkey")))
        .await
        .unwrap();
    assert!(changed);
    assert_eq!(resolver.language(), "tr");
    assert_eq!(resolver.state().country, "Turkey");
}

#[tokio::test]
async fn test_geolocation_cannot_override_user_profile() {
    let mut resolver = resolver(geo("France", "FR")).await;
    resolver.resolve_initial().await;
    resolver
        .on_user_change(&user_with(Some("tr"), None))
        .await
        .unwrap();

    resolver.apply_geolocation().await;
    assert_eq!(resolver.language(), "tr");
}

#[tokio::test]
async fn test_user_preferences_are_persisted() {
    let store = Store::in_memory().await.unwrap();
    let mut resolver =
        LocaleResolver::new(store.clone(), failing_geo(), &LocaleConfig::default());
    resolver
        .on_user_change(&user_with(Some("tr"), Some("Turkey")))
        .await
        .unwrap();

    assert_eq!(store.app_language().await.unwrap(), Some("tr".to_string()));
    assert_eq!(
        store.app_country().await.unwrap(),
        Some("Turkey".to_string())
    );
}

#[tokio::test]
async fn test_change_language_persists_and_reports_change() {
    let store = Store::in_memory().await.unwrap();
    let mut resolver =
        LocaleResolver::new(store.clone(), failing_geo(), &LocaleConfig::default());

    assert!(resolver.change_language("tr").await.unwrap());
    assert!(
        !resolver.change_language("tr").await.unwrap(),
        "setting the same language again is not a change"
    );
    assert_eq!(store.app_language().await.unwrap(), Some("tr".to_string()));
}

#[tokio::test]
async fn test_change_language_empty_is_noop() {
    let store = Store::in_memory().await.unwrap();
    let mut resolver =
        LocaleResolver::new(store.clone(), failing_geo(), &LocaleConfig::default());

    assert!(!resolver.change_language("").await.unwrap());
    assert_eq!(resolver.language(), "en");
    assert_eq!(store.app_language().await.unwrap(), None);
}

#[tokio::test]
async fn test_change_country_has_no_language_effect() {
    let mut resolver = resolver(failing_geo()).await;
    resolver.change_country("Turkey").await.unwrap();
    assert_eq!(resolver.language(), "en");
    assert_eq!(resolver.state().country, "Turkey");
}

#[tokio::test]
async fn test_explicit_change_after_login_wins() {
    let mut resolver = resolver(failing_geo()).await;
    resolver
        .on_user_change(&user_with(Some("tr"), None))
        .await
        .unwrap();

    // An explicit in-session change is a command, not a competing source.
    assert!(resolver.change_language("de").await.unwrap());
    assert_eq!(resolver.language(), "de");
}
