use crate::client::ApiClient;
use crate::quotes::QuoteQuery;
use quotevibe_core::config::ApiConfig;
use quotevibe_core::model::{AuthSession, GeoInfo, InteractionStatus, Language, Quote};

fn test_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };
    ApiClient::from_config(&config).unwrap()
}

#[test]
fn test_url_building_strips_trailing_slash() {
    let client = test_client("http://localhost:8000/");
    assert_eq!(
        client.url("/quotes/q1/status"),
        "http://localhost:8000/api/quotes/q1/status"
    );
}

#[test]
fn test_token_install_and_clear() {
    let client = test_client("http://localhost:8000");
    assert!(!client.has_token());
    client.set_token("abc");
    assert!(client.has_token());
    client.clear_token();
    assert!(!client.has_token());
}

#[test]
fn test_parse_auth_session() {
    let json = r#"{
        "token": "jwt-token",
        "user": {
            "id": "u1",
            "username": "ayse",
            "language": "tr",
            "country": "Turkey",
            "followers_count": 3
        }
    }"#;
    let session: AuthSession = serde_json::from_str(json).unwrap();
    assert_eq!(session.token, "jwt-token");
    assert_eq!(session.user.username, "ayse");
    assert_eq!(session.user.language.as_deref(), Some("tr"));
    assert_eq!(session.user.followers_count, 3);
    assert_eq!(session.user.following_count, 0, "missing counts default to 0");
}

#[test]
fn test_parse_user_without_preferences() {
    let json = r#"{"id": "u2", "username": "bob"}"#;
    let user: quotevibe_core::model::User = serde_json::from_str(json).unwrap();
    assert!(user.language.is_none());
    assert!(user.country.is_none());
}

#[test]
fn test_parse_interaction_status() {
    let status: InteractionStatus =
        serde_json::from_str(r#"{"liked": true, "saved": false}"#).unwrap();
    assert!(status.liked);
    assert!(!status.saved);
}

#[test]
fn test_parse_language_list() {
    let json = r#"[
        {"code": "en", "name": "English", "native_name": "English", "enabled": true},
        {"code": "tr", "name": "Turkish", "native_name": "Türkçe"}
    ]"#;
    let languages: Vec<Language> = serde_json::from_str(json).unwrap();
    assert_eq!(languages.len(), 2);
    assert!(languages[1].enabled, "enabled defaults to true");
}

#[test]
fn test_parse_quote_with_counters() {
    let json = r#"{
        "id": "q1",
        "user_id": "u1",
        "content": "Fall seven times, stand up eight.",
        "author": "Proverb",
        "likes_count": 12,
        "saves_count": 4,
        "views_count": 100,
        "created_at": "2025-06-01T12:00:00Z"
    }"#;
    let quote: Quote = serde_json::from_str(json).unwrap();
    assert_eq!(quote.likes_count, 12);
    assert!(quote.created_at.is_some());
}

#[test]
fn test_parse_geo_info_partial_body() {
    // ipapi.co omits fields on rate-limited responses; all optional.
    let info: GeoInfo = serde_json::from_str(r#"{"country_code": "TR"}"#).unwrap();
    assert_eq!(info.country_code.as_deref(), Some("TR"));
    assert!(info.country_name.is_none());
}

#[test]
fn test_quote_query_params() {
    let query = QuoteQuery {
        limit: Some(20),
        category_id: Some("c1".to_string()),
        search: Some("stoic".to_string()),
        ..Default::default()
    };
    let params = query.to_params();
    assert_eq!(
        params,
        vec![
            ("limit", "20".to_string()),
            ("category_id", "c1".to_string()),
            ("search", "stoic".to_string()),
        ]
    );
}

#[test]
fn test_empty_quote_query_has_no_params() {
    assert!(QuoteQuery::default().to_params().is_empty());
}
