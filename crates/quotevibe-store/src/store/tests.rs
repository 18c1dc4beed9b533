use super::Store;

/// Create an in-memory store for testing.
async fn test_store() -> Store {
    Store::in_memory().await.unwrap()
}

#[tokio::test]
async fn test_get_missing_key() {
    let store = test_store().await;
    assert_eq!(store.get("nope").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_and_get() {
    let store = test_store().await;
    store.set("app_language", "tr").await.unwrap();
    assert_eq!(
        store.get("app_language").await.unwrap(),
        Some("tr".to_string())
    );
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = test_store().await;
    store.set_app_language("en").await.unwrap();
    store.set_app_language("de").await.unwrap();
    assert_eq!(store.app_language().await.unwrap(), Some("de".to_string()));
}

#[tokio::test]
async fn test_token_roundtrip_and_clear() {
    let store = test_store().await;
    assert_eq!(store.token().await.unwrap(), None);

    store.set_token("abc123").await.unwrap();
    assert_eq!(store.token().await.unwrap(), Some("abc123".to_string()));

    store.clear_token().await.unwrap();
    assert_eq!(store.token().await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_reports_whether_row_existed() {
    let store = test_store().await;
    store.set("app_country", "Turkey").await.unwrap();
    assert!(store.delete("app_country").await.unwrap());
    assert!(!store.delete("app_country").await.unwrap());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let store = test_store().await;
    Store::run_migrations(store.pool()).await.unwrap();
    store.set("token", "t").await.unwrap();
    Store::run_migrations(store.pool()).await.unwrap();
    assert_eq!(store.get("token").await.unwrap(), Some("t".to_string()));
}
