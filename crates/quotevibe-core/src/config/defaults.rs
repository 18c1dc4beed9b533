//! Serde default values for config fields.

pub fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_language() -> String {
    crate::locale::DEFAULT_LANGUAGE.to_string()
}

pub fn default_country() -> String {
    crate::locale::DEFAULT_COUNTRY.to_string()
}

pub fn default_geo_endpoint() -> String {
    "https://ipapi.co/json/".to_string()
}

pub fn default_db_path() -> String {
    "quotevibe.db".to_string()
}

pub fn default_true() -> bool {
    true
}
