//! Translation cache -- the active string table for all user-facing text.
//!
//! Bundles are fetched per language on demand and merged into an in-memory
//! table; previously loaded languages are kept as cache. Lookup walks an
//! explicit finite chain: active language, then the default language, then
//! a humanized form of the key itself. It never fails and never returns an
//! empty string for a non-empty key.


use quotevibe_core::traits::TranslationSource;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// In-memory translation table keyed by language, then by string key.
pub struct TranslationCache {
    source: Arc<dyn TranslationSource>,
    tables: HashMap<String, HashMap<String, String>>,
    active: String,
    default_language: String,
}

impl TranslationCache {
    /// Create an empty cache. `default_language` is both the fallback
    /// lookup language and the retry target when a load fails.
    pub fn new(source: Arc<dyn TranslationSource>, default_language: &str) -> Self {
        Self {
            source,
            tables: HashMap::new(),
            active: default_language.to_string(),
            default_language: default_language.to_string(),
        }
    }

    /// The language lookups currently resolve against first.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Load the bundle for `language` and mark it active.
    ///
    /// On failure the default language is tried once instead (an explicit
    /// two-step chain, no recursion); if that also fails, the active
    /// language and cached entries stay as they were. Load failures are
    /// logged, never propagated: missing translations degrade to humanized
    /// keys rather than blocking anything.
    pub async fn load(&mut self, language: &str) {
        match self.source.fetch_bundle(language).await {
            Ok(bundle) => {
                debug!("loaded {} translations for '{language}'", bundle.len());
                self.merge(language, bundle);
                self.active = language.to_string();
            }
            Err(e) => {
                warn!("failed to load translations for '{language}': {e}");
                if language == self.default_language {
                    return;
                }
                let default = self.default_language.clone();
                match self.source.fetch_bundle(&default).await {
                    Ok(bundle) => {
                        debug!("fell back to '{default}' with {} translations", bundle.len());
                        self.merge(&default, bundle);
                        self.active = default;
                    }
                    Err(e) => {
                        warn!("fallback load for '{default}' also failed: {e}");
                    }
                }
            }
        }
    }

    /// Look up `key`: active-language text, else default-language text,
    /// else a humanized form of the key.
    pub fn lookup(&self, key: &str) -> String {
        if let Some(text) = self.tables.get(&self.active).and_then(|t| t.get(key)) {
            return text.clone();
        }
        if let Some(text) = self
            .tables
            .get(&self.default_language)
            .and_then(|t| t.get(key))
        {
            return text.clone();
        }
        humanize(key)
    }

    /// Merge a bundle into the table for `language`, new keys replacing old.
    fn merge(&mut self, language: &str, bundle: HashMap<String, String>) {
        self.tables
            .entry(language.to_string())
            .or_default()
            .extend(bundle);
    }
}

/// Derive display text from a string key: underscores become spaces and the
/// first letter of each word is capitalized ("save_quote" -> "Save Quote").
pub fn humanize(key: &str) -> String {
    let text = key
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    // A key made only of underscores would humanize to nothing; return it
    // verbatim so a non-empty key never yields an empty string.
    if text.is_empty() {
        key.to_string()
    } else {
        text
    }
}
