use thiserror::Error;

/// Top-level error type for the QuoteVibe client.
#[derive(Debug, Error)]
pub enum QuoteVibeError {
    /// Error talking to the backend API (network failure or non-2xx).
    #[error("api error: {0}")]
    Api(String),

    /// The operation requires a logged-in viewer.
    #[error("not authenticated")]
    Unauthenticated,

    /// Input rejected before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Preference store error.
    #[error("store error: {0}")]
    Store(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuoteVibeError {
    /// Whether this error should be surfaced as a login prompt rather than
    /// a transient failure notice.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}
