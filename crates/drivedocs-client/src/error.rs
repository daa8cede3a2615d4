//! Error types for remote calls.

use thiserror::Error;

/// Client error taxonomy.
///
/// Session-validation failure is distinct from generic API failure: the
/// backend answers `{ "valid": false }` when it refuses to validate the
/// platform session against the database, and callers show a
/// re-authentication message for that case only.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("session validation failed{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Validation { message: Option<String> },

    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for remote operations.
pub type Result<T> = std::result::Result<T, ClientError>;
