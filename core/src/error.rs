//! Error types for the video API client.
//!
//! # Design
//! `FetchError` keeps the failure kind for logs and tests, while
//! `user_message` collapses every kind into the single line of text the
//! form displays. Only `Application` errors carrying a backend `detail`
//! surface backend wording verbatim.

use thiserror::Error;

use crate::http::TransportError;

/// Shown whenever the backend gave no usable explanation.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch video";

/// Shown when a 2xx payload fails validation.
pub const SCHEMA_MESSAGE: &str = "Received an invalid response from the server";

/// Shown for any failed health check.
pub const HEALTH_MESSAGE: &str = "API is not available";

/// Errors returned by `VideoClient` fetch operations.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Application { status: u16, detail: Option<String> },

    /// A 2xx body that does not match the `FetchResult` schema.
    #[error("invalid response payload: {0}")]
    Schema(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl FetchError {
    /// The text the submission form stores and displays.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Application {
                detail: Some(detail),
                ..
            } => detail.clone(),
            FetchError::Schema(_) => SCHEMA_MESSAGE.to_string(),
            FetchError::Transport(_)
            | FetchError::Application { detail: None, .. }
            | FetchError::Serialization(_) => FETCH_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err.reason)
    }
}

/// Any failure of the diagnostic health check.
///
/// Displays the fixed unavailability message; `reason` is kept for logs.
#[derive(Debug, Clone, Error)]
#[error("API is not available")]
pub struct HealthError {
    pub reason: String,
}

impl HealthError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<TransportError> for HealthError {
    fn from(err: TransportError) -> Self {
        HealthError::new(err.reason)
    }
}
