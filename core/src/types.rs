//! Wire DTOs for the video backend.
//!
//! # Design
//! These types mirror the backend schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Decoding a
//! `FetchResult` goes through `FetchResult::from_json`, which runs the
//! serde decode and then the checks serde cannot express, so nothing
//! malformed reaches the form.

use serde::{Deserialize, Serialize};
use url::Url;

/// Request payload for `POST /fetch_video`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchVideoRequest {
    pub youtube_url: String,
}

/// Outcome of a video lookup as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FetchResult {
    /// Decode and validate a response body.
    ///
    /// Returns a human-readable reason on failure. An empty `thumbnail` is
    /// accepted and treated as absent when rendering.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let result: FetchResult = serde_json::from_str(body).map_err(|e| e.to_string())?;
        result.validate()?;
        Ok(result)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(thumbnail) = self.thumbnail.as_deref().filter(|t| !t.is_empty()) {
            Url::parse(thumbnail).map_err(|e| format!("thumbnail `{thumbnail}` is not a URL: {e}"))?;
        }
        Ok(())
    }
}

/// Body of a non-2xx response. Only `detail` is meaningful to the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty `detail` from an arbitrary error body.
    pub fn detail_of(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty())
    }
}

/// Opaque health document, passed through unchanged.
pub type HealthStatus = serde_json::Value;
