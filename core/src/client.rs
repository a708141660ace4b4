//! Stateless HTTP request builder and response parser for the video API.
//!
//! # Design
//! `VideoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! the core stays deterministic. `fetch_video` and `health_check` compose
//! the two around a single `Transport::execute` for hosts that just want the
//! outcome.

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{FetchError, HealthError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{ErrorBody, FetchResult, FetchVideoRequest, HealthStatus};

/// Synchronous, stateless client for the video backend.
#[derive(Debug, Clone)]
pub struct VideoClient {
    base_url: String,
}

impl VideoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_fetch_video(&self, youtube_url: &str) -> Result<HttpRequest, FetchError> {
        let input = FetchVideoRequest {
            youtube_url: youtube_url.to_string(),
        };
        let body = serde_json::to_string(&input).map_err(|e| FetchError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/fetch_video", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_fetch_video(&self, response: HttpResponse) -> Result<FetchResult, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Application {
                status: response.status,
                detail: ErrorBody::detail_of(&response.body),
            });
        }
        FetchResult::from_json(&response.body).map_err(FetchError::Schema)
    }

    /// Build, execute once, and parse a `fetch_video` call.
    pub fn fetch_video<T: Transport>(
        &self,
        transport: &T,
        youtube_url: &str,
    ) -> Result<FetchResult, FetchError> {
        let request = self.build_fetch_video(youtube_url)?;
        debug!(path = %request.path, "fetching video");
        let outcome = transport
            .execute(request)
            .map_err(FetchError::from)
            .and_then(|response| self.parse_fetch_video(response));
        if let Err(err) = &outcome {
            warn!(error = %err, "fetch_video failed");
        }
        outcome
    }

    pub fn build_health_check(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/health", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_health_check(&self, response: HttpResponse) -> Result<HealthStatus, HealthError> {
        if !response.is_success() {
            return Err(HealthError::new(format!("HTTP {}", response.status)));
        }
        // Non-JSON bodies pass through as text.
        Ok(serde_json::from_str::<HealthStatus>(&response.body)
            .unwrap_or_else(|_| HealthStatus::String(response.body)))
    }

    /// Diagnostic round-trip to `/health`. Any failure reads as "API is not available".
    pub fn health_check<T: Transport>(&self, transport: &T) -> Result<HealthStatus, HealthError> {
        let outcome = transport
            .execute(self.build_health_check())
            .map_err(HealthError::from)
            .and_then(|response| self.parse_health_check(response));
        if let Err(err) = &outcome {
            warn!(reason = %err.reason, "health check failed");
        }
        outcome
    }
}

impl Default for VideoClient {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::FETCH_FALLBACK_MESSAGE;
    use crate::http::TransportError;

    fn client() -> VideoClient {
        VideoClient::new("http://localhost:8000/api/v1")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    /// Replays canned outcomes and records the requests it was given.
    struct Scripted {
        outcome: Result<HttpResponse, TransportError>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn new(outcome: Result<HttpResponse, TransportError>) -> Self {
            Self {
                outcome,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.borrow_mut().push(request);
            self.outcome.clone()
        }
    }

    #[test]
    fn build_fetch_video_produces_correct_request() {
        let req = client()
            .build_fetch_video("https://www.youtube.com/watch?v=abc123")
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/v1/fetch_video");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["youtube_url"], "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn build_health_check_produces_correct_request() {
        let req = client().build_health_check();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/v1/health");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = VideoClient::new("http://localhost:8000/api/v1/");
        assert_eq!(client.build_health_check().path, "http://localhost:8000/api/v1/health");
    }

    #[test]
    fn default_client_uses_default_base() {
        assert_eq!(VideoClient::default().base_url(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn parse_fetch_video_success_is_returned_unchanged() {
        let body = r#"{"success":true,"message":"ok","video_id":"abc123","title":"Test","uploader":"Chan","duration":90}"#;
        let result = client().parse_fetch_video(response(200, body)).unwrap();
        assert_eq!(result, serde_json::from_str::<FetchResult>(body).unwrap());
    }

    #[test]
    fn parse_fetch_video_unsuccessful_payload_is_not_an_error() {
        let result = client()
            .parse_fetch_video(response(200, r#"{"success":false,"message":"queued"}"#))
            .unwrap();
        assert!(!result.success);
    }

    #[test]
    fn parse_fetch_video_detail_is_surfaced() {
        let err = client()
            .parse_fetch_video(response(400, r#"{"detail":"invalid url"}"#))
            .unwrap_err();
        assert!(matches!(err, FetchError::Application { status: 400, .. }));
        assert_eq!(err.user_message(), "invalid url");
    }

    #[test]
    fn parse_fetch_video_error_without_detail_falls_back() {
        let err = client()
            .parse_fetch_video(response(500, "Internal Server Error"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Application { status: 500, detail: None }));
        assert_eq!(err.user_message(), FETCH_FALLBACK_MESSAGE);
    }

    #[test]
    fn parse_fetch_video_empty_detail_falls_back() {
        let err = client()
            .parse_fetch_video(response(400, r#"{"detail":""}"#))
            .unwrap_err();
        assert!(matches!(err, FetchError::Application { status: 400, detail: None }));
        assert_eq!(err.user_message(), FETCH_FALLBACK_MESSAGE);
    }

    #[test]
    fn parse_fetch_video_bad_json_is_schema_error() {
        let err = client().parse_fetch_video(response(200, "not json")).unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn parse_fetch_video_wrong_shape_is_schema_error() {
        let err = client()
            .parse_fetch_video(response(200, r#"{"detail":"looks like an error"}"#))
            .unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn fetch_video_makes_exactly_one_call() {
        let transport = Scripted::new(Ok(response(200, r#"{"success":true,"message":"ok"}"#)));
        let result = client().fetch_video(&transport, "https://youtu.be/abc").unwrap();
        assert_eq!(result.message, "ok");
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn fetch_video_transport_failure_uses_fallback() {
        let transport = Scripted::new(Err(TransportError::new("connection refused")));
        let err = client().fetch_video(&transport, "https://youtu.be/abc").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(err.user_message(), "Failed to fetch video");
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn health_check_passes_document_through() {
        let transport = Scripted::new(Ok(response(200, r#"{"status":"healthy","extra":[1,2]}"#)));
        let status = client().health_check(&transport).unwrap();
        assert_eq!(status, serde_json::json!({"status":"healthy","extra":[1,2]}));
    }

    #[test]
    fn health_check_transport_failure() {
        let transport = Scripted::new(Err(TransportError::new("refused")));
        let err = client().health_check(&transport).unwrap_err();
        assert_eq!(err.to_string(), "API is not available");
    }

    #[test]
    fn health_check_plain_text_is_passed_through() {
        let status = client().parse_health_check(response(200, "OK")).unwrap();
        assert_eq!(status, serde_json::Value::String("OK".to_string()));
    }

    #[test]
    fn health_check_error_status() {
        let err = client()
            .parse_health_check(response(503, r#"{"status":"down"}"#))
            .unwrap_err();
        assert_eq!(err.reason, "HTTP 503");
    }
}
