use std::{collections::HashMap, sync::Arc, sync::LazyLock};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub const API_PREFIX: &str = "/api/v1";

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").expect("valid regex")
});

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[?&]v=|youtu\.be/)([A-Za-z0-9_-]+)").expect("valid regex")
});

/// Metadata the backend knows about a downloadable video.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub duration: u64,
    pub uploader: String,
    pub thumbnail: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct FetchVideoRequest {
    pub youtube_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FetchVideoResponse {
    pub success: bool,
    pub message: String,
    pub video_id: Option<String>,
    pub file_path: Option<String>,
    pub title: Option<String>,
    pub duration: Option<u64>,
    pub uploader: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

impl FetchVideoResponse {
    fn downloaded(video: &Video) -> Self {
        Self {
            success: true,
            message: "Video downloaded successfully".to_string(),
            video_id: Some(video.id.clone()),
            file_path: Some(format!("temp_videos/{}.mp4", video.id)),
            title: Some(video.title.clone()),
            duration: Some(video.duration),
            uploader: Some(video.uploader.clone()),
            thumbnail: Some(video.thumbnail.clone()),
            description: Some(video.description.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Read-only lookup from video id to metadata.
pub type Catalog = Arc<HashMap<String, Video>>;

type ApiError = (StatusCode, Json<ErrorDetail>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorDetail { detail: detail.into() }))
}

/// Videos served by `app()`.
pub fn default_catalog() -> Vec<Video> {
    vec![
        Video {
            id: "abc123".to_string(),
            title: "Test".to_string(),
            duration: 90,
            uploader: "Chan".to_string(),
            thumbnail: "https://i.ytimg.com/vi/abc123/hqdefault.jpg".to_string(),
            description: "A short test upload.".to_string(),
        },
        Video {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            duration: 213,
            uploader: "Rick Astley".to_string(),
            thumbnail: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
            description: String::new(),
        },
    ]
}

pub fn app() -> Router {
    app_with_catalog(default_catalog())
}

pub fn app_with_catalog(videos: Vec<Video>) -> Router {
    let catalog: Catalog = Arc::new(videos.into_iter().map(|v| (v.id.clone(), v)).collect());
    let api = Router::new()
        .route("/fetch_video", post(fetch_video))
        .route("/health", get(health));
    Router::new()
        .route("/", get(root))
        .nest(API_PREFIX, api)
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

/// Video id from a `watch?v=` query or a `youtu.be/` short link.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the video ingestion API",
        "docs": "/docs",
        "health": format!("{API_PREFIX}/health"),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "video-ingestion",
        "version": "1.0.0",
    }))
}

async fn fetch_video(
    State(catalog): State<Catalog>,
    Json(input): Json<FetchVideoRequest>,
) -> Result<Json<FetchVideoResponse>, ApiError> {
    let url = input.youtube_url;
    if !is_youtube_url(&url) {
        warn!(%url, "rejected non-YouTube URL");
        return Err(api_error(StatusCode::BAD_REQUEST, "Invalid YouTube URL provided"));
    }

    let video = extract_video_id(&url)
        .and_then(|id| catalog.get(id))
        .ok_or_else(|| {
            warn!(%url, "video unavailable");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to download video: video unavailable",
            )
        })?;

    info!(video_id = %video.id, "video fetched");
    Ok(Json(FetchVideoResponse::downloaded(video)))
}
