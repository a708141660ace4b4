//! Core of the video fetcher front-end.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! video backend without touching the network (host-does-IO pattern), and
//! drives the submission form that turns one URL into one backend call.
//!
//! # Design
//! - `VideoClient` is stateless; it holds only `base_url`.
//! - Each backend operation is split into `build_*` and `parse_*`, with
//!   `fetch_video`/`health_check` composing them over a `Transport`.
//! - `SubmissionForm` is a tagged-state machine; outcomes are matched to
//!   submissions by `Ticket`, and only the latest one is applied.
//! - `View` renders the form as plain data for any host.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod http;
pub mod types;
pub mod view;

pub use client::VideoClient;
pub use config::ClientConfig;
pub use error::{FetchError, HealthError};
pub use form::{Phase, Submission, SubmissionForm, Ticket};
pub use format::format_duration;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{ErrorBody, FetchResult, FetchVideoRequest, HealthStatus};
pub use view::{Banner, VideoCard, View};
