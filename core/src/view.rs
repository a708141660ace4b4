//! Presentation of a `SubmissionForm` as plain data.
//!
//! `View::of` is a pure function of the form, so what a host draws can be
//! asserted in tests without a terminal. The `Display` impl is the text
//! rendering the terminal front-end prints.

use std::fmt;

use crate::form::{Phase, SubmissionForm};
use crate::format::format_duration;
use crate::types::FetchResult;

pub const SUBMIT_LABEL: &str = "Fetch Video";
pub const LOADING_LABEL: &str = "Processing...";
pub const NEXT_STEPS: &str =
    "Video is ready! Transcript generation and clip creation are not available yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Success(String),
    /// The backend answered but reported `success: false`.
    Notice(String),
}

/// Metadata shown for a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub title: Option<String>,
    pub channel: Option<String>,
    /// Formatted `m:ss`, or `N/A` when the backend sent no duration.
    pub duration: String,
    pub video_id: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

impl VideoCard {
    fn from_result(result: &FetchResult) -> Self {
        Self {
            title: result.title.clone(),
            channel: result.uploader.clone(),
            duration: result
                .duration
                .map(format_duration)
                .unwrap_or_else(|| "N/A".to_string()),
            video_id: result.video_id.clone(),
            thumbnail: non_empty(&result.thumbnail),
            description: non_empty(&result.description),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub url: String,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub banner: Option<Banner>,
    pub card: Option<VideoCard>,
    pub next_steps: Option<&'static str>,
}

impl View {
    pub fn of(form: &SubmissionForm) -> Self {
        let loading = form.is_loading();
        let (banner, card) = match form.phase() {
            Phase::Idle | Phase::Loading => (None, None),
            Phase::Error(message) => (Some(Banner::Error(message.clone())), None),
            Phase::Success(result) if result.success => (
                Some(Banner::Success(result.message.clone())),
                Some(VideoCard::from_result(result)),
            ),
            // Only the status message is shown; metadata stays hidden.
            Phase::Success(result) => (Some(Banner::Notice(result.message.clone())), None),
        };
        let next_steps = card.as_ref().map(|_| NEXT_STEPS);
        Self {
            url: form.url().to_string(),
            input_enabled: !loading,
            submit_enabled: form.can_submit(),
            submit_label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
            banner,
            card,
            next_steps,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.submit_enabled { "" } else { " (disabled)" };
        writeln!(f, "YouTube Video URL: {}", self.url)?;
        writeln!(f, "[{}]{state}", self.submit_label)?;

        match &self.banner {
            Some(Banner::Error(message)) => writeln!(f, "Error: {message}")?,
            Some(Banner::Success(message)) => writeln!(f, "✅ {message}")?,
            Some(Banner::Notice(message)) => writeln!(f, "{message}")?,
            None => {}
        }

        if let Some(card) = &self.card {
            if let Some(title) = &card.title {
                writeln!(f, "{title}")?;
            }
            writeln!(f, "Channel: {}", card.channel.as_deref().unwrap_or(""))?;
            writeln!(f, "Duration: {}", card.duration)?;
            writeln!(f, "Video ID: {}", card.video_id.as_deref().unwrap_or(""))?;
            if let Some(thumbnail) = &card.thumbnail {
                writeln!(f, "Thumbnail: {thumbnail}")?;
            }
            if let Some(description) = &card.description {
                writeln!(f, "{description}")?;
            }
        }

        if let Some(next) = self.next_steps {
            writeln!(f, "Next: {next}")?;
        }
        Ok(())
    }
}
