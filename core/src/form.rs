//! Submission form state machine.
//!
//! # Design
//! The form owns the URL input and a single `Phase` value that is replaced
//! whole on every transition, so error and result can never be visible at
//! the same time. `submit` does not perform I/O: it moves to `Loading` and
//! hands the host a `Submission` to execute. The host reports back through
//! `resolve`, and only the outcome carrying the latest `Ticket` is applied.
//! Anything else (a cancelled or superseded call finishing late) is dropped.

use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::error::FetchError;
use crate::types::FetchResult;

/// Identity of one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(Uuid);

impl Ticket {
    fn issue() -> Self {
        Ticket(Uuid::new_v4())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One outbound call the host must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub url: String,
}

/// Lifecycle state of the current submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(FetchResult),
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    url: String,
    phase: Phase,
    in_flight: Option<Ticket>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&FetchResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Ticket of the call whose outcome would currently be applied.
    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// Replace the URL input. The input is locked while a call is in flight.
    pub fn set_url(&mut self, url: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.url = url.into();
        true
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.url.is_empty() && !self.is_loading()
    }

    /// Start a submission. Returns `None` and leaves state untouched when
    /// the submit control is disabled.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            debug!(loading = self.is_loading(), "submit ignored");
            return None;
        }
        let ticket = Ticket::issue();
        self.in_flight = Some(ticket);
        self.phase = Phase::Loading;
        debug!(%ticket, url = %self.url, "submission started");
        Some(Submission {
            ticket,
            url: self.url.clone(),
        })
    }

    /// Apply the outcome of the call identified by `ticket`.
    ///
    /// Returns whether the outcome was applied.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<FetchResult, FetchError>) -> bool {
        if self.in_flight != Some(ticket) {
            debug!(%ticket, "dropping stale response");
            return false;
        }
        self.in_flight = None;
        self.phase = match outcome {
            Ok(result) => {
                debug!(%ticket, success = result.success, "submission succeeded");
                Phase::Success(result)
            }
            Err(err) => {
                debug!(%ticket, error = %err, "submission failed");
                Phase::Error(err.user_message())
            }
        };
        true
    }

    /// Abandon the in-flight call, e.g. when the form is torn down.
    ///
    /// The call itself keeps running; its outcome is dropped on arrival.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(ticket) => {
                debug!(%ticket, "submission cancelled");
                self.phase = Phase::Idle;
                true
            }
            None => false,
        }
    }
}
