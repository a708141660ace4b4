use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use fetcher_core::{ClientConfig, Phase, SubmissionForm, Transport, VideoClient, View};
use tracing::{debug, info};

use crate::transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "video-fetcher")]
#[command(about = "Submit video URLs to the ingestion backend and show their metadata")]
#[command(version)]
pub struct Cli {
    /// Video URLs to submit; read one per line from stdin when omitted
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Backend base address [default: $VIDEO_API_URL, then http://localhost:8000/api/v1]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Check backend health and exit
    #[arg(long)]
    pub health: bool,
}

impl Cli {
    /// `--api-url` when given and non-blank, otherwise the environment.
    pub fn config(&self) -> ClientConfig {
        self.config_or(ClientConfig::from_env)
    }

    fn config_or<F>(&self, fallback: F) -> ClientConfig
    where
        F: FnOnce() -> ClientConfig,
    {
        match self.api_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => ClientConfig::new(url),
            None => fallback(),
        }
    }

    pub fn run(&self) -> Result<ExitCode> {
        let client = VideoClient::from_config(&self.config());
        let transport = UreqTransport::new();
        info!(base_url = client.base_url(), "using backend");

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.health {
            let healthy = health(&client, &transport, &mut out)?;
            return Ok(if healthy { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }

        let mut session = Session::new(client, transport);
        if self.urls.is_empty() {
            for line in io::stdin().lock().lines() {
                session.submit(&line?, &mut out)?;
            }
        } else {
            for url in &self.urls {
                session.submit(url, &mut out)?;
            }
        }

        Ok(if session.failures() == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// Print the health document, or the unavailability message on stderr.
fn health<T: Transport, W: Write>(client: &VideoClient, transport: &T, out: &mut W) -> Result<bool> {
    match client.health_check(transport) {
        Ok(status) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
            Ok(true)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(false)
        }
    }
}

/// One form driven through a sequence of submissions.
pub struct Session<T> {
    form: SubmissionForm,
    client: VideoClient,
    transport: T,
    failures: usize,
}

impl<T: Transport> Session<T> {
    pub fn new(client: VideoClient, transport: T) -> Self {
        Self {
            form: SubmissionForm::new(),
            client,
            transport,
            failures: 0,
        }
    }

    /// Enter `url`, submit it, and print the loading and resolved views.
    /// Blank input leaves the submit control disabled and prints nothing.
    pub fn submit<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        self.form.set_url(url.trim());
        let Some(submission) = self.form.submit() else {
            debug!("skipping empty input");
            return Ok(());
        };
        write!(out, "{}", View::of(&self.form))?;

        let outcome = self.client.fetch_video(&self.transport, &submission.url);
        self.form.resolve(submission.ticket, outcome);
        if matches!(self.form.phase(), Phase::Error(_)) {
            self.failures += 1;
        }
        writeln!(out, "{}", View::of(&self.form))?;
        Ok(())
    }

    pub fn failures(&self) -> usize {
        self.failures
    }
}
