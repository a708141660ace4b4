use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod transport;

use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries only the rendered form.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Starting video-fetcher v{}", env!("CARGO_PKG_VERSION"));

    cli.run()
}
