mod args;
mod oneshot;
mod tui;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use scansum_client::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    tracing::info!(api_url = %args.api_url, summary_type = %args.summary_type, "starting");

    let client = ApiClient::new(&args.api_url);

    if args.check {
        return oneshot::run_check(&client).await;
    }
    if let Some(path) = &args.input {
        return oneshot::run_summarize(&client, path, &args.summary_type).await;
    }

    tui::run_tui(client, &args.summary_type).await
}

/// Wire up tracing.
///
/// One-shot modes log to stderr like any CLI. In TUI mode stderr is the
/// terminal we draw on, so logs are silenced unless `--log-file` routes
/// them to a file.
fn init_logging(args: &Args) -> Result<()> {
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scansum={level},scansum_client={level}")));

    let tui_mode = !args.check && args.input.is_none();
    match (&args.log_file, tui_mode) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        (None, false) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        // TUI without a log file: drop everything rather than corrupt the screen.
        (None, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}
