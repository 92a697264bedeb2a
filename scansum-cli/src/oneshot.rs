//! Non-interactive entry points: `--check` and `--input FILE`.

use anyhow::{Context, Result, bail};

use scansum_client::ApiClient;
use scansum_types::parse_hosts_document;

use crate::tui::results_lines;

/// Ping the backend and print its health payload.
pub async fn run_check(client: &ApiClient) -> Result<()> {
    let health = client
        .health()
        .await
        .context("backend health check failed")?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    Ok(())
}

/// Summarize a local hosts file and print the report as plain text.
pub async fn run_summarize(client: &ApiClient, path: &str, summary_type: &str) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {path}"))?;
    let hosts = parse_hosts_document(&raw)
        .with_context(|| format!("{path} is not a recognized hosts document"))?;
    if hosts.is_empty() {
        bail!("{path} contains no hosts");
    }

    let result = client
        .summarize(&hosts, summary_type)
        .await
        .context("summarization request failed")?;

    // Same report the TUI shows, flattened to plain text.
    for line in results_lines(&result) {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        println!("{}", text.trim_end());
    }
    Ok(())
}
