use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::EntryApi;
use crate::config::ClientConfig;
use crate::render;

/// Routes `tracing` output to `client.log` next to the config file, since
/// stdout belongs to the terminal UI.
pub fn init_logging() -> Result<()> {
    let dir = ClientConfig::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join("client.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "reading_log=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Fetches entries (optionally filtered) and writes them as an HTML page.
/// Returns the number of exported entries.
pub async fn export_html(api: &dyn EntryApi, query: Option<&str>, output: &Path) -> Result<usize> {
    let entries = api
        .list_entries(query)
        .await
        .context("Failed to load entries for export")?;

    render::html::write_page(&entries, query, output)?;
    tracing::info!(count = entries.len(), output = %output.display(), "exported entries");

    Ok(entries.len())
}
