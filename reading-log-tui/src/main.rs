mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod render;
mod runtime;
mod time_utils;
mod types;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use crate::api::{ApiClient, DevBackend, EntryApi};
use crate::cli::{Cli, Commands};
use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let cfg = ClientConfig::load()?;
            bootstrap::init_logging()?;
            tracing::info!(api_url = %cfg.api_url, "starting reading log client");
            let client = ApiClient::new(&cfg.api_url)?;
            run_tui(Arc::new(client)).await
        }
        Commands::Dev => {
            bootstrap::init_logging()?;
            tracing::info!("starting reading log client with in-memory data");
            run_tui(Arc::new(DevBackend::new())).await
        }
        Commands::Export { output, query } => {
            let cfg = ClientConfig::load()?;
            bootstrap::init_logging()?;
            let client = ApiClient::new(&cfg.api_url)?;
            let count = bootstrap::export_html(&client, query.as_deref(), &output).await?;
            println!("Exported {} entries to {}", count, output.display());
            Ok(())
        }
        Commands::ConfigPath => {
            let path = ClientConfig::ensure_default_file()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(api: Arc<dyn EntryApi>) -> Result<()> {
    let mut app = App::new(time_utils::local_today());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, api).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("client stopped with error: {:#}", err);
    }
    res
}
