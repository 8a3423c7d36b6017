//! Tripist CLI Application
//!
//! Command-line interface for turning upcoming trips into tracker projects.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tripist_core::{Config, SyncerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        database_file,
        no_color,
        command,
    } = Args::parse();

    let config = match config {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::load_default().context("Failed to load configuration")?,
    };

    let syncer = SyncerBuilder::new()
        .with_database_path(database_file.or_else(|| config.database_file.clone()))
        .build()
        .await
        .context("Failed to initialize tracker database")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tripist started");

    let cli = Cli::new(syncer, renderer, config);
    match command {
        Some(Checklist { command }) => cli.handle_checklist_command(command),
        Some(Expand(args)) => cli.expand(args),
        Some(Sync(args)) => cli.sync(args).await,
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Verify) => cli.verify().await,
        None => cli.list_projects().await,
    }
}
