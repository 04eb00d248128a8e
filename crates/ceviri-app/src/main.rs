use std::sync::Arc;

use ceviri_config::Config;
use clap::Parser;
use tokio::signal;

mod cli;
mod clipboard;
mod commands;
mod controller;
mod events;
mod logging;
mod notify;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let config = Config::new();
    logging::init_logging(&config.logging);
    tracing::debug!("Data file: {}", config.storage.storage_file().display());

    let state = Arc::new(AppState::new(config)?);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(state).await,
        Command::Translate { text } => commands::translate(&state, &text).await,
        Command::History { limit, clear } => commands::history(&state, limit, clear).await,
        Command::Languages => {
            ui::print_languages();
            Ok(())
        }
        Command::Settings { action } => commands::settings(&state, action).await,
    }
}

async fn run_chat(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks().await;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    // Both loops end normally after Close; a failing one takes the other down
    let join_all = async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => {
                    tracing::error!("task failed: {e}");
                    tasks.abort_all();
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    tracing::error!("task panicked: {e}");
                    tasks.abort_all();
                }
            }
        }
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        _ = join_all => {}
    }

    tasks.abort_all();
    Ok(())
}
