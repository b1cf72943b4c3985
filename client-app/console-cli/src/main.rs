use clap::Parser;
use tracing::{error, info};

use console_core::error::DomainError;
use console_shared::config::AppConfig;

mod app;
mod cli;
mod commands;
mod input;
mod render;

use app::App;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    // Initialize telemetry; the guard flushes file logs on exit
    let log_guard = console_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})", config.app.name, config.app.env);

    let app = App::new(config, cli.json)?;
    if let Err(e) = commands::run(&app, cli.command).await {
        // Service errors were already printed as notices
        if e.downcast_ref::<DomainError>().is_none() {
            eprintln!("Error: {:#}", e);
        }
        error!("Command failed: {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}
