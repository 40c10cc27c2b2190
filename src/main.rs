use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use weekend_sync::adapters::http::{app_router, GatewayAppState};
use weekend_sync::adapters::{sqlite, SqliteAvailabilityRepository, StaticAllowList, SystemClock};
use weekend_sync::application::Dispatcher;
use weekend_sync::config::AppConfig;

/// weekend-sync - Find the weekends everyone is free
#[derive(Parser)]
#[command(name = "weekend-sync")]
#[command(about = "Shared weekend planner behind a chat gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Run database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    weekend_sync::observability::init_tracing(&config.server)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve_command(config).await,
        Commands::Migrate => migrate_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(config: AppConfig) -> Result<()> {
    tracing::info!("Starting weekend-sync server...");

    let pool = sqlite::connect(&config.database)
        .await
        .with_context(|| format!("Failed to open {}", config.database.path.display()))?;

    if config.database.run_migrations {
        sqlite::run_migrations(&pool).await?;
    }

    let allowed = config.access.allowed_user_ids()?;
    tracing::info!(allowed_users = allowed.len(), "Access list loaded");

    let repository = Arc::new(SqliteAvailabilityRepository::new(pool));
    let dispatcher = Arc::new(Dispatcher::new(repository, Arc::new(SystemClock)));
    let state = GatewayAppState::new(dispatcher, Arc::new(StaticAllowList::new(allowed)));
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: AppConfig) -> Result<()> {
    let pool = sqlite::connect(&config.database).await?;
    sqlite::run_migrations(&pool).await?;
    pool.close().await;
    Ok(())
}
