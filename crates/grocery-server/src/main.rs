//! Grocery Server
//!
//! HTTP backend for grocery planning: serves the recipe catalogue and
//! per-user grocery lists out of an embedded SQLite database.

mod app;
mod config;
mod error;
mod handlers;
mod seed;
mod storage;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub strict_validation: bool,
}

#[derive(Parser)]
#[command(name = "grocery-server")]
#[command(version, about = "Grocery planning backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema if needed and serve the HTTP API (default)
    Serve,
    /// Drop all tables and load the demo users and recipes
    Seed,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        tracing::error!("PANIC at {:?}: {}", location, info);
    }));

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Seed => run_seed(config).await,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.debug {
        tracing::subscriber::set_global_default(builder.finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    }

    Ok(())
}

async fn open_database(config: &Config) -> Result<Database> {
    Database::connect(&config.database_path)
        .await
        .context("Failed to open database")
}

async fn run_seed(config: Config) -> Result<()> {
    let db = open_database(&config).await?;
    seed::run(&db).await.context("Failed to seed database")?;
    info!("Database seeded at: {}", config.database_path);
    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        "Starting Grocery Server v{} (debug={}, strict_validation={})",
        env!("CARGO_PKG_VERSION"),
        config.debug,
        config.strict_validation
    );

    let db = open_database(&config).await?;
    db.initialize_schema()
        .await
        .context("Failed to initialize schema")?;
    info!("SQLite database ready at: {}", config.database_path);

    let state = AppState {
        db: Arc::new(db),
        strict_validation: config.strict_validation,
    };
    let app = app::create_app(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
