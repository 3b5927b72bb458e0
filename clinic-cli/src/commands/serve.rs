//! HTTP server command
//!
//! Connects to PostgreSQL, bootstraps the schema, and serves until
//! Ctrl+C/SIGTERM. Any startup failure ends the process.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use clinic_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use clinic_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CLINIC_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Per-request deadline in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")?;

    tracing::info!("Starting clinic server on {}", args.bind);

    let pool = clinic_server::connect(&database_url, args.max_connections)
        .await
        .context("Failed to connect to database and bootstrap schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout_secs),
    };

    // Run server (blocks until shutdown)
    let result = run_server(AppState::postgres(pool.clone()), config).await;

    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")
}
