//! Serve CLI command.
//!
//! Starts the dashboard REST API backed by the metrics database.

use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;
use trade_dash_data::DatabaseClient;
use trade_dash_web_api::{ApiServer, AppState, DashboardSettings};

/// Arguments for the serve command.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Configuration profile (loads config/Config.<profile>.toml on top of the base file)
    #[arg(long)]
    pub profile: Option<String>,

    /// Listen address, overrides server.host and server.port
    #[arg(short, long)]
    pub addr: Option<String>,

    /// Database connection URL, overrides database.url
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Skip applying schema migrations on start-up
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Runs the serve command.
///
/// # Errors
/// Returns an error if configuration, database connection or binding fails.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = super::load_config(args.profile.as_deref())?;

    let settings = DashboardSettings::from_config(&config.dashboard)
        .context("Invalid dashboard configuration")?;

    let db_url = args.db_url.unwrap_or(config.database.url);
    let db = DatabaseClient::new(&db_url, config.database.max_connections)
        .await
        .context("Failed to connect to database")?;

    if !args.skip_migrations {
        db.migrate().await.context("Failed to apply migrations")?;
    }

    tracing::info!(
        "Serving {} metrics, up to {} points per request",
        settings.model,
        settings.max_data_points
    );

    let state = AppState::new(Arc::new(db.repositories().metrics), settings);
    let addr = args.addr.unwrap_or_else(|| config.server.addr());

    ApiServer::new(state).serve(&addr).await
}
