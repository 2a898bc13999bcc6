//! Metrics status CLI command.
//!
//! Shows how much history is stored for a model and what the dashboard
//! would serve from it.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use trade_dash_core::Downsampled;
use trade_dash_data::{DatabaseClient, MetricsStore, ModelType};

/// Arguments for the metrics-status command.
#[derive(Args, Debug, Clone)]
pub struct MetricsStatusArgs {
    /// Model to inspect (defaults to dashboard.model)
    #[arg(long)]
    pub model: Option<ModelType>,

    /// Database connection URL, overrides database.url
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Configuration profile
    #[arg(long)]
    pub profile: Option<String>,
}

/// Runs the metrics-status command.
///
/// # Errors
/// Returns an error if configuration, connection or queries fail.
pub async fn run_metrics_status(args: MetricsStatusArgs) -> Result<()> {
    let config = super::load_config(args.profile.as_deref())?;
    let model = match args.model {
        Some(model) => model,
        None => config.dashboard.model.parse()?,
    };

    let db_url = args.db_url.unwrap_or(config.database.url);
    let db = DatabaseClient::new(&db_url, 2)
        .await
        .context("Failed to connect to database")?;
    let repos = db.repositories();

    let rows = repos.metrics.count_by_model(model).await?;

    println!();
    println!("Metrics status for {model}");
    println!("{}", "─".repeat(40));
    println!("Stored records:      {rows}");

    let Some(record) = repos.metrics.find_first_by_model(model).await? else {
        println!("No metrics recorded yet.");
        println!();
        return Ok(());
    };

    let raw_snapshots = record.metrics.as_array().map_or(0, Vec::len);
    let sampled = Downsampled::from_series(
        record.points(Utc::now()),
        config.dashboard.max_data_points,
    );

    println!("Bot name:            {}", record.name);
    println!("Raw snapshots:       {raw_snapshots}");
    println!("Funded snapshots:    {}", sampled.original_len);
    println!("Served points:       {}", sampled.points.len());
    println!(
        "Last updated:        {}",
        record.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    Ok(())
}
