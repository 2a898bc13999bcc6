//! Import metrics CLI command.
//!
//! Loads a JSON array of snapshots from disk into a new metrics record.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use trade_dash_data::{flatten_snapshots, DatabaseClient, ModelType};

/// Arguments for the import-metrics command.
#[derive(Args, Debug, Clone)]
pub struct ImportMetricsArgs {
    /// JSON file holding an array of {createdAt, accountInformationAndPerformance} objects
    #[arg(short, long)]
    pub file: PathBuf,

    /// Bot display name
    #[arg(long, default_value = "Deepseek Trading Bot")]
    pub name: String,

    /// Model the snapshots belong to
    #[arg(long, default_value = "Deepseek")]
    pub model: ModelType,

    /// Database connection URL, overrides database.url
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Configuration profile
    #[arg(long)]
    pub profile: Option<String>,
}

/// Runs the import-metrics command.
///
/// # Errors
/// Returns an error if the file is not a JSON array or the insert fails.
pub async fn run_import_metrics(args: ImportMetricsArgs) -> Result<()> {
    let config = super::load_config(args.profile.as_deref())?;

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let snapshots: serde_json::Value =
        serde_json::from_str(&raw).context("Snapshot file is not valid JSON")?;

    let Some(entries) = snapshots.as_array() else {
        bail!("Snapshot file must contain a JSON array");
    };
    let funded = flatten_snapshots(&snapshots, chrono::Utc::now()).len();

    let db_url = args.db_url.unwrap_or(config.database.url);
    let db = DatabaseClient::new(&db_url, 2)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await?;

    let id = db
        .repositories()
        .metrics
        .insert(&args.name, args.model, &snapshots)
        .await?;

    tracing::info!(
        "Imported {} snapshots ({} funded) as record {} for {}",
        entries.len(),
        funded,
        id,
        args.model
    );

    Ok(())
}
