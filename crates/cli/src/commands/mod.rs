//! CLI commands for the trading dashboard backend.

pub mod complete;
pub mod import_metrics;
pub mod metrics_status;
pub mod models;
pub mod serve;

pub use complete::{run_complete, CompleteArgs};
pub use import_metrics::{run_import_metrics, ImportMetricsArgs};
pub use metrics_status::{run_metrics_status, MetricsStatusArgs};
pub use models::{run_models, ModelsArgs};
pub use serve::{run_serve, ServeArgs};

use anyhow::{Context, Result};
use trade_dash_core::{AppConfig, ConfigLoader};

/// Loads configuration once for a command, optionally layering a profile.
pub(crate) fn load_config(profile: Option<&str>) -> Result<AppConfig> {
    let config = match profile {
        Some(profile) => ConfigLoader::load_with_profile(profile),
        None => ConfigLoader::load(),
    }
    .context("Failed to load configuration")?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
