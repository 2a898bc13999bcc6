//! Data models for the trading dashboard.
//!
//! Models derive `sqlx::FromRow` for database compatibility.

pub mod bot_metrics;

pub use bot_metrics::{
    flatten_snapshots, iso_timestamp, BotMetricsRecord, MetricPoint, ModelType,
};
