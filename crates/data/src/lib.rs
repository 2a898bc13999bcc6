//! Data storage for the trading dashboard.
//!
//! This crate provides:
//! - Database client for `PostgreSQL`
//! - The bot metrics model and its snapshot flattening
//! - Repositories for typed database access

pub mod database;
pub mod models;
pub mod repositories;

pub use database::DatabaseClient;
pub use models::{flatten_snapshots, iso_timestamp, BotMetricsRecord, MetricPoint, ModelType};
pub use repositories::{MetricsRepository, MetricsStore, Repositories};
