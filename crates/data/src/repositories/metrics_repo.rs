//! Bot metrics repository.
//!
//! Read access to the `bot_metrics` table, plus the insert used to seed it.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::models::{BotMetricsRecord, ModelType};

/// Lookup of a bot's stored metrics.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Returns the first metrics record stored for `model`, if any.
    async fn find_first_by_model(&self, model: ModelType) -> Result<Option<BotMetricsRecord>>;
}

/// Repository for bot metrics operations.
#[derive(Debug, Clone)]
pub struct MetricsRepository {
    pool: PgPool,
}

impl MetricsRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a metrics row and returns its ID.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn insert(&self, name: &str, model: ModelType, metrics: &JsonValue) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO bot_metrics (name, model, metrics)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(model.as_str())
        .bind(metrics)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Counts stored rows for a model.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn count_by_model(&self, model: ModelType) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bot_metrics WHERE model = $1")
                .bind(model.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

#[async_trait]
impl MetricsStore for MetricsRepository {
    async fn find_first_by_model(&self, model: ModelType) -> Result<Option<BotMetricsRecord>> {
        let record = sqlx::query_as::<_, BotMetricsRecord>(
            r#"
            SELECT id, name, model, metrics, created_at, updated_at
            FROM bot_metrics
            WHERE model = $1
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(model.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
