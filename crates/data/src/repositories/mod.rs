//! Database repositories for the trading dashboard.

pub mod metrics_repo;

pub use metrics_repo::{MetricsRepository, MetricsStore};

use sqlx::PgPool;

/// Creates all repositories from a single database pool.
pub struct Repositories {
    pub metrics: MetricsRepository,
}

impl Repositories {
    /// Creates a new set of repositories from a database pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            metrics: MetricsRepository::new(pool),
        }
    }
}
