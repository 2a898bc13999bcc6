use crate::market::MarketState;
use anyhow::Result;
use async_trait::async_trait;

/// Source of live market prices.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn current_state(&self, symbol: &str) -> Result<MarketState>;
}
