pub mod config;
pub mod config_loader;
pub mod market;
pub mod sampling;
pub mod traits;

pub use config::{AppConfig, DashboardConfig, DatabaseConfig, LlmConfig, ServerConfig};
pub use config_loader::ConfigLoader;
pub use market::MarketState;
pub use sampling::{sample_indices, uniform_sample, uniform_sample_slice, Downsampled};
pub use traits::PriceSource;
