pub mod handlers;
pub mod server;

pub use handlers::{ApiResponse, AppState, DashboardSettings, MetricsPayload, Pricing};
pub use server::ApiServer;
