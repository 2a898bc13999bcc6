use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub dashboard: DashboardConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string for the listener, e.g. `0.0.0.0:8080`.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Settings for the metrics dashboard endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Model whose metrics record is served (e.g. "Deepseek").
    pub model: String,
    /// Display name used when the stored record has none.
    pub bot_name: String,
    /// Upper bound on chart points returned per request.
    pub max_data_points: usize,
    /// Market symbol used for the live price on `/api/metric`.
    pub price_symbol: String,
}

/// Credentials and endpoints for the language-model providers.
///
/// Both keys are optional. A missing OpenRouter key switches the
/// OpenRouter-backed models to their DeepSeek fallbacks; a missing DeepSeek
/// key only fails once a completion is requested.
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openrouter_api_key: Option<String>,
    pub deepseek_base_url: String,
    pub openrouter_base_url: String,
}

// Keys stay out of logs.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("deepseek_api_key", &self.deepseek_api_key.as_ref().map(|_| "***"))
            .field(
                "openrouter_api_key",
                &self.openrouter_api_key.as_ref().map(|_| "***"),
            )
            .field("deepseek_base_url", &self.deepseek_base_url)
            .field("openrouter_base_url", &self.openrouter_base_url)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            deepseek_api_key: None,
            openrouter_api_key: None,
            deepseek_base_url: "https://api.deepseek.com".to_string(),
            openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/trade_dash".to_string(),
                max_connections: 10,
            },
            dashboard: DashboardConfig {
                model: "Deepseek".to_string(),
                bot_name: "Deepseek Trading Bot".to_string(),
                max_data_points: 50,
                price_symbol: "BTC/USDT".to_string(),
            },
            llm: LlmConfig::default(),
        }
    }
}
