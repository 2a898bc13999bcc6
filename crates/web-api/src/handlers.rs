//! Dashboard metrics endpoints.
//!
//! Both endpoints read the first stored metrics record for the configured
//! model, flatten its snapshots into funded chart points and sample them down
//! to a fixed number of points. They always answer 200: storage or price
//! failures are logged and replaced by an empty payload.

use anyhow::Result;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use trade_dash_core::{DashboardConfig, Downsampled, MarketState, PriceSource};
use trade_dash_data::{iso_timestamp, BotMetricsRecord, MetricPoint, MetricsStore, ModelType};

const METRIC_OK_MESSAGE: &str = "Metrics fetched successfully";
const METRIC_FALLBACK_MESSAGE: &str = "Metrics fetched successfully (sample data)";

/// Dashboard settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub model: ModelType,
    pub bot_name: String,
    pub max_data_points: usize,
    pub price_symbol: String,
}

impl DashboardSettings {
    /// # Errors
    /// Returns an error if the configured model name is unknown.
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        Ok(Self {
            model: config.model.parse()?,
            bot_name: config.bot_name.clone(),
            max_data_points: config.max_data_points,
            price_symbol: config.price_symbol.clone(),
        })
    }
}

/// Shared state for the dashboard handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MetricsStore>,
    /// Live price lookup for `/api/metric`; without one `pricing.btc` is null.
    pub price_source: Option<Arc<dyn PriceSource>>,
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MetricsStore>, settings: DashboardSettings) -> Self {
        Self {
            store,
            price_source: None,
            settings: Arc::new(settings),
        }
    }

    #[must_use]
    pub fn with_price_source(mut self, price_source: Arc<dyn PriceSource>) -> Self {
        self.price_source = Some(price_source);
        self
    }
}

/// Response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Chart data for one bot. Absent fields are omitted from the JSON body.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsPayload {
    pub metrics: Vec<MetricPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
}

#[derive(Debug, Serialize)]
pub struct Pricing {
    pub btc: Option<MarketState>,
}

impl MetricsPayload {
    fn from_record(
        record: &BotMetricsRecord,
        sampled: Downsampled<MetricPoint>,
        settings: &DashboardSettings,
    ) -> Self {
        let model = if record.model.is_empty() {
            settings.model.to_string()
        } else {
            record.model.clone()
        };
        let name = if record.name.is_empty() {
            settings.bot_name.clone()
        } else {
            record.name.clone()
        };

        Self {
            metrics: sampled.points,
            total_count: Some(sampled.original_len),
            model: Some(model),
            name: Some(name),
            created_at: Some(iso_timestamp(record.created_at)),
            updated_at: Some(iso_timestamp(record.updated_at)),
            pricing: None,
        }
    }

    /// Empty series stamped with the configured identity and the current time.
    fn placeholder(settings: &DashboardSettings) -> Self {
        let now = iso_timestamp(Utc::now());
        Self {
            metrics: Vec::new(),
            total_count: None,
            model: Some(settings.model.to_string()),
            name: Some(settings.bot_name.clone()),
            created_at: Some(now.clone()),
            updated_at: Some(now),
            pricing: None,
        }
    }
}

/// Loads the configured model's record and samples its funded points.
async fn load_sampled(
    state: &AppState,
) -> Result<Option<(BotMetricsRecord, Downsampled<MetricPoint>)>> {
    let Some(record) = state.store.find_first_by_model(state.settings.model).await? else {
        return Ok(None);
    };

    let points = record.points(Utc::now());
    let sampled = Downsampled::from_series(points, state.settings.max_data_points);

    tracing::info!(
        "Total metrics: {}, sampled: {}",
        sampled.original_len,
        sampled.points.len()
    );

    Ok(Some((record, sampled)))
}

/// GET /api/metrics - Sampled metrics history for the configured bot.
pub async fn get_metrics(State(state): State<AppState>) -> Json<ApiResponse<MetricsPayload>> {
    let data = match load_sampled(&state).await {
        Ok(Some((record, sampled))) => {
            MetricsPayload::from_record(&record, sampled, &state.settings)
        }
        Ok(None) => MetricsPayload {
            total_count: Some(0),
            ..MetricsPayload::default()
        },
        Err(e) => {
            tracing::error!("Error fetching metrics: {:#}", e);
            MetricsPayload {
                total_count: Some(0),
                ..MetricsPayload::placeholder(&state.settings)
            }
        }
    };

    Json(ApiResponse {
        data,
        message: None,
        success: Some(true),
    })
}

async fn build_metric_payload(state: &AppState) -> Result<Option<MetricsPayload>> {
    let Some((record, sampled)) = load_sampled(state).await? else {
        return Ok(None);
    };

    let btc = match &state.price_source {
        Some(source) => Some(source.current_state(&state.settings.price_symbol).await?),
        None => None,
    };

    let mut payload = MetricsPayload::from_record(&record, sampled, &state.settings);
    payload.pricing = Some(Pricing { btc });
    Ok(Some(payload))
}

/// GET /api/metric - Sampled metrics history plus the live BTC price.
pub async fn get_metric(State(state): State<AppState>) -> Json<ApiResponse<MetricsPayload>> {
    let response = match build_metric_payload(&state).await {
        Ok(Some(data)) => ApiResponse {
            data,
            message: Some(METRIC_OK_MESSAGE.to_string()),
            success: Some(true),
        },
        Ok(None) => ApiResponse {
            data: MetricsPayload::default(),
            message: None,
            success: None,
        },
        Err(e) => {
            tracing::error!("Error fetching metrics: {:#}", e);
            ApiResponse {
                data: MetricsPayload::placeholder(&state.settings),
                message: Some(METRIC_FALLBACK_MESSAGE.to_string()),
                success: Some(true),
            }
        }
    };

    Json(response)
}
