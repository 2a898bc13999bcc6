//! Bot metrics data model.
//!
//! A bot's performance history is persisted as one row whose `metrics`
//! column holds every account snapshot the bot has taken. The dashboard
//! flattens those snapshots into chart points before sampling them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// Key of the nested account/performance object in a stored snapshot.
const ACCOUNT_KEY: &str = "accountInformationAndPerformance";
/// Key of the snapshot timestamp, both stored and served.
const CREATED_AT_KEY: &str = "createdAt";
/// Field used to drop snapshots taken before the account was funded.
const AVAILABLE_CASH_KEY: &str = "availableCash";

/// Language model driving a trading bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Deepseek,
}

impl ModelType {
    /// Value stored in the `model` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deepseek => "Deepseek",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deepseek" => Ok(Self::Deepseek),
            other => Err(anyhow::anyhow!("Unknown model type: {other}")),
        }
    }
}

/// A stored metrics row for one bot.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BotMetricsRecord {
    /// Database ID
    pub id: i64,
    /// Display name of the bot (may be empty)
    pub name: String,
    /// Model type as stored (see [`ModelType::as_str`])
    pub model: String,
    /// JSON array of raw snapshots
    pub metrics: JsonValue,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last time a snapshot was appended
    pub updated_at: DateTime<Utc>,
}

impl BotMetricsRecord {
    /// Flattens this record's snapshots into chart points.
    #[must_use]
    pub fn points(&self, now: DateTime<Utc>) -> Vec<MetricPoint> {
        flatten_snapshots(&self.metrics, now)
    }
}

/// One chart point: the account/performance fields of a snapshot plus its timestamp.
///
/// Serializes flat, e.g. `{"availableCash": 950.0, ..., "createdAt": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    #[serde(flatten)]
    pub fields: Map<String, JsonValue>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl MetricPoint {
    /// Available cash when present and numeric (numeric strings included).
    #[must_use]
    pub fn available_cash(&self) -> Option<f64> {
        self.fields.get(AVAILABLE_CASH_KEY).and_then(as_number)
    }

    /// Only funded snapshots are charted.
    #[must_use]
    pub fn is_funded(&self) -> bool {
        self.available_cash().is_some_and(|cash| cash > 0.0)
    }
}

fn as_number(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Timestamp format for snapshots missing their own, e.g. `2025-03-01T12:00:00.000Z`.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Converts the stored snapshot array into funded chart points, in stored order.
///
/// Anything other than a JSON array is treated as an empty history. A
/// snapshot without a usable `createdAt` is stamped with `now`.
#[must_use]
pub fn flatten_snapshots(raw: &JsonValue, now: DateTime<Utc>) -> Vec<MetricPoint> {
    let Some(snapshots) = raw.as_array() else {
        if !raw.is_null() {
            tracing::warn!("Stored metrics are not an array, treating as empty");
        }
        return Vec::new();
    };

    snapshots
        .iter()
        .map(|snapshot| {
            let mut fields = snapshot
                .get(ACCOUNT_KEY)
                .and_then(JsonValue::as_object)
                .cloned()
                .unwrap_or_default();
            fields.remove(CREATED_AT_KEY);

            let created_at = snapshot
                .get(CREATED_AT_KEY)
                .and_then(JsonValue::as_str)
                .filter(|s| !s.is_empty())
                .map_or_else(|| iso_timestamp(now), str::to_string);

            MetricPoint { fields, created_at }
        })
        .filter(MetricPoint::is_funded)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_flatten_lifts_account_fields() {
        let raw = json!([
            {
                "createdAt": "2025-02-28T10:00:00.000Z",
                "accountInformationAndPerformance": {
                    "availableCash": 950.5,
                    "totalCashValue": 1020.0,
                    "currentTotalReturn": 0.02
                }
            }
        ]);

        let points = flatten_snapshots(&raw, now());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].created_at, "2025-02-28T10:00:00.000Z");
        assert_eq!(points[0].available_cash(), Some(950.5));
        assert_eq!(points[0].fields["totalCashValue"], json!(1020.0));
    }

    #[test]
    fn test_flatten_drops_unfunded_snapshots() {
        let raw = json!([
            { "createdAt": "a", "accountInformationAndPerformance": { "availableCash": 0 } },
            { "createdAt": "b", "accountInformationAndPerformance": { "availableCash": -5 } },
            { "createdAt": "c", "accountInformationAndPerformance": { "totalCashValue": 10 } },
            { "createdAt": "d" },
            { "createdAt": "e", "accountInformationAndPerformance": { "availableCash": 1 } },
            { "createdAt": "f", "accountInformationAndPerformance": { "availableCash": "12.5" } }
        ]);

        let points = flatten_snapshots(&raw, now());
        let stamps: Vec<&str> = points.iter().map(|p| p.created_at.as_str()).collect();
        assert_eq!(stamps, vec!["e", "f"]);
    }

    #[test]
    fn test_flatten_stamps_missing_created_at() {
        let raw = json!([
            { "accountInformationAndPerformance": { "availableCash": 100 } },
            { "createdAt": "", "accountInformationAndPerformance": { "availableCash": 100 } }
        ]);

        let points = flatten_snapshots(&raw, now());
        assert_eq!(points.len(), 2);
        assert!(points
            .iter()
            .all(|p| p.created_at == "2025-03-01T12:00:00.000Z"));
    }

    #[test]
    fn test_flatten_non_array_is_empty() {
        assert!(flatten_snapshots(&JsonValue::Null, now()).is_empty());
        assert!(flatten_snapshots(&json!({ "availableCash": 5 }), now()).is_empty());
    }

    #[test]
    fn test_point_serializes_flat() {
        let raw = json!([
            {
                "createdAt": "2025-02-28T10:00:00.000Z",
                "accountInformationAndPerformance": {
                    "availableCash": 10,
                    "createdAt": "ignored"
                }
            }
        ]);

        let points = flatten_snapshots(&raw, now());
        let value = serde_json::to_value(&points[0]).unwrap();
        assert_eq!(
            value,
            json!({ "availableCash": 10, "createdAt": "2025-02-28T10:00:00.000Z" })
        );
    }

    #[test]
    fn test_model_type_parsing() {
        assert_eq!("Deepseek".parse::<ModelType>().unwrap(), ModelType::Deepseek);
        assert_eq!("deepseek".parse::<ModelType>().unwrap(), ModelType::Deepseek);
        assert!("gpt".parse::<ModelType>().is_err());
        assert_eq!(ModelType::Deepseek.to_string(), "Deepseek");
    }
}
