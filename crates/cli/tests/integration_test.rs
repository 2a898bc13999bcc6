use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};
use trade_dash_core::{sample_indices, ConfigLoader, Downsampled};
use trade_dash_data::flatten_snapshots;

fn history(len: usize) -> Value {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Value::Array(
        (0..len)
            .map(|i| {
                let minutes = i64::try_from(i).unwrap() * 5;
                // every tenth snapshot was taken before funding
                let cash = if i % 10 == 0 { 0 } else { 1000 + i };
                json!({
                    "createdAt": (start + Duration::minutes(minutes)).to_rfc3339(),
                    "accountInformationAndPerformance": {
                        "availableCash": cash,
                        "totalCashValue": 1000 + i
                    }
                })
            })
            .collect(),
    )
}

#[test]
fn test_stored_history_to_chart_points() {
    let now = Utc::now();
    let points = flatten_snapshots(&history(600), now);
    assert_eq!(points.len(), 540);

    let first = points[0].created_at.clone();
    let last = points[539].created_at.clone();

    let sampled = Downsampled::from_series(points, 50);
    assert_eq!(sampled.original_len, 540);
    assert_eq!(sampled.points.len(), 50);
    assert_eq!(sampled.points[0].created_at, first);
    assert_eq!(sampled.points[49].created_at, last);
    assert!(sampled.points.iter().all(|p| p.is_funded()));

    // chart points stay in chronological order
    assert!(sampled
        .points
        .windows(2)
        .all(|w| w[0].created_at < w[1].created_at));
}

#[test]
fn test_default_bound_matches_sampler() {
    let config = ConfigLoader::figment(None)
        .extract::<trade_dash_core::AppConfig>()
        .unwrap();
    let bound = config.dashboard.max_data_points;

    let indices = sample_indices(540, bound);
    assert_eq!(indices.len(), bound);
    assert_eq!(indices.first(), Some(&0));
    assert_eq!(indices.last(), Some(&539));
}
