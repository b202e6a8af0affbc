//! End-to-end normalization checks against realistic feed documents.

use serde_json::json;

use ui::core::format::PLACEHOLDER;
use ui::core::model::Snapshot;
use ui::snapshot::normalize::normalize;
use ui::snapshot::sparkline::Trend;

fn decode(value: serde_json::Value) -> Snapshot {
    serde_json::from_value(value).expect("document should decode")
}

#[test]
fn full_snapshot_renders_expected_headline_and_gauge() {
    let doc = decode(json!({
        "risk": 62.345,
        "band": "yellow",
        "drivers": {
            "etf_flows": {
                "score": 0.71,
                "contribution": 0.0032,
                "trailing": [
                    {"date": "d3", "usd": 100},
                    {"date": "d2", "usd": 90},
                    {"date": "d1", "usd": 80}
                ]
            }
        }
    }));

    let view = normalize(&doc);
    assert_eq!(view.score, "62.35");
    assert_eq!(view.band_label, "YELLOW");
    assert_eq!(view.band_class, "yellow");
    assert_eq!(view.drivers.len(), 1);

    let gauge = &view.drivers[0];
    assert_eq!(gauge.label, "ETF Net Flows");
    assert_eq!(gauge.score_text, "71");
    assert_eq!(gauge.contribution_text, "+0 bp");

    let spark = gauge.sparkline.as_ref().expect("three points make a line");
    assert_eq!(spark.trend, Trend::Up);
    assert_eq!(spark.points.first().unwrap().value, 80.0);
    assert_eq!(spark.points.last().unwrap().value, 100.0);
    assert_eq!(spark.points.first().unwrap().date, "d1");
}

#[test]
fn empty_driver_map_renders_zero_blocks() {
    let view = normalize(&decode(json!({ "risk": 50.0, "drivers": {} })));
    assert_eq!(view.score, "50.00");
    assert!(view.drivers.is_empty());
}

#[test]
fn document_without_drivers_key_is_equivalent_to_empty() {
    let view = normalize(&decode(json!({ "risk": 50.0 })));
    assert!(view.drivers.is_empty());
}

#[test]
fn sparse_driver_still_renders_with_placeholders() {
    let view = normalize(&decode(json!({
        "drivers": {
            "net_liquidity": {
                "score": 0.55,
                "trailing": [{"date": "d1", "value": 1.0}]
            }
        }
    })));

    let gauge = &view.drivers[0];
    assert_eq!(gauge.score_text, "55");
    assert_eq!(gauge.contribution_text, PLACEHOLDER);
    // One usable point is not a line.
    assert!(gauge.sparkline.is_none());
    assert_eq!(gauge.source, PLACEHOLDER);
    assert_eq!(gauge.health_class, "neu");
}
