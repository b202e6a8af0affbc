//! Raw document model for the snapshot and history feeds.
//!
//! Documents arrive loosely structured: any scalar may be absent, any
//! driver may be missing, and older feeds used different keys for trailing
//! values. Deserialization therefore never enforces completeness; the
//! normalizer decides what a missing field means.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Current-state document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    pub as_of: Option<String>,
    pub risk: Option<f64>,
    pub band: Option<String>,
    pub btc_price_usd: Option<f64>,
    pub smooth_days: Option<u32>,
    #[serde(default)]
    pub drivers: BTreeMap<String, DriverReading>,
    /// Metrics the pipeline promotes to the top level for convenience.
    /// Consulted by the normalizer before the per-driver copy.
    #[serde(flatten)]
    pub promoted: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Promoted top-level metric, if present and usable.
    pub fn promoted_metric(&self, key: &str) -> Option<f64> {
        self.promoted
            .get(key)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }
}

/// Per-driver reading. Which auxiliary fields are populated varies by
/// driver kind and by document version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverReading {
    pub score: Option<f64>,
    pub contribution: Option<f64>,
    pub flow_usd: Option<f64>,
    pub flow_avg_usd: Option<f64>,
    pub level_usd: Option<f64>,
    pub delta_1d_usd: Option<f64>,
    pub avg_usd: Option<f64>,
    pub funding_rate: Option<f64>,
    pub perp_premium: Option<f64>,
    pub tx_count: Option<f64>,
    pub fees_usd: Option<f64>,
    pub mempool_vbytes: Option<f64>,
    #[serde(default)]
    pub trailing: Vec<TrailPoint>,
    pub source: Option<String>,
    #[serde(alias = "asof")]
    pub asof_utc: Option<String>,
    pub health: Option<String>,
}

/// One entry of a driver's trailing series, newest first in the document.
/// Flow feeds historically used `usd` as the value key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrailPoint {
    pub date: String,
    #[serde(default, alias = "usd")]
    pub value: Option<f64>,
}

/// One day of the long-run risk series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub risk: f64,
}
