//! Long-run trend panel. Fetches its own document and fails silently: a
//! missing trend never blocks or degrades the snapshot view.

use dioxus::prelude::*;

use crate::core::config::{HISTORY_CSV_URL, HISTORY_URL};
use crate::core::model::HistoryPoint;
use crate::core::net;

pub const TREND_WIDTH: f64 = 640.0;
pub const TREND_HEIGHT: f64 = 120.0;

/// Min/max-normalized polyline path across the full width. A degenerate
/// range keeps a divisor of 1 so a flat history draws as a flat line.
/// `None` when fewer than two finite points exist.
pub fn trend_path(points: &[HistoryPoint], width: f64, height: f64) -> Option<String> {
    let values: Vec<f64> = points
        .iter()
        .map(|p| p.risk)
        .filter(|v| v.is_finite())
        .collect();
    if values.len() < 2 {
        return None;
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if hi > lo { hi - lo } else { 1.0 };

    let n = values.len();
    let mut path = String::new();
    for (i, v) in values.iter().enumerate() {
        let x = width * (i as f64 / (n - 1) as f64);
        let y = height * (1.0 - (v - lo) / span);
        if i == 0 {
            path.push_str(&format!("M {x:.1} {y:.1}"));
        } else {
            path.push_str(&format!(" L {x:.1} {y:.1}"));
        }
    }
    Some(path)
}

#[component]
pub fn TrendPanel() -> Element {
    let mut history = use_signal(|| None::<Vec<HistoryPoint>>);

    use_effect(move || {
        spawn(async move {
            match net::fetch_json::<Vec<HistoryPoint>>(HISTORY_URL).await {
                Ok(points) => history.set(Some(points)),
                // Swallowed here: the trend is an independent subsystem and
                // its failure must stay invisible to the snapshot sequence.
                Err(err) => tracing::debug!("history fetch skipped: {err}"),
            }
        });
    });

    let rendered = history
        .read()
        .as_ref()
        .and_then(|points| trend_path(points, TREND_WIDTH, TREND_HEIGHT));

    rsx! {
        if let Some(path) = rendered {
            section { class: "trend",
                div { class: "trend__header",
                    h2 { "Risk history" }
                    a {
                        class: "trend__export",
                        href: "{HISTORY_CSV_URL}",
                        download: "risk-history.csv",
                        "Download CSV"
                    }
                }
                svg {
                    class: "trend__svg",
                    view_box: "0 0 {TREND_WIDTH} {TREND_HEIGHT}",
                    "preserveAspectRatio": "none",
                    path { d: "{path}", class: "trend__line" }
                }
            }
        }
    }
}
