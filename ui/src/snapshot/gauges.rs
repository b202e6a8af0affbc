//! Per-driver gauge blocks and the parallel contribution-bar view.

use dioxus::prelude::*;

use crate::snapshot::normalize::{DriverDetail, DriverView};
use crate::snapshot::tooltip::SparklineChart;

#[component]
pub fn DriverGauges(drivers: Vec<DriverView>) -> Element {
    rsx! {
        div { class: "gauges",
            for driver in drivers.iter() {
                GaugeBlock { key: "{driver.key}", driver: driver.clone() }
            }
        }
    }
}

#[component]
fn GaugeBlock(driver: DriverView) -> Element {
    rsx! {
        section { class: "gauge",
            div { class: "gauge__title", "{driver.label}" }
            div { class: "gauge__value",
                "{driver.score_text}"
                span { class: "gauge__scale", " /100" }
            }
            div { class: "gauge__contribution", "Contribution: {driver.contribution_text}" }

            DetailRows { detail: driver.detail.clone() }

            if let Some(spark) = driver.sparkline.clone() {
                SparklineChart { spark }
            }

            div { class: "gauge__freshness",
                span { class: "gauge__source", "{driver.source}" }
                span { class: "gauge__asof", "{driver.asof_text}" }
                span { class: "gauge__health gauge__health--{driver.health_class}" }
            }
        }
    }
}

#[component]
fn DetailRows(detail: DriverDetail) -> Element {
    rsx! {
        ul { class: "gauge__details",
            for (label, value, tone) in detail_rows(&detail).into_iter() {
                li { class: "gauge__detail",
                    span { class: "gauge__detail-label", "{label}" }
                    span { class: "gauge__detail-value {tone}", "{value}" }
                }
            }
        }
    }
}

// The one place driver kinds fan out into their detail rows. Adding a
// driver means adding a variant here, not another string comparison.
fn detail_rows(detail: &DriverDetail) -> Vec<(String, String, &'static str)> {
    match detail {
        DriverDetail::Flows {
            today,
            average,
            window,
        } => vec![
            ("Today".into(), today.text.clone(), today.tone.class()),
            (
                format!("{window}d avg"),
                average.text.clone(),
                average.tone.class(),
            ),
        ],
        DriverDetail::Liquidity {
            level,
            delta,
            average,
            window,
        } => vec![
            ("Level".into(), level.clone(), ""),
            ("1d Δ".into(), delta.text.clone(), delta.tone.class()),
            (format!("{window}d avg"), average.clone(), ""),
        ],
        DriverDetail::Issuance {
            cap,
            delta,
            average,
            window,
        } => vec![
            ("Cap".into(), cap.clone(), ""),
            ("1d Δ".into(), delta.text.clone(), delta.tone.class()),
            (format!("{window}d avg"), average.clone(), ""),
        ],
        DriverDetail::Leverage {
            funding,
            funding_heat,
            premium,
            premium_heat,
        } => vec![
            ("Funding".into(), funding.clone(), funding_heat.class()),
            ("Perp premium".into(), premium.clone(), premium_heat.class()),
        ],
        DriverDetail::Onchain {
            activity,
            fees,
            mempool,
        } => vec![
            ("Transactions".into(), activity.clone(), ""),
            ("Fees".into(), fees.clone(), ""),
            ("Mempool vB".into(), mempool.clone(), ""),
        ],
    }
}

#[component]
pub fn ContributionBars(drivers: Vec<DriverView>) -> Element {
    rsx! {
        div { class: "contribs",
            for driver in drivers.iter() {
                {
                    let tone = driver.bar_tone.class();
                    rsx! {
                        div { class: "contrib", key: "{driver.key}",
                            div { class: "contrib__title", "{driver.label}" }
                            div { class: "contrib__bar",
                                span {
                                    class: "contrib__fill contrib__fill--{tone}",
                                    style: "width: {driver.bar_width}%;",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
