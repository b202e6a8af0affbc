//! Dashboard view: the primary snapshot sequence and its failure boundary.

use dioxus::prelude::*;

use crate::core::config::SNAPSHOT_URL;
use crate::core::model::Snapshot;
use crate::core::net;
use crate::snapshot::normalize::{normalize, RiskView};
use crate::snapshot::{ContributionBars, DriverGauges, TrendPanel};

/// State of the primary sequence: loading, a normalized view, or a
/// boundary failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub view: Option<RiskView>,
    pub failed: bool,
}

#[component]
pub fn Dashboard() -> Element {
    let mut state = use_signal(DashboardState::default);

    use_effect(move || {
        spawn(async move {
            match net::fetch_json::<Snapshot>(SNAPSHOT_URL).await {
                Ok(doc) => {
                    state.write().view = Some(normalize(&doc));
                }
                Err(err) => {
                    // The single user-visible fallback: headline shows N/A,
                    // every other section stays empty.
                    tracing::error!("snapshot load failed: {err}");
                    state.write().failed = true;
                }
            }
        });
    });

    let snapshot = state();

    rsx! {
        section { class: "page page-dashboard",
            Headline { state: snapshot.clone() }

            if let Some(view) = snapshot.view.as_ref() {
                DriverGauges { drivers: view.drivers.clone() }
                ContributionBars { drivers: view.drivers.clone() }
            }

            // Independent subsystem; its failures never reach this boundary.
            TrendPanel {}
        }
    }
}

#[component]
fn Headline(state: DashboardState) -> Element {
    if let Some(view) = &state.view {
        return rsx! {
            div { class: "headline",
                div { class: "headline__asof", "As of {view.as_of}" }
                div { class: "headline__score", "{view.score}" }
                div { class: "headline__band {view.band_class}", "{view.band_label}" }
                div { class: "headline__price", "BTC {view.price}" }
            }
        };
    }

    if state.failed {
        return rsx! {
            div { class: "headline",
                div { class: "headline__score", "N/A" }
            }
        };
    }

    rsx! {
        div { class: "headline headline--loading" }
    }
}
