//! Pointer interaction for sparklines.
//!
//! One floating label exists for the whole page. Sparkline charts share it
//! through [`TooltipCtx`]; each chart only writes label state derived from
//! its own immutable series, so handlers are safe to re-enter.

use dioxus::prelude::*;

use crate::core::format::signed_currency;
use crate::snapshot::sparkline::{Sparkline, SPARK_HEIGHT, SPARK_WIDTH};

/// Shared handle to the single floating label.
#[derive(Clone, Copy)]
pub struct TooltipCtx(pub Signal<Option<TooltipState>>);

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub date: String,
    pub value_text: String,
    pub tone_class: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Nearest series index for a horizontal pointer fraction, clamped to the
/// series bounds.
pub fn hover_index(fraction: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let scaled = (fraction * (len - 1) as f64).round();
    (scaled.max(0.0) as usize).min(len - 1)
}

/// The single floating label, rendered once near the app root and hidden
/// while no sparkline is hovered.
#[component]
pub fn TooltipLayer() -> Element {
    let TooltipCtx(state) = use_context::<TooltipCtx>();

    rsx! {
        if let Some(tip) = state() {
            div {
                class: "spark-tooltip",
                style: "left: {tip.x + 12.0}px; top: {tip.y + 14.0}px;",
                span { class: "spark-tooltip__date", "{tip.date}" }
                span { class: "spark-tooltip__value {tip.tone_class}", "{tip.value_text}" }
            }
        }
    }
}

/// SVG sparkline plus the interaction wiring that feeds the shared label.
#[component]
pub fn SparklineChart(spark: Sparkline) -> Element {
    let TooltipCtx(mut tip) = use_context::<TooltipCtx>();
    // Measured on mount; pointer fractions are relative to this width.
    let mut hover_width = use_signal(|| 0.0f64);

    let len = spark.points.len();
    let points = spark.points.clone();
    let trend_class = spark.trend.class();

    rsx! {
        div {
            class: "spark",
            onmounted: move |evt| {
                let mounted = evt.data().clone();
                spawn(async move {
                    if let Ok(rect) = mounted.get_client_rect().await {
                        hover_width.set(rect.width());
                    }
                });
            },
            onmousemove: move |evt| {
                let width = *hover_width.read();
                if width <= 0.0 || len == 0 {
                    return;
                }
                let local = evt.data().element_coordinates();
                let page = evt.data().page_coordinates();
                let point = &points[hover_index(local.x / width, len)];
                let amount = signed_currency(point.value);
                tip.set(Some(TooltipState {
                    date: point.date.clone(),
                    value_text: amount.text,
                    tone_class: amount.tone.class(),
                    x: page.x,
                    y: page.y,
                }));
            },
            onmouseleave: move |_| tip.set(None),

            svg {
                class: "spark__svg spark__svg--{trend_class}",
                view_box: "0 0 {SPARK_WIDTH} {SPARK_HEIGHT}",
                "preserveAspectRatio": "none",

                line {
                    x1: "0",
                    y1: "{spark.guide_top}",
                    x2: "{SPARK_WIDTH}",
                    y2: "{spark.guide_top}",
                    class: "spark__guide",
                }
                line {
                    x1: "0",
                    y1: "{spark.guide_bottom}",
                    x2: "{SPARK_WIDTH}",
                    y2: "{spark.guide_bottom}",
                    class: "spark__guide",
                }
                path { d: "{spark.path}", class: "spark__line" }
            }
        }
    }
}
