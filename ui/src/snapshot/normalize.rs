//! Snapshot-to-view-model normalization.
//!
//! The raw document is advisory: any field may be missing, stale, or
//! non-finite. Everything that reaches a view struct here is already safe
//! to render directly, so the components below this layer never branch on
//! data quality.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::config::{DriverKind, DriverSpec, DRIVERS};
use crate::core::format::{
    contribution_bp, count, funding_class, humanize_currency, percent, percent_or_basis_points,
    premium_class, score_text, signed_currency, Heat, SignedAmount, Tone, PLACEHOLDER,
};
use crate::core::model::{DriverReading, Snapshot};
use crate::snapshot::sparkline::Sparkline;

/// Fully-defaulted headline view.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskView {
    pub as_of: String,
    pub score: String,
    pub band_class: String,
    pub band_label: String,
    pub price: String,
    pub smooth_days: u32,
    pub drivers: Vec<DriverView>,
}

/// One present driver, in display order. Absent drivers simply have no
/// view; they are never padded with placeholder blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverView {
    pub key: &'static str,
    pub label: &'static str,
    pub score_text: String,
    pub contribution_text: String,
    pub bar_width: f64,
    pub bar_tone: Tone,
    pub detail: DriverDetail,
    pub sparkline: Option<Sparkline>,
    pub source: String,
    pub asof_text: String,
    pub health_class: String,
}

/// Kind-specific detail rows; each variant carries exactly the auxiliary
/// fields relevant to its driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverDetail {
    Flows {
        today: SignedAmount,
        average: SignedAmount,
        window: u32,
    },
    Liquidity {
        level: String,
        delta: SignedAmount,
        average: String,
        window: u32,
    },
    Issuance {
        cap: String,
        delta: SignedAmount,
        average: String,
        window: u32,
    },
    Leverage {
        funding: String,
        funding_heat: Heat,
        premium: String,
        premium_heat: Heat,
    },
    Onchain {
        activity: String,
        fees: String,
        mempool: String,
    },
}

/// Normalize a raw snapshot. Total: a completely malformed document yields
/// an all-placeholder view with zero drivers.
pub fn normalize(doc: &Snapshot) -> RiskView {
    let smooth_days = doc.smooth_days.unwrap_or(7);
    let band = doc.band.clone().unwrap_or_else(|| "yellow".to_string());

    let drivers = DRIVERS
        .iter()
        .filter_map(|spec| {
            doc.drivers
                .get(spec.key)
                .map(|reading| driver_view(spec, reading, doc, smooth_days))
        })
        .collect();

    RiskView {
        as_of: doc.as_of.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        score: doc
            .risk
            .filter(|r| r.is_finite())
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        band_class: band.to_ascii_lowercase(),
        band_label: band.to_uppercase(),
        price: humanize_currency(num(doc.btc_price_usd)),
        smooth_days,
        drivers,
    }
}

fn driver_view(
    spec: &DriverSpec,
    reading: &DriverReading,
    doc: &Snapshot,
    smooth_days: u32,
) -> DriverView {
    let contribution = reading.contribution.filter(|c| c.is_finite());
    let bar_width = contribution
        .map(|c| (c.abs() * 1000.0).min(100.0))
        .unwrap_or(0.0);
    let bar_tone = match contribution {
        Some(c) if c < 0.0 => Tone::Neg,
        Some(_) => Tone::Pos,
        None => Tone::Flat,
    };

    DriverView {
        key: spec.key,
        label: spec.label,
        score_text: score_text(reading.score),
        contribution_text: contribution_bp(reading.contribution),
        bar_width,
        bar_tone,
        detail: detail_for(spec.kind, reading, doc, smooth_days),
        sparkline: Sparkline::build(&reading.trailing),
        source: reading
            .source
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        asof_text: freshness(reading.asof_utc.as_deref()),
        health_class: reading.health.clone().unwrap_or_else(|| "neu".to_string()),
    }
}

fn detail_for(
    kind: DriverKind,
    reading: &DriverReading,
    doc: &Snapshot,
    smooth_days: u32,
) -> DriverDetail {
    match kind {
        DriverKind::Flows => DriverDetail::Flows {
            today: signed_currency(resolve(doc, "etf_flow_usd", reading.flow_usd)),
            average: signed_currency(num(reading.flow_avg_usd)),
            window: smooth_days,
        },
        DriverKind::Liquidity => DriverDetail::Liquidity {
            level: humanize_currency(resolve(doc, "net_liquidity_usd", reading.level_usd)),
            delta: signed_currency(num(reading.delta_1d_usd)),
            average: humanize_currency(num(reading.avg_usd)),
            window: smooth_days,
        },
        DriverKind::Issuance => DriverDetail::Issuance {
            cap: humanize_currency(resolve(doc, "stablecoin_cap_usd", reading.level_usd)),
            delta: signed_currency(num(reading.delta_1d_usd)),
            average: humanize_currency(num(reading.avg_usd)),
            window: smooth_days,
        },
        DriverKind::Leverage => {
            let funding = resolve(doc, "funding_rate", reading.funding_rate);
            let premium = resolve(doc, "perp_premium", reading.perp_premium);
            DriverDetail::Leverage {
                funding: percent(funding),
                funding_heat: funding_class(funding),
                premium: percent_or_basis_points(premium),
                premium_heat: premium_class(premium),
            }
        }
        DriverKind::Onchain => DriverDetail::Onchain {
            activity: count(num(reading.tx_count)),
            fees: humanize_currency(num(reading.fees_usd)),
            mempool: count(num(reading.mempool_vbytes)),
        },
    }
}

// Scalar resolution chain: promoted top-level copy wins over the per-driver
// field; either may be absent. Missing values travel as NaN, which the
// formatting layer turns into the placeholder.
fn resolve(doc: &Snapshot, promoted_key: &str, local: Option<f64>) -> f64 {
    doc.promoted_metric(promoted_key)
        .or_else(|| local.filter(|v| v.is_finite()))
        .unwrap_or(f64::NAN)
}

fn num(v: Option<f64>) -> f64 {
    v.unwrap_or(f64::NAN)
}

/// Short human date for the per-driver freshness line. Falls back to the
/// raw date segment when the timestamp does not parse as RFC 3339.
fn freshness(asof: Option<&str>) -> String {
    let Some(raw) = asof else {
        return PLACEHOLDER.to_string();
    };
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(stamp) => stamp
            .format(&format_description!(
                "[month repr:short] [day padding:none]"
            ))
            .unwrap_or_else(|_| PLACEHOLDER.to_string()),
        Err(_) => raw
            .split_once('T')
            .map(|(date, _)| date.to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}
