//! Formatting helpers for presenting snapshot metrics.
//!
//! Every function here is total: absent or non-finite input renders the
//! placeholder glyph instead of propagating an error into a view.

/// Glyph shown wherever a value is missing or unusable.
pub const PLACEHOLDER: &str = "—";

/// Qualitative temperature band for leverage metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heat {
    Hot,
    Neu,
    Cool,
}

impl Heat {
    pub fn class(self) -> &'static str {
        match self {
            Heat::Hot => "hot",
            Heat::Neu => "neu",
            Heat::Cool => "cool",
        }
    }
}

/// Sign classification for deltas and contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pos,
    Neg,
    Flat,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Pos => "pos",
            Tone::Neg => "neg",
            Tone::Flat => "flat",
        }
    }
}

/// A formatted signed amount plus the tone used to color it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedAmount {
    pub text: String,
    pub tone: Tone,
}

impl SignedAmount {
    fn flat() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            tone: Tone::Flat,
        }
    }
}

/// Dollar amount scaled by magnitude: 1e12 → T, 1e9 → B, 1e6 → M, two
/// decimals each; smaller values render in full with thousands grouping.
pub fn humanize_currency(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    let abs = n.abs();
    if abs >= 1e12 {
        format!("{sign}${:.2}T", abs / 1e12)
    } else if abs >= 1e9 {
        format!("{sign}${:.2}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{sign}${:.2}M", abs / 1e6)
    } else {
        format!("{sign}${}", group_thousands(abs.round() as u64))
    }
}

/// Signed currency delta. Sub-dollar magnitudes render flat.
pub fn signed_currency(n: f64) -> SignedAmount {
    if !n.is_finite() || n.abs() < 1.0 {
        return SignedAmount::flat();
    }
    if n > 0.0 {
        SignedAmount {
            text: format!("+{}", humanize_currency(n)),
            tone: Tone::Pos,
        }
    } else {
        SignedAmount {
            text: humanize_currency(n),
            tone: Tone::Neg,
        }
    }
}

pub fn percent(n: f64) -> String {
    if n.is_finite() {
        format!("{n:.2}%")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Percentages under 0.10% lose their resolution at two decimals, so they
/// switch to basis points instead.
pub fn percent_or_basis_points(n: f64) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if n.abs() < 0.10 {
        let bp = format!("{:.2}", n * 100.0);
        let bp = bp.strip_suffix('0').unwrap_or(&bp);
        format!("{bp} bp")
    } else {
        format!("{n:.2}%")
    }
}

/// Annualized funding rate temperature. Thresholds are part of the feed
/// contract.
pub fn funding_class(rate: f64) -> Heat {
    if !rate.is_finite() {
        Heat::Neu
    } else if rate >= 12.0 {
        Heat::Hot
    } else if rate <= 8.0 {
        Heat::Cool
    } else {
        Heat::Neu
    }
}

/// Perp premium temperature. Thresholds are part of the feed contract.
pub fn premium_class(premium: f64) -> Heat {
    if !premium.is_finite() {
        Heat::Neu
    } else if premium >= 0.15 {
        Heat::Hot
    } else if premium <= -0.10 {
        Heat::Cool
    } else {
        Heat::Neu
    }
}

/// Driver score shown on the 0–100 gauge.
pub fn score_text(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{:.0}", s * 100.0),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Contribution in signed basis points, `+`-prefixed like the upstream feed.
pub fn contribution_bp(contribution: Option<f64>) -> String {
    match contribution {
        Some(c) if c.is_finite() => {
            let prefix = if c >= 0.0 { "+" } else { "" };
            format!("{prefix}{:.0} bp", c * 100.0)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Plain grouped count for activity-style metrics.
pub fn count(n: f64) -> String {
    if n.is_finite() && n >= 0.0 {
        group_thousands(n.round() as u64)
    } else {
        PLACEHOLDER.to_string()
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_suffixes_switch_at_magnitude_thresholds() {
        assert_eq!(humanize_currency(1.23e12), "$1.23T");
        assert_eq!(humanize_currency(1e12), "$1.00T");
        assert_eq!(humanize_currency(2.5e9), "$2.50B");
        assert_eq!(humanize_currency(3.456e6), "$3.46M");
        assert_eq!(humanize_currency(934_210.4), "$934,210");
        assert_eq!(humanize_currency(950.0), "$950");
    }

    #[test]
    fn currency_keeps_sign_and_handles_junk() {
        assert_eq!(humanize_currency(-2.5e9), "-$2.50B");
        assert_eq!(humanize_currency(f64::NAN), PLACEHOLDER);
        assert_eq!(humanize_currency(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn signed_currency_dead_zone() {
        for n in [0.0, 0.5, -0.99, f64::NAN, f64::NEG_INFINITY] {
            let amount = signed_currency(n);
            assert_eq!(amount.text, PLACEHOLDER);
            assert_eq!(amount.tone, Tone::Flat);
        }
    }

    #[test]
    fn signed_currency_prefixes_by_sign() {
        let up = signed_currency(1.0);
        assert_eq!(up.tone, Tone::Pos);
        assert!(up.text.starts_with('+'));

        let down = signed_currency(-120_500_000.0);
        assert_eq!(down.tone, Tone::Neg);
        assert_eq!(down.text, "-$120.50M");
    }

    #[test]
    fn small_percentages_switch_to_basis_points() {
        assert_eq!(percent_or_basis_points(0.05), "5.0 bp");
        assert_eq!(percent_or_basis_points(-0.032), "-3.2 bp");
        assert_eq!(percent_or_basis_points(0.0725), "7.25 bp");
        // The boundary itself stays in percent.
        assert_eq!(percent_or_basis_points(0.10), "0.10%");
        assert_eq!(percent_or_basis_points(1.5), "1.50%");
        assert_eq!(percent_or_basis_points(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn heat_thresholds_match_feed_contract() {
        assert_eq!(funding_class(12.0), Heat::Hot);
        assert_eq!(funding_class(10.0), Heat::Neu);
        assert_eq!(funding_class(8.0), Heat::Cool);
        assert_eq!(funding_class(f64::NAN), Heat::Neu);

        assert_eq!(premium_class(0.15), Heat::Hot);
        assert_eq!(premium_class(0.0), Heat::Neu);
        assert_eq!(premium_class(-0.10), Heat::Cool);
    }

    #[test]
    fn gauge_texts() {
        assert_eq!(score_text(Some(0.71)), "71");
        assert_eq!(score_text(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(score_text(None), PLACEHOLDER);

        assert_eq!(contribution_bp(Some(0.0032)), "+0 bp");
        assert_eq!(contribution_bp(Some(0.25)), "+25 bp");
        assert_eq!(contribution_bp(Some(-0.18)), "-18 bp");
        assert_eq!(contribution_bp(None), PLACEHOLDER);
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(count(1_234_567.0), "1,234,567");
        assert_eq!(count(42.0), "42");
        assert_eq!(count(f64::NAN), PLACEHOLDER);
        assert_eq!(count(-5.0), PLACEHOLDER);
    }
}
