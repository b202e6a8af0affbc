//! Fixed configuration: retrieval targets and the driver display table.

/// Snapshot document endpoint, relative to the page origin.
pub const SNAPSHOT_URL: &str = "data/latest.json";
/// Long-run history endpoint.
pub const HISTORY_URL: &str = "data/history.json";
/// Companion tabular export linked from the trend panel. Referenced by URL
/// only, never parsed.
pub const HISTORY_CSV_URL: &str = "data/history.csv";

/// Driver kinds, one per detail-block shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Flows,
    Liquidity,
    Issuance,
    Leverage,
    Onchain,
}

/// One row of the display table.
#[derive(Debug, Clone, Copy)]
pub struct DriverSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: DriverKind,
}

/// Display order is significant and shared by the gauge and contribution
/// views. Presence in a given snapshot is data-dependent.
pub const DRIVERS: [DriverSpec; 5] = [
    DriverSpec {
        key: "etf_flows",
        label: "ETF Net Flows",
        kind: DriverKind::Flows,
    },
    DriverSpec {
        key: "net_liquidity",
        label: "Global Net Liquidity",
        kind: DriverKind::Liquidity,
    },
    DriverSpec {
        key: "stablecoins",
        label: "Stablecoin Issuance",
        kind: DriverKind::Issuance,
    },
    DriverSpec {
        key: "term_structure",
        label: "Term Structure & Leverage",
        kind: DriverKind::Leverage,
    },
    DriverSpec {
        key: "onchain",
        label: "On-chain Value",
        kind: DriverKind::Onchain,
    },
];
