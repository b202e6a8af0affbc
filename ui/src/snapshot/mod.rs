//! Snapshot rendering subsystem: normalization, sparkline geometry,
//! tooltip interaction, and the composed driver views.

pub mod gauges;
pub mod normalize;
pub mod sparkline;
pub mod tooltip;
pub mod trend;

pub use gauges::{ContributionBars, DriverGauges};
pub use normalize::{normalize, RiskView};
pub use tooltip::{TooltipCtx, TooltipLayer};
pub use trend::TrendPanel;
