//! Portfolio valuation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of a date-keyed value series. Sequences are non-decreasing
/// in date order; values may rise or fall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Headline portfolio totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub invested: Decimal,
    pub value: Decimal,
    pub pnl: Decimal,
    /// `None` when nothing has been invested. A 0% here would read as
    /// "flat" rather than "no data", so the division is never faked.
    pub pnl_pct: Option<Decimal>,
}
