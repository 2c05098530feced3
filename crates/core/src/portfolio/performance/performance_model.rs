use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::valuation::GrowthPoint;

/// Manually supplied start/end index values for one benchmark. The engine
/// never fetches live index data; these two scalars are all it gets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkQuote {
    pub label: String,
    pub start: Decimal,
    pub end: Decimal,
}

/// One benchmark rendered onto the portfolio's date axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkLine {
    pub label: String,
    /// Base-100 index values, one per portfolio series date.
    pub values: Vec<Decimal>,
    pub return_pct: Option<Decimal>,
}

/// Portfolio-vs-benchmark return delta. `None` means the delta could not
/// be computed, which is distinct from an outperformance of zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDelta {
    pub label: String,
    pub benchmark_return_pct: Option<Decimal>,
    pub outperformance_pct: Option<Decimal>,
}

/// Headline numbers for the comparison view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub invested_start: Decimal,
    pub invested_end: Decimal,
    pub portfolio_return_pct: Option<Decimal>,
    pub outperformance: Vec<BenchmarkDelta>,
}

/// Everything the comparison view needs: the rebased portfolio series,
/// one line per benchmark on the same axis, and the return stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketComparison {
    pub growth: Vec<GrowthPoint>,
    pub benchmarks: Vec<BenchmarkLine>,
    pub stats: Option<ComparisonStats>,
}
