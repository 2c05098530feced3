//! Recommendation domain models.

use serde::{Deserialize, Serialize};

use crate::planning::ReturnRange;

/// Risk appetite declared by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Which instrument families the caller wants suggestions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    #[serde(rename = "STOCK")]
    Stock,
    #[serde(rename = "MF")]
    MutualFund,
    #[serde(rename = "BOTH")]
    Both,
}

/// Target split across asset classes, in whole percentage points.
/// Always sums to 100 by construction of the risk profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub equity: u8,
    pub debt: u8,
    pub gold: u8,
}

impl AssetAllocation {
    pub fn total(&self) -> u16 {
        self.equity as u16 + self.debt as u16 + self.gold as u16
    }
}

/// One recommendation request. Ephemeral, validated as a whole before any
/// computation happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub risk: RiskLevel,
    #[serde(alias = "horizon_years", alias = "horizon")]
    pub horizon_years: f64,
    pub amount: f64,
    #[serde(alias = "instrument_type", alias = "type")]
    pub instrument_type: InstrumentType,
}

/// Corpus projection at the band's low, mid, and high rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusRange {
    pub low_fv: f64,
    pub mid_fv: f64,
    pub high_fv: f64,
}

/// A complete recommendation. Never partial: validation failures produce
/// no result at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub allocation: AssetAllocation,
    /// Display form of the band, e.g. "10% – 12%".
    pub expected_return: String,
    pub expected_return_range: ReturnRange,
    pub corpus_range: CorpusRange,
    /// Empty when the requested instrument type excludes the family;
    /// never omitted, so callers render "no suggestions" uniformly.
    pub stocks: Vec<String>,
    pub mutual_funds: Vec<String>,
    pub note: String,
}
