//! Planning domain models.

use serde::{Deserialize, Serialize};

use crate::planning::ReturnRange;
use crate::recommendation::{AssetAllocation, RiskLevel};

/// Outcome of a straight SIP projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipProjection {
    pub future_value: f64,
    pub invested: f64,
    pub gain: f64,
}

impl SipProjection {
    /// The sentinel for invalid inputs: no projection at all.
    pub fn zero() -> Self {
        SipProjection {
            future_value: 0.0,
            invested: 0.0,
            gain: 0.0,
        }
    }
}

/// A savings target to plan for. Ephemeral - constructed per calculation
/// request, never stored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(alias = "target_amount", alias = "target")]
    pub target_amount: f64,
    #[serde(alias = "horizon_years", alias = "years", alias = "horizon")]
    pub horizon_years: f64,
    pub risk: RiskLevel,
}

/// Plan for reaching a goal under the chosen risk profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub allocation: AssetAllocation,
    pub expected_return_range: ReturnRange,
    /// Corpus if the target amount were deployed as a lumpsum today,
    /// compounded at the band's low and high rates.
    pub corpus_low: f64,
    pub corpus_high: f64,
    /// Monthly SIP needed to reach the target; the low end assumes the
    /// band's high rate, the high end its low rate.
    pub sip_low: f64,
    pub sip_high: f64,
}
