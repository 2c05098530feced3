//! Risk policy table
//!
//! Fixed allocation splits and nominal return bands per risk level, plus
//! the curated India-market suggestion lists the recommendation surfaces.
//! The bands match the ones the goal planner quotes.

use crate::planning::ReturnRange;
use crate::recommendation::recommendation_model::{AssetAllocation, RiskLevel};

/// Everything the engine derives from a risk level.
#[derive(Debug, Clone, Copy)]
pub struct RiskProfile {
    pub allocation: AssetAllocation,
    pub return_band: ReturnRange,
    pub stocks: &'static [&'static str],
    pub mutual_funds: &'static [&'static str],
}

/// Debt-heavy, capital-preservation posture.
pub const LOW_RISK_PROFILE: RiskProfile = RiskProfile {
    allocation: AssetAllocation {
        equity: 20,
        debt: 70,
        gold: 10,
    },
    return_band: ReturnRange {
        low: 6.0,
        high: 8.0,
    },
    stocks: &["HDFC Bank", "ITC", "Hindustan Unilever"],
    mutual_funds: &[
        "HDFC Short Term Debt Fund",
        "ICICI Prudential Corporate Bond Fund",
        "SBI Conservative Hybrid Fund",
    ],
};

/// Balanced growth posture.
pub const MEDIUM_RISK_PROFILE: RiskProfile = RiskProfile {
    allocation: AssetAllocation {
        equity: 55,
        debt: 35,
        gold: 10,
    },
    return_band: ReturnRange {
        low: 10.0,
        high: 12.0,
    },
    stocks: &[
        "Reliance Industries",
        "Infosys",
        "ICICI Bank",
        "Larsen & Toubro",
    ],
    mutual_funds: &[
        "HDFC Index Fund Nifty 50 Plan",
        "ICICI Prudential Balanced Advantage Fund",
        "Parag Parikh Flexi Cap Fund",
    ],
};

/// Equity-heavy, long-horizon posture.
pub const HIGH_RISK_PROFILE: RiskProfile = RiskProfile {
    allocation: AssetAllocation {
        equity: 75,
        debt: 15,
        gold: 10,
    },
    return_band: ReturnRange {
        low: 12.0,
        high: 15.0,
    },
    stocks: &[
        "Tata Motors",
        "Bajaj Finance",
        "Dixon Technologies",
        "Zomato",
    ],
    mutual_funds: &[
        "Nippon India Small Cap Fund",
        "Quant Mid Cap Fund",
        "Motilal Oswal Midcap Fund",
    ],
};

/// Disclaimer attached to every recommendation.
pub const RECOMMENDATION_NOTE: &str = "Returns are indicative and not guaranteed.";

/// Resolves the fixed profile for a risk level.
pub fn risk_profile(risk: RiskLevel) -> &'static RiskProfile {
    match risk {
        RiskLevel::Low => &LOW_RISK_PROFILE,
        RiskLevel::Medium => &MEDIUM_RISK_PROFILE,
        RiskLevel::High => &HIGH_RISK_PROFILE,
    }
}
