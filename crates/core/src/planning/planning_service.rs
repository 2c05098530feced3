//! SIP projection and goal planning.

use log::debug;

use crate::errors::{Result, ValidationError};
use crate::planning::time_value::{lumpsum_future_value, required_monthly_sip, sip_future_value};
use crate::planning::{Goal, GoalPlan, SipProjection};
use crate::recommendation::risk_profile;

/// Projects a fixed monthly SIP to the end of the horizon.
///
/// Invalid inputs produce the all-zero projection rather than an error,
/// so forms can render a blank state without special-casing.
pub fn project_sip(monthly_amount: f64, annual_rate_pct: f64, years: f64) -> SipProjection {
    let future_value = sip_future_value(monthly_amount, annual_rate_pct, years);
    if future_value == 0.0 {
        return SipProjection::zero();
    }

    let invested = monthly_amount * years * 12.0;
    SipProjection {
        future_value,
        invested,
        gain: future_value - invested,
    }
}

/// Builds a plan for the goal under its risk profile's return band.
///
/// Fails with a field-naming validation error instead of returning a
/// partial plan.
pub fn plan_goal(goal: &Goal) -> Result<GoalPlan> {
    if !(goal.target_amount > 0.0) || !goal.target_amount.is_finite() {
        return Err(ValidationError::InvalidField {
            field: "targetAmount".to_string(),
            reason: "must be a positive amount".to_string(),
        }
        .into());
    }
    if !(goal.horizon_years > 0.0) || !goal.horizon_years.is_finite() {
        return Err(ValidationError::InvalidField {
            field: "horizonYears".to_string(),
            reason: "must be greater than zero".to_string(),
        }
        .into());
    }

    let profile = risk_profile(goal.risk);
    let band = profile.return_band;
    debug!(
        "Planning goal of {} over {} years at {:?} risk",
        goal.target_amount, goal.horizon_years, goal.risk
    );

    let sip_at_low_rate = required_monthly_sip(goal.target_amount, band.low, goal.horizon_years);
    let sip_at_high_rate = required_monthly_sip(goal.target_amount, band.high, goal.horizon_years);

    Ok(GoalPlan {
        allocation: profile.allocation,
        expected_return_range: band,
        corpus_low: lumpsum_future_value(goal.target_amount, band.low, goal.horizon_years),
        corpus_high: lumpsum_future_value(goal.target_amount, band.high, goal.horizon_years),
        sip_low: sip_at_low_rate.min(sip_at_high_rate),
        sip_high: sip_at_low_rate.max(sip_at_high_rate),
    })
}
