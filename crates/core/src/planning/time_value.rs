//! Compound-growth formulas.
//!
//! All functions are pure and total: non-positive or non-finite input
//! produces 0, never a panic and never NaN or infinity. Every division has
//! an explicit near-zero branch.

use crate::constants::NEAR_ZERO_RATE;

/// Future value of a fixed monthly contribution (annuity-due):
/// `FV = P * [((1+i)^n - 1) / i] * (1+i)` with `i` the monthly rate and
/// `n` the number of installments. At `i = 0` the formula degenerates to
/// `P * n`.
pub fn sip_future_value(monthly_amount: f64, annual_rate_pct: f64, years: f64) -> f64 {
    if !(monthly_amount > 0.0) || !(years > 0.0) || !annual_rate_pct.is_finite() {
        return 0.0;
    }

    let i = annual_rate_pct / 100.0 / 12.0;
    let n = years * 12.0;
    let fv = if i.abs() < NEAR_ZERO_RATE {
        monthly_amount * n
    } else {
        monthly_amount * (((1.0 + i).powf(n) - 1.0) / i) * (1.0 + i)
    };

    if fv.is_finite() {
        fv
    } else {
        0.0
    }
}

/// Lumpsum future value `FV = P * (1 + r)^n`.
pub fn lumpsum_future_value(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    if !(principal > 0.0) || !(years > 0.0) || !annual_rate_pct.is_finite() {
        return 0.0;
    }

    let r = annual_rate_pct / 100.0;
    let fv = principal * (1.0 + r).powf(years);

    if fv.is_finite() {
        fv
    } else {
        0.0
    }
}

/// Monthly contribution needed to reach `target_amount`: the SIP formula
/// solved for `P`. The near-zero-rate branch divides by the installment
/// count instead of the monthly rate.
pub fn required_monthly_sip(target_amount: f64, annual_rate_pct: f64, years: f64) -> f64 {
    if !(target_amount > 0.0) || !(years > 0.0) || !annual_rate_pct.is_finite() {
        return 0.0;
    }

    let n = years * 12.0;
    let i = annual_rate_pct / 100.0 / 12.0;
    let sip = if i.abs() < NEAR_ZERO_RATE {
        target_amount / n
    } else {
        let factor = ((1.0 + i).powf(n) - 1.0) / i * (1.0 + i);
        target_amount / factor
    };

    if sip.is_finite() {
        sip
    } else {
        0.0
    }
}
