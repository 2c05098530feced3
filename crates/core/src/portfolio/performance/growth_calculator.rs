use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::portfolio::valuation::GrowthPoint;

/// Rebases a series so its first value equals 100.
///
/// Rebasing against a zero start is undefined, so an empty series or one
/// starting at zero comes back empty and the caller renders "no data".
pub fn normalize_to_base_100(series: &[GrowthPoint]) -> Vec<GrowthPoint> {
    let base = match series.first() {
        Some(point) if !point.value.is_zero() => point.value,
        _ => return Vec::new(),
    };

    series
        .iter()
        .map(|point| GrowthPoint {
            date: point.date,
            value: point.value / base * Decimal::ONE_HUNDRED,
        })
        .collect()
}

/// Linear interpolation from `start` to `end` across `label_count` evenly
/// spaced points, both ends inclusive. One label (or none) degenerates to
/// the start value, keeping the `n - 1` divisor away from zero.
pub fn interpolate_two_point(start: Decimal, end: Decimal, label_count: usize) -> Vec<Decimal> {
    match label_count {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let span = end - start;
            let last = Decimal::from(n as u64 - 1);
            (0..n)
                .map(|i| start + span * Decimal::from(i as u64) / last)
                .collect()
        }
    }
}

/// Percentage change from `start` to `end`; `None` when `start` is zero.
/// Downstream deltas must propagate the `None` rather than fabricate a
/// number.
pub fn percent_change(start: Decimal, end: Decimal) -> Option<Decimal> {
    if start.is_zero() {
        return None;
    }
    Some(((end - start) / start * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION))
}
