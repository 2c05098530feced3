//! Property-based integration tests for the analytics engine.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use fintrack_core::planning::{lumpsum_future_value, required_monthly_sip, sip_future_value};
use fintrack_core::portfolio::performance::{interpolate_two_point, normalize_to_base_100};
use fintrack_core::portfolio::valuation::compute_invested_series;
use fintrack_core::portfolio::GrowthPoint;
use fintrack_core::recommendation::{risk_profile, RiskLevel};
use fintrack_core::transactions::{Transaction, TransactionType};

// =============================================================================
// Generators
// =============================================================================

/// Generates a random risk level.
fn arb_risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
    ]
}

/// Generates a random transaction type.
fn arb_txn_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Buy),
        Just(TransactionType::Sell),
        Just(TransactionType::Sip),
        Just(TransactionType::Dividend),
        Just(TransactionType::Coupon),
        Just(TransactionType::Interest),
    ]
}

/// Generates a ledger of up to `max_len` transactions with distinct,
/// insertion-ordered ids, integral money fields, and dates within 2024.
fn arb_ledger(max_len: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(
        (arb_txn_type(), 0u32..365, 0u32..1000, 0u32..10_000, 0u32..100),
        0..=max_len,
    )
    .prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(index, (txn_type, day_offset, quantity, price, fees))| Transaction {
                id: index as i64 + 1,
                asset_id: 1,
                txn_type,
                txn_date: base + chrono::Duration::days(day_offset as i64),
                quantity: Decimal::from(quantity),
                price: Decimal::from(price),
                fees: Decimal::from(fees),
                notes: None,
            })
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property: required SIP round-trips through the future value**
    ///
    /// Feeding the solved monthly SIP back into the future-value formula
    /// must reproduce the target within floating-point tolerance, at any
    /// rate including zero.
    #[test]
    fn prop_required_sip_round_trips(
        target in 1_000.0f64..1e9,
        rate in 0.0f64..30.0,
        years in 1.0f64..40.0,
    ) {
        let sip = required_monthly_sip(target, rate, years);
        prop_assert!(sip > 0.0);

        let fv = sip_future_value(sip, rate, years);
        prop_assert!(
            (fv - target).abs() <= 1e-6 * target,
            "target = {}, reproduced = {}", target, fv
        );
    }

    /// **Property: zero rate makes the lumpsum an identity**
    #[test]
    fn prop_lumpsum_zero_rate_identity(
        principal in 1.0f64..1e9,
        years in 1.0f64..50.0,
    ) {
        prop_assert_eq!(lumpsum_future_value(principal, 0.0, years), principal);
    }

    /// **Property: non-positive projection inputs always produce 0**
    #[test]
    fn prop_non_positive_inputs_yield_zero(
        amount in -1e6f64..=0.0,
        rate in -50.0f64..50.0,
        years in -50.0f64..=0.0,
    ) {
        prop_assert_eq!(sip_future_value(amount, rate, 10.0), 0.0);
        prop_assert_eq!(sip_future_value(5_000.0, rate, years), 0.0);
        prop_assert_eq!(lumpsum_future_value(amount, rate, 10.0), 0.0);
        prop_assert_eq!(required_monthly_sip(amount, rate, 10.0), 0.0);
    }

    /// **Property: every risk profile allocation sums to exactly 100**
    #[test]
    fn prop_allocation_sums_to_100(risk in arb_risk()) {
        prop_assert_eq!(risk_profile(risk).allocation.total(), 100);
    }

    /// **Property: the invested series is independent of input order**
    ///
    /// The ledger contract orders by `(txn_date, id)`, so permuting the
    /// input must not change the series.
    #[test]
    fn prop_invested_series_is_order_independent(
        ledger in arb_ledger(20),
        rotation in 0usize..20,
    ) {
        let mut permuted = ledger.clone();
        permuted.reverse();
        if !permuted.is_empty() {
            let len = permuted.len();
            permuted.rotate_left(rotation % len);
        }

        prop_assert_eq!(
            compute_invested_series(&ledger),
            compute_invested_series(&permuted)
        );
    }

    /// **Property: the invested series has strictly increasing dates and
    /// one point per distinct date**
    #[test]
    fn prop_invested_series_dates_are_strictly_increasing(ledger in arb_ledger(20)) {
        let series = compute_invested_series(&ledger);

        for window in series.windows(2) {
            prop_assert!(window[0].date < window[1].date);
        }

        let distinct_dates: std::collections::HashSet<_> =
            ledger.iter().map(|t| t.txn_date).collect();
        prop_assert_eq!(series.len(), distinct_dates.len());
    }

    /// **Property: a normalized series always starts at 100**
    #[test]
    fn prop_normalized_series_starts_at_100(
        values in proptest::collection::vec(1u32..1_000_000, 1..30),
    ) {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series: Vec<GrowthPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GrowthPoint {
                date: base + chrono::Duration::days(index as i64),
                value: Decimal::from(*value),
            })
            .collect();

        let normalized = normalize_to_base_100(&series);
        prop_assert_eq!(normalized.len(), series.len());
        prop_assert_eq!(normalized[0].value, Decimal::ONE_HUNDRED);
    }

    /// **Property: interpolation has the requested length and inclusive
    /// endpoints**
    #[test]
    fn prop_interpolation_length_and_endpoints(
        start in 0i64..1_000_000,
        end in 0i64..1_000_000,
        count in 2usize..200,
    ) {
        let start = Decimal::from(start);
        let end = Decimal::from(end);
        let values = interpolate_two_point(start, end, count);

        prop_assert_eq!(values.len(), count);
        prop_assert_eq!(values[0], start);
        prop_assert_eq!(values[count - 1], end);
    }
}
