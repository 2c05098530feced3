use std::collections::BTreeMap;

use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::portfolio::holdings::AssetHolding;
use crate::portfolio::valuation::{GrowthPoint, PortfolioSummary};
use crate::transactions::{Transaction, TransactionType};

/// Builds the cumulative invested-capital series from an unordered ledger.
///
/// Transactions are replayed in `(txn_date, id)` order. Buys and SIP
/// installments deploy `gross + fees`; sells return `gross - fees`; income
/// types (dividend, coupon, interest) leave the cumulative untouched.
/// Multiple transactions on one date collapse into a single point carrying
/// the cumulative after the last of them, so same-day churn does not show
/// up as a ramp.
pub fn compute_invested_series(transactions: &[Transaction]) -> Vec<GrowthPoint> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.sort_key());

    let mut cumulative = Decimal::zero();
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for txn in sorted {
        let gross = txn.gross();
        match txn.txn_type {
            TransactionType::Buy | TransactionType::Sip => cumulative += gross + txn.fees,
            TransactionType::Sell => cumulative -= gross - txn.fees,
            // Income types: tracked outside this engine, not capital
            _ => {}
        }
        by_date.insert(txn.txn_date, cumulative);
    }

    by_date
        .into_iter()
        .map(|(date, value)| GrowthPoint { date, value })
        .collect()
}

/// Net invested capital after the whole ledger; zero for an empty one.
pub fn compute_invested_total(transactions: &[Transaction]) -> Decimal {
    compute_invested_series(transactions)
        .last()
        .map(|p| p.value)
        .unwrap_or_else(Decimal::zero)
}

/// Headline totals over the ledger and current holdings.
pub fn compute_summary(
    transactions: &[Transaction],
    holdings: &[AssetHolding],
) -> PortfolioSummary {
    let invested = compute_invested_total(transactions);
    let value: Decimal = holdings
        .iter()
        .filter_map(AssetHolding::valuation_value)
        .sum();
    let pnl = value - invested;
    let pnl_pct = if invested > Decimal::zero() {
        Some((pnl / invested * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION))
    } else {
        None
    };

    PortfolioSummary {
        invested,
        value,
        pnl,
        pnl_pct,
    }
}
