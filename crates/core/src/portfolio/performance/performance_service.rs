//! Benchmark comparison assembly.

use std::sync::Arc;

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::performance::growth_calculator::{
    interpolate_two_point, normalize_to_base_100, percent_change,
};
use crate::portfolio::performance::{
    BenchmarkDelta, BenchmarkLine, BenchmarkQuote, ComparisonStats, MarketComparison,
};
use crate::portfolio::valuation::valuation_calculator::compute_invested_series;
use crate::transactions::{Transaction, TransactionSourceTrait};

/// Builds the portfolio-vs-benchmark view: the invested series rebased to
/// 100 plus one straight line per benchmark on the same date axis.
///
/// Benchmarks arrive as two manual index values; their end point is scaled
/// to `end / start * 100` and drawn linearly across the portfolio's dates.
/// A benchmark with a zero start stays flat at the base index and reports
/// no return. An unusable ledger produces an empty comparison, not an
/// error.
pub fn compare_with_benchmarks(
    transactions: &[Transaction],
    benchmarks: &[BenchmarkQuote],
) -> MarketComparison {
    let invested = compute_invested_series(transactions);
    let growth = normalize_to_base_100(&invested);

    if growth.is_empty() {
        debug!("No usable invested series; benchmark comparison is empty");
        return MarketComparison {
            growth,
            benchmarks: Vec::new(),
            stats: None,
        };
    }

    let label_count = growth.len();
    let lines: Vec<BenchmarkLine> = benchmarks
        .iter()
        .map(|quote| {
            let end_index = if quote.start.is_zero() {
                Decimal::ONE_HUNDRED
            } else {
                quote.end / quote.start * Decimal::ONE_HUNDRED
            };
            BenchmarkLine {
                label: quote.label.clone(),
                values: interpolate_two_point(Decimal::ONE_HUNDRED, end_index, label_count),
                return_pct: percent_change(quote.start, quote.end),
            }
        })
        .collect();

    let invested_start = invested.first().map(|p| p.value).unwrap_or_else(Decimal::zero);
    let invested_end = invested.last().map(|p| p.value).unwrap_or_else(Decimal::zero);
    let portfolio_return_pct = percent_change(invested_start, invested_end);

    let outperformance = lines
        .iter()
        .map(|line| BenchmarkDelta {
            label: line.label.clone(),
            benchmark_return_pct: line.return_pct,
            outperformance_pct: match (portfolio_return_pct, line.return_pct) {
                (Some(portfolio), Some(benchmark)) => Some(portfolio - benchmark),
                _ => None,
            },
        })
        .collect();

    MarketComparison {
        growth,
        benchmarks: lines,
        stats: Some(ComparisonStats {
            invested_start,
            invested_end,
            portfolio_return_pct,
            outperformance,
        }),
    }
}

/// Trait for the performance service.
pub trait PerformanceServiceTrait: Send + Sync {
    fn compare_with_benchmarks(
        &self,
        benchmarks: &[BenchmarkQuote],
    ) -> Result<MarketComparison>;
}

/// Service assembling benchmark comparisons over the transaction source.
pub struct PerformanceService {
    transaction_source: Arc<dyn TransactionSourceTrait>,
}

impl PerformanceService {
    pub fn new(transaction_source: Arc<dyn TransactionSourceTrait>) -> Self {
        Self { transaction_source }
    }
}

impl PerformanceServiceTrait for PerformanceService {
    fn compare_with_benchmarks(
        &self,
        benchmarks: &[BenchmarkQuote],
    ) -> Result<MarketComparison> {
        let transactions = self.transaction_source.get_transactions()?;
        debug!(
            "Comparing {} transactions against {} benchmarks",
            transactions.len(),
            benchmarks.len()
        );
        Ok(compare_with_benchmarks(&transactions, benchmarks))
    }
}
