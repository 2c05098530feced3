use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::portfolio::holdings::HoldingSourceTrait;
use crate::portfolio::valuation::valuation_calculator::{compute_invested_series, compute_summary};
use crate::portfolio::valuation::{GrowthPoint, PortfolioSummary};
use crate::transactions::TransactionSourceTrait;

/// Trait for the valuation service.
pub trait ValuationServiceTrait: Send + Sync {
    /// Cumulative invested-capital series for the caller's ledger.
    fn get_invested_series(&self) -> Result<Vec<GrowthPoint>>;

    /// Headline totals across ledger and holdings.
    fn get_summary(&self) -> Result<PortfolioSummary>;
}

/// Service computing invested series and summary totals over the
/// external transaction and holdings sources.
pub struct ValuationService {
    transaction_source: Arc<dyn TransactionSourceTrait>,
    holding_source: Arc<dyn HoldingSourceTrait>,
}

impl ValuationService {
    pub fn new(
        transaction_source: Arc<dyn TransactionSourceTrait>,
        holding_source: Arc<dyn HoldingSourceTrait>,
    ) -> Self {
        Self {
            transaction_source,
            holding_source,
        }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn get_invested_series(&self) -> Result<Vec<GrowthPoint>> {
        let transactions = self.transaction_source.get_transactions()?;
        debug!(
            "Building invested series from {} transactions",
            transactions.len()
        );
        Ok(compute_invested_series(&transactions))
    }

    fn get_summary(&self) -> Result<PortfolioSummary> {
        let transactions = self.transaction_source.get_transactions()?;
        let holdings = self.holding_source.get_holdings()?;
        debug!(
            "Computing summary from {} transactions and {} holdings",
            transactions.len(),
            holdings.len()
        );
        Ok(compute_summary(&transactions, &holdings))
    }
}
