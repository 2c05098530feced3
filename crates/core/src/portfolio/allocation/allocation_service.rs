//! Service for computing portfolio allocations by asset type.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::portfolio::allocation::AllocationSlice;
use crate::portfolio::holdings::{AssetHolding, HoldingSourceTrait};

/// Trait for the allocation service.
pub trait AllocationServiceTrait: Send + Sync {
    /// Computes the by-type allocation for the caller's holdings.
    fn get_allocation(&self) -> Result<Vec<AllocationSlice>>;
}

/// Aggregates holdings into per-type totals.
///
/// Each holding contributes its valuation value (marked value, else cost
/// basis); holdings with no usable valuation are excluded rather than
/// erroring. Only strictly positive totals survive, sorted descending by
/// value so callers can render the slices as-is.
pub fn compute_allocation(holdings: &[AssetHolding]) -> Vec<AllocationSlice> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();

    for holding in holdings {
        if let Some(value) = holding.valuation_value() {
            *totals
                .entry(holding.asset_type.as_str())
                .or_insert(Decimal::ZERO) += value;
        }
    }

    let mut slices: Vec<AllocationSlice> = totals
        .into_iter()
        .filter(|(_, value)| *value > Decimal::ZERO)
        .map(|(asset_type, value)| AllocationSlice {
            asset_type: asset_type.to_string(),
            value,
        })
        .collect();

    // Sort by value descending
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Service computing by-type allocations over the holdings source.
pub struct AllocationService {
    holding_source: Arc<dyn HoldingSourceTrait>,
}

impl AllocationService {
    pub fn new(holding_source: Arc<dyn HoldingSourceTrait>) -> Self {
        Self { holding_source }
    }
}

impl AllocationServiceTrait for AllocationService {
    fn get_allocation(&self) -> Result<Vec<AllocationSlice>> {
        let holdings = self.holding_source.get_holdings()?;
        debug!("Computing allocation for {} holdings", holdings.len());
        Ok(compute_allocation(&holdings))
    }
}
