//! Allocation models for portfolio breakdown by asset type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the by-type allocation breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub asset_type: String,
    pub value: Decimal,
}
