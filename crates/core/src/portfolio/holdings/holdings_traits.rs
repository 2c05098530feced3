use crate::errors::Result;
use crate::portfolio::holdings::AssetHolding;

/// Seam to the external layer that derives holdings from persisted
/// positions. The engine consumes the records as-is.
pub trait HoldingSourceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<AssetHolding>>;
}
