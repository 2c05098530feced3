//! Holdings module - derived position models and the source trait.

mod holdings_model;
mod holdings_traits;

pub use holdings_model::AssetHolding;
pub use holdings_traits::HoldingSourceTrait;
