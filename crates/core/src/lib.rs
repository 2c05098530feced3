//! Fintrack Core - Investment planning and portfolio analytics engine.
//!
//! This crate contains the computation layer of the tracker: ledger
//! aggregation, growth-index normalization, time-value-of-money
//! projections, and risk-based recommendations. It performs no I/O and
//! holds no state between calls; persistence and transport belong to the
//! surrounding application and are reached through source traits.

pub mod constants;
pub mod errors;
pub mod planning;
pub mod portfolio;
pub mod recommendation;
pub mod transactions;

// Re-export common types from the portfolio modules
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
