//! Transactions module - ledger entry models, constants, and the source trait.

mod transactions_constants;
mod transactions_model;
mod transactions_traits;


pub use transactions_constants::*;
pub use transactions_model::{parse_decimal_string_tolerant, Transaction, TransactionType};
pub use transactions_traits::TransactionSourceTrait;
