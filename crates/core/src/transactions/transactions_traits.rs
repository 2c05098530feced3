use crate::errors::Result;
use crate::transactions::Transaction;

/// Seam to the external persistence layer that owns transaction CRUD.
///
/// The engine never fetches data itself; callers hand it a source per
/// authenticated user. Records may come back in any order - the engine
/// re-sorts by `(txn_date, id)` wherever ordering matters.
pub trait TransactionSourceTrait: Send + Sync {
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
}
