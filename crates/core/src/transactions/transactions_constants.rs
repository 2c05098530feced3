/// Transaction types
///
/// Each constant names one of the supported ledger entry categories.

/// Purchase of an asset. Deploys capital: gross cost plus fees.
pub const TXN_TYPE_BUY: &str = "BUY";

/// Disposal of an asset. Returns capital: gross proceeds net of fees.
pub const TXN_TYPE_SELL: &str = "SELL";

/// Systematic investment plan installment. Deploys capital like a buy.
pub const TXN_TYPE_SIP: &str = "SIP";

/// Cash dividend received on a holding. Income, not capital deployment.
pub const TXN_TYPE_DIVIDEND: &str = "DIVIDEND";

/// Bond coupon received. Income, not capital deployment.
pub const TXN_TYPE_COUPON: &str = "COUPON";

/// Interest earned on a fixed-income position. Income, not capital deployment.
pub const TXN_TYPE_INTEREST: &str = "INTEREST";

/// Types that deploy or return invested capital.
pub const CAPITAL_TXN_TYPES: [&str; 3] = [TXN_TYPE_BUY, TXN_TYPE_SIP, TXN_TYPE_SELL];

/// Types that represent income on existing positions. They never move the
/// invested cumulative; income is tracked outside this engine.
pub const INCOME_TXN_TYPES: [&str; 3] = [TXN_TYPE_DIVIDEND, TXN_TYPE_COUPON, TXN_TYPE_INTEREST];

/// Checks if a transaction type is an income type.
pub fn is_income_txn(txn_type: &str) -> bool {
    INCOME_TXN_TYPES.contains(&txn_type)
}
