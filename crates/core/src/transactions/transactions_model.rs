//! Transaction domain models.

use crate::transactions::transactions_constants::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Helper function to parse a string into a Decimal,
/// with support for scientific notation.
///
/// Unparseable values fall back to zero so that one bad field does not
/// sink the whole record.
pub fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value_str) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Category of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
    Sip,
    Dividend,
    Coupon,
    Interest,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TXN_TYPE_BUY,
            TransactionType::Sell => TXN_TYPE_SELL,
            TransactionType::Sip => TXN_TYPE_SIP,
            TransactionType::Dividend => TXN_TYPE_DIVIDEND,
            TransactionType::Coupon => TXN_TYPE_COUPON,
            TransactionType::Interest => TXN_TYPE_INTEREST,
        }
    }

    /// Income types never move the invested cumulative.
    pub fn is_income(&self) -> bool {
        matches!(
            self,
            TransactionType::Dividend | TransactionType::Coupon | TransactionType::Interest
        )
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            TXN_TYPE_BUY => Ok(TransactionType::Buy),
            TXN_TYPE_SELL => Ok(TransactionType::Sell),
            TXN_TYPE_SIP => Ok(TransactionType::Sip),
            TXN_TYPE_DIVIDEND => Ok(TransactionType::Dividend),
            TXN_TYPE_COUPON => Ok(TransactionType::Coupon),
            TXN_TYPE_INTEREST => Ok(TransactionType::Interest),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ledger entry supplied by the external transaction source.
///
/// Immutable once created. The ordering key is `(txn_date, id)` ascending;
/// `id` breaks same-day ties and preserves insertion order. Source records
/// arrive with drifting field names, so the snake_case spellings are
/// accepted as aliases alongside the canonical camelCase ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(alias = "asset_id", alias = "asset")]
    pub asset_id: i64,
    #[serde(alias = "txn_type", alias = "type")]
    pub txn_type: TransactionType,
    #[serde(alias = "txn_date", alias = "date")]
    pub txn_date: NaiveDate,
    #[serde(default, with = "decimal_or_zero")]
    pub quantity: Decimal,
    #[serde(default, with = "decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, with = "decimal_or_zero")]
    pub fees: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Gross traded value before fees.
    pub fn gross(&self) -> Decimal {
        self.quantity * self.price
    }

    /// Ordering key per the ledger contract.
    pub fn sort_key(&self) -> (NaiveDate, i64) {
        (self.txn_date, self.id)
    }
}

/// Serde helper for required money fields: accepts a JSON number, a
/// numeric string, or null, and degrades anything unparseable (including
/// non-finite floats) to zero instead of failing the record.
pub(crate) mod decimal_or_zero {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Untagged enum handles both string and number representations
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(f64),
            String(String),
        }

        match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) if n.is_finite() => {
                Ok(Decimal::try_from(n).unwrap_or(Decimal::ZERO))
            }
            Some(NumberOrString::Number(_)) => Ok(Decimal::ZERO),
            Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(Decimal::ZERO),
            Some(NumberOrString::String(s)) => Ok(super::parse_decimal_string_tolerant(
                s.trim(),
                "decimal field",
            )),
            None => Ok(Decimal::ZERO),
        }
    }
}
