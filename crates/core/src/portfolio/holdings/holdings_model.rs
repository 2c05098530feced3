//! Holding domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated position in one asset, as supplied by the holdings source.
///
/// Derived data: recomputed on every aggregation call and never mutated in
/// place. Valuation fields are optional because sources routinely omit or
/// garble them; a holding with no usable valuation simply contributes
/// nothing to totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetHolding {
    #[serde(alias = "asset_type", alias = "type")]
    pub asset_type: String,
    #[serde(default, alias = "current_value", with = "optional_decimal_format")]
    pub current_value: Option<Decimal>,
    #[serde(default, alias = "avg_cost", with = "optional_decimal_format")]
    pub avg_cost: Option<Decimal>,
    #[serde(default, alias = "net_qty", with = "optional_decimal_format")]
    pub net_qty: Option<Decimal>,
}

impl AssetHolding {
    /// Value used for allocation and summary math.
    ///
    /// Prefers a positive marked value, falls back to cost basis
    /// (`avg_cost * net_qty`) when that is positive, and returns `None`
    /// when neither is usable.
    pub fn valuation_value(&self) -> Option<Decimal> {
        if let Some(v) = self.current_value {
            if v > Decimal::ZERO {
                return Some(v);
            }
        }
        match (self.avg_cost, self.net_qty) {
            (Some(cost), Some(qty)) => {
                let invested = cost * qty;
                (invested > Decimal::ZERO).then_some(invested)
            }
            _ => None,
        }
    }
}

/// Serde helper for optional money fields: accepts a JSON number, a
/// numeric string, or null; unparseable values become `None` rather than
/// failing the record.
pub(crate) mod optional_decimal_format {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&d.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(f64),
            String(String),
        }

        match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) if n.is_finite() => Ok(Decimal::try_from(n).ok()),
            Some(NumberOrString::Number(_)) => Ok(None),
            Some(NumberOrString::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                Ok(Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .ok())
            }
            None => Ok(None),
        }
    }
}
