use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer};

use crate::models::Features;
use crate::types::Amount;

/// Layout of the `txn_time` column, e.g. `15-01-2024 02:00`.
pub const TXN_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Represents a single row from the input ledger.
///
/// Records are immutable once loaded. The timestamp is kept as wall-clock time, no
/// timezone is attached or assumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The value moved by the transaction.
    pub amount: Amount,
    /// When the transaction happened, at minute precision.
    #[serde(deserialize_with = "deserialize_txn_time")]
    pub txn_time: NaiveDateTime,
    /// Free-text location label, trimmed.
    #[serde(deserialize_with = "deserialize_city")]
    pub city: String
}

impl Transaction {
    #[cfg(test)]
    pub fn new(amount: Amount, txn_time: NaiveDateTime, city: &str) -> Self {
        Self {
            amount,
            txn_time,
            city: city.trim().to_string()
        }
    }

    pub fn features(&self) -> Features {
        Features::derive(self)
    }
}

pub fn parse_txn_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TXN_TIME_FORMAT)
}

fn deserialize_txn_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if value.trim() != value {
        return Err(de::Error::custom(format!("txn_time '{value}' has surrounding whitespace")));
    }

    parse_txn_time(&value).map_err(|error| {
        de::Error::custom(format!("txn_time '{value}' does not match {TXN_TIME_FORMAT}: {error}"))
    })
}

fn deserialize_city<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|city| city.trim().to_string())
}
