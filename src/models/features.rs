use chrono::Timelike;
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::{Amount, Hour, MonthBucket};

/// Amounts strictly above this are high-value.
pub const HIGH_VALUE_THRESHOLD: i64 = 200_000;
/// Hours before this one are night.
pub const NIGHT_END_HOUR: Hour = 6;
/// Hours after this one are night.
pub const NIGHT_START_HOUR: Hour = 22;

/// Fields derived from a [`Transaction`].
///
/// Derivation is pure: the same record always yields the same features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Wall-clock hour of `txn_time`.
    pub hour: Hour,
    /// Calendar month of `txn_time`.
    pub month: MonthBucket,
    pub is_night: bool,
    pub is_high: bool,
    /// Both night and high-value, the combined risk flag.
    pub is_night_high: bool
}

impl Features {
    pub fn derive(transaction: &Transaction) -> Self {
        let hour = transaction.txn_time.hour() as Hour;
        let is_night = is_night_hour(hour);
        let is_high = is_high_value(transaction.amount);

        Self {
            hour,
            month: MonthBucket::of(&transaction.txn_time),
            is_night,
            is_high,
            is_night_high: is_night && is_high
        }
    }
}

pub fn is_night_hour(hour: Hour) -> bool {
    hour < NIGHT_END_HOUR || hour > NIGHT_START_HOUR
}

pub fn is_high_value(amount: Amount) -> bool {
    amount.value() > Decimal::from(HIGH_VALUE_THRESHOLD)
}
