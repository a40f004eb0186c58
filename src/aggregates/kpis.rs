use rust_decimal::{Decimal, RoundingStrategy};

use crate::aggregates::AggregateError;
use crate::types::Amount;

const UNDEFINED: &str = "undefined";

/// Scalar statistics over the whole ledger.
///
/// Median, mean and both percentages have no value for an empty ledger and are `None`
/// in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpis {
    pub record_count: usize,
    pub total_amount: Amount,
    pub median_amount: Option<Amount>,
    pub mean_amount: Option<Amount>,
    /// Share of records flagged night, in percent.
    pub night_pct: Option<Decimal>,
    /// Share of records flagged high-value, in percent.
    pub high_pct: Option<Decimal>
}

impl Kpis {
    /// Named, display-ready values in a fixed order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("record_count", self.record_count.to_string()),
            ("total_amount", self.total_amount.to_string()),
            ("median_amount", display_or_undefined(self.median_amount)),
            ("mean_amount", display_or_undefined(self.mean_amount)),
            ("night_pct", display_or_undefined(self.night_pct.map(round_percentage))),
            ("high_pct", display_or_undefined(self.high_pct.map(round_percentage))),
        ]
    }
}

pub(crate) fn median(amounts: &mut [Amount]) -> Result<Option<Amount>, AggregateError> {
    if amounts.is_empty() {
        return Ok(None);
    }

    amounts.sort_unstable();
    let middle = amounts.len() / 2;

    if amounts.len() % 2 == 1 {
        return Ok(Some(amounts[middle]));
    }

    let sum = amounts[middle - 1].checked_add(amounts[middle])
        .ok_or_else(|| AggregateError::overflow("median"))?;

    Ok(Some(Amount::new(sum.value() / Decimal::TWO)))
}

pub(crate) fn mean(total: Amount, count: usize) -> Option<Amount> {
    total.value().checked_div(Decimal::from(count as u64)).map(Amount::new)
}

pub(crate) fn percentage(flagged: usize, count: usize) -> Option<Decimal> {
    if count == 0 {
        return None;
    }

    Some(Decimal::from(flagged as u64) * Decimal::ONE_HUNDRED / Decimal::from(count as u64))
}

fn round_percentage(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn display_or_undefined<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_else(|| UNDEFINED.to_string())
}
