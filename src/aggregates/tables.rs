use serde::Serialize;

use crate::types::{Amount, Hour, MonthBucket};

/// Sum of every amount within a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month: MonthBucket,
    pub total_amount: Amount
}

/// Number of transactions that happened within an hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    pub hour: Hour,
    pub count: usize
}

/// Sum of every amount recorded against a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityTotal {
    pub city: String,
    pub total_amount: Amount
}

/// Sum of the night and high-value amounts within a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NightHighTotal {
    pub month: MonthBucket,
    pub night_high_amount: Amount
}

/// The four grouped tables produced from a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTables {
    /// Ascending by month.
    pub monthly_totals: Vec<MonthlyTotal>,
    /// Always one row per hour, `0..24`, zero-filled.
    pub hourly_counts: Vec<HourlyCount>,
    /// Descending by total, equal totals in first-seen order.
    pub top_cities: Vec<CityTotal>,
    /// Ascending by month, only months with at least one qualifying record.
    pub night_high_by_month: Vec<NightHighTotal>
}
