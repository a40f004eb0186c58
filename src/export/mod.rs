mod csv_exporter;
mod errors;
#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::aggregates::{CityTotal, HourlyCount, MonthlyTotal, NightHighTotal};

pub use csv_exporter::Exporter;
#[cfg(test)]
pub use csv_exporter::{HOURLY_COUNTS_FILE, MONTHLY_TOTALS_FILE, NIGHT_HIGH_BY_MONTH_FILE, TOP_CITIES_FILE};
pub use errors::ExportError;

/// A row of a summary table that can be written as a line of delimited text.
///
/// The header names the serialized fields in order.
pub trait TableRow: Serialize {
    const HEADER: &'static [&'static str];
}

impl TableRow for MonthlyTotal {
    const HEADER: &'static [&'static str] = &["month", "total_amount"];
}

impl TableRow for HourlyCount {
    const HEADER: &'static [&'static str] = &["hour", "count"];
}

impl TableRow for CityTotal {
    const HEADER: &'static [&'static str] = &["city", "total_amount"];
}

impl TableRow for NightHighTotal {
    const HEADER: &'static [&'static str] = &["month", "night_high_amount"];
}
