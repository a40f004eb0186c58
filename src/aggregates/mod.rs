mod aggregator;
mod errors;
mod kpis;
mod tables;

pub use aggregator::{Aggregator, LedgerSummary, DEFAULT_TOP_CITIES};
pub use errors::AggregateError;
pub use kpis::Kpis;
pub use tables::{CityTotal, HourlyCount, MonthlyTotal, NightHighTotal, SummaryTables};
