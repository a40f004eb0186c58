use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::aggregates::kpis::{mean, median, percentage};
use crate::aggregates::{AggregateError, CityTotal, HourlyCount, Kpis, MonthlyTotal, NightHighTotal, SummaryTables};
use crate::models::Transaction;
use crate::types::{Amount, Hour, MonthBucket, HOURS_PER_DAY};

pub const DEFAULT_TOP_CITIES: usize = 5;

/// Everything computed from one ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub kpis: Kpis,
    pub tables: SummaryTables
}

/// Computes KPIs and grouped tables over a full ledger in a single pass.
#[derive(Debug, Clone)]
pub struct Aggregator {
    top_cities_limit: usize
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            top_cities_limit: DEFAULT_TOP_CITIES
        }
    }
}

impl Aggregator {
    /// Caps the number of rows kept in the city ranking.
    pub fn with_top_cities_limit(mut self, limit: usize) -> Self {
        self.top_cities_limit = limit;
        self
    }

    /// Aggregates the ledger.
    ///
    /// An empty ledger is valid: the hourly table still has 24 zero rows, the other tables
    /// are empty, and the KPIs without a defined value are `None`.
    ///
    /// # Errors
    /// Returns `AggregateError::Overflow` if a sum exceeds the decimal range.
    pub fn aggregate(&self, transactions: &[Transaction]) -> Result<LedgerSummary, AggregateError> {
        let mut total = Amount::ZERO;
        let mut night_count = 0;
        let mut high_count = 0;
        let mut amounts = Vec::with_capacity(transactions.len());
        let mut hourly = [0usize; HOURS_PER_DAY];
        let mut monthly = BTreeMap::<MonthBucket, Amount>::new();
        let mut night_high = BTreeMap::<MonthBucket, Amount>::new();
        let mut cities = CityTotals::default();

        for transaction in transactions {
            let features = transaction.features();
            let amount = transaction.amount;

            total = total.checked_add(amount).ok_or_else(|| AggregateError::overflow("total"))?;
            amounts.push(amount);
            hourly[features.hour as usize] += 1;
            accumulate(monthly.entry(features.month).or_default(), amount, features.month)?;
            cities.add(&transaction.city, amount)?;

            if features.is_night {
                night_count += 1;
            }

            if features.is_high {
                high_count += 1;
            }

            if features.is_night_high {
                accumulate(night_high.entry(features.month).or_default(), amount, features.month)?;
            }
        }

        let record_count = transactions.len();
        let kpis = Kpis {
            record_count,
            total_amount: total,
            median_amount: median(&mut amounts)?,
            mean_amount: mean(total, record_count),
            night_pct: percentage(night_count, record_count),
            high_pct: percentage(high_count, record_count)
        };

        let tables = SummaryTables {
            monthly_totals: monthly.into_iter()
                .map(|(month, total_amount)| MonthlyTotal { month, total_amount })
                .collect(),
            hourly_counts: hourly.iter().enumerate()
                .map(|(hour, count)| HourlyCount { hour: hour as Hour, count: *count })
                .collect(),
            top_cities: cities.ranked(self.top_cities_limit),
            night_high_by_month: night_high.into_iter()
                .map(|(month, night_high_amount)| NightHighTotal { month, night_high_amount })
                .collect()
        };

        info!(
            "Aggregated {} rows: total [{}], {} months, {} night+high months",
            record_count,
            kpis.total_amount,
            tables.monthly_totals.len(),
            tables.night_high_by_month.len()
        );

        Ok(LedgerSummary { kpis, tables })
    }
}

fn accumulate(slot: &mut Amount, amount: Amount, bucket: impl ToString) -> Result<(), AggregateError> {
    *slot = slot.checked_add(amount).ok_or_else(|| AggregateError::overflow(bucket))?;
    Ok(())
}

/// Per-city sums kept in first-seen order, so that the stable ranking sort breaks ties by
/// encounter order.
#[derive(Default)]
struct CityTotals {
    index: HashMap<String, usize>,
    totals: Vec<CityTotal>
}

impl CityTotals {
    fn add(&mut self, city: &str, amount: Amount) -> Result<(), AggregateError> {
        let position = match self.index.get(city) {
            Some(position) => *position,
            None => {
                self.index.insert(city.to_string(), self.totals.len());
                self.totals.push(CityTotal {
                    city: city.to_string(),
                    total_amount: Amount::ZERO
                });
                self.totals.len() - 1
            }
        };

        accumulate(&mut self.totals[position].total_amount, amount, city)
    }

    fn ranked(mut self, limit: usize) -> Vec<CityTotal> {
        debug!("Ranking {} distinct cities, keeping {}", self.totals.len(), limit);

        self.totals.sort_by(|left, right| right.total_amount.cmp(&left.total_amount));
        self.totals.truncate(limit);
        self.totals
    }
}
