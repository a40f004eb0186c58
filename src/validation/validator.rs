use tracing::{info, warn};

use crate::aggregates::LedgerSummary;
use crate::models::Transaction;
use crate::types::Amount;
use crate::validation::ValidationError;

/// How a failed self-check affects the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Mismatches are logged, the run still succeeds.
    #[default]
    Report,
    /// Any mismatch fails the run.
    Strict
}

/// Totals recomputed from the output tables next to the source values they must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub record_count: usize,
    pub hourly_count_sum: usize,
    pub monthly_total_sum: Amount,
    pub reported_total: Amount,
    pub raw_total: Amount,
    pub top_cities_sorted: bool
}

impl ValidationReport {
    pub fn counts_match(&self) -> bool {
        self.record_count == self.hourly_count_sum
    }

    pub fn totals_match(&self) -> bool {
        self.monthly_total_sum == self.raw_total && self.reported_total == self.raw_total
    }

    pub fn is_consistent(&self) -> bool {
        self.counts_match() && self.totals_match() && self.top_cities_sorted
    }

    fn mismatches(&self) -> Vec<String> {
        let mut mismatches = Vec::new();

        if !self.counts_match() {
            mismatches.push(format!("{} rows but hourly counts sum to {}", self.record_count, self.hourly_count_sum));
        }

        if !self.totals_match() {
            mismatches.push(format!(
                "monthly totals sum to {}, reported total is {}, raw amounts sum to {}",
                self.monthly_total_sum, self.reported_total, self.raw_total
            ));
        }

        if !self.top_cities_sorted {
            mismatches.push("top cities are not sorted by descending total".to_string());
        }

        mismatches
    }
}

/// Cross-checks a summary against the ledger it was computed from.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    mode: ValidationMode
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Recomputes the row count from the hourly table and the grand total both from the
    /// monthly table and from the raw amounts, then logs each comparison.
    ///
    /// # Errors
    /// In [`ValidationMode::Strict`], returns `ValidationError::Mismatch` when any comparison
    /// fails. Overflow while summing is reported in either mode.
    pub fn validate(&self, transactions: &[Transaction], summary: &LedgerSummary) -> Result<ValidationReport, ValidationError> {
        let tables = &summary.tables;

        let report = ValidationReport {
            record_count: transactions.len(),
            hourly_count_sum: tables.hourly_counts.iter().map(|row| row.count).sum(),
            monthly_total_sum: sum(tables.monthly_totals.iter().map(|row| row.total_amount))?,
            reported_total: summary.kpis.total_amount,
            raw_total: sum(transactions.iter().map(|transaction| transaction.amount))?,
            top_cities_sorted: tables.top_cities.windows(2)
                .all(|pair| pair[0].total_amount >= pair[1].total_amount)
        };

        info!("Rows vs sum(hourly counts): {} vs {}", report.record_count, report.hourly_count_sum);
        info!("Monthly totals summed: {}", report.monthly_total_sum);
        info!("All-amount sum: {}", report.raw_total);

        if let [first, second, ..] = tables.top_cities.as_slice() {
            info!("Top cities, first two: [{}: {}], [{}: {}]", first.city, first.total_amount, second.city, second.total_amount);
        }

        let mismatches = report.mismatches();

        if mismatches.is_empty() {
            info!("Self-check passed");
            return Ok(report);
        }

        for mismatch in &mismatches {
            warn!("Self-check mismatch: {mismatch}");
        }

        match self.mode {
            ValidationMode::Report => Ok(report),
            ValidationMode::Strict => Err(ValidationError::Mismatch(mismatches.join("; ")))
        }
    }
}

fn sum(amounts: impl Iterator<Item = Amount>) -> Result<Amount, ValidationError> {
    amounts.fold(Some(Amount::ZERO), |total, amount| total?.checked_add(amount))
        .ok_or(ValidationError::Overflow)
}
