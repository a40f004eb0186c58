use super::{ValidationError, ValidationMode, Validator};

use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::aggregates::{Aggregator, CityTotal, LedgerSummary};
use crate::models::{parse_txn_time, Transaction};
use crate::types::Amount;

fn create_ledger() -> Result<Vec<Transaction>> {
    Ok(vec![
        Transaction::new(Amount::from_str("100")?, parse_txn_time("01-01-2024 23:30")?, "X"),
        Transaction::new(Amount::from_str("300000")?, parse_txn_time("02-01-2024 14:00")?, "Y"),
        Transaction::new(Amount::from_str("250000")?, parse_txn_time("15-02-2024 02:00")?, "X"),
    ])
}

fn summarize(ledger: &[Transaction]) -> Result<LedgerSummary> {
    Ok(Aggregator::default().aggregate(ledger)?)
}

#[test]
fn test_validator_passes_for_consistent_summary() -> Result<()> {
    let ledger = create_ledger()?;
    let summary = summarize(&ledger)?;

    let report = Validator::new(ValidationMode::Strict).validate(&ledger, &summary)?;

    assert!(report.is_consistent());
    assert_eq!(report.record_count, 3);
    assert_eq!(report.hourly_count_sum, 3);
    assert_eq!(report.monthly_total_sum.to_string(), "550100.00");
    assert_eq!(report.raw_total, report.monthly_total_sum);

    Ok(())
}

#[test]
fn test_validator_passes_for_empty_ledger() -> Result<()> {
    let summary = summarize(&[])?;

    let report = Validator::new(ValidationMode::Strict).validate(&[], &summary)?;

    assert!(report.is_consistent());
    assert_eq!(report.raw_total, Amount::ZERO);

    Ok(())
}

#[test]
fn test_validator_reports_mismatch_without_failing_by_default() -> Result<()> {
    let ledger = create_ledger()?;
    let mut summary = summarize(&ledger)?;
    summary.tables.monthly_totals.pop();

    let report = Validator::default().validate(&ledger, &summary)?;

    assert!(report.counts_match());
    assert!(!report.totals_match());
    assert!(!report.is_consistent());

    Ok(())
}

#[test]
fn test_validator_fails_on_mismatch_in_strict_mode() -> Result<()> {
    let ledger = create_ledger()?;
    let mut summary = summarize(&ledger)?;
    summary.tables.hourly_counts[0].count += 1;

    let error = Validator::new(ValidationMode::Strict).validate(&ledger, &summary)
        .err().ok_or_else(|| anyhow!("Strict validation should fail"))?;

    assert!(matches!(error, ValidationError::Mismatch(ref message) if message.contains("hourly counts sum to 4")));

    Ok(())
}

#[test]
fn test_validator_detects_unsorted_city_ranking() -> Result<()> {
    let ledger = create_ledger()?;
    let mut summary = summarize(&ledger)?;
    summary.tables.top_cities.push(CityTotal {
        city: "Z".to_string(),
        total_amount: Amount::from_str("999999")?
    });

    let report = Validator::default().validate(&ledger, &summary)?;

    assert!(!report.top_cities_sorted);
    assert!(report.totals_match());

    Ok(())
}
