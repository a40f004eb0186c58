use super::csv_exporter::render_table;
use super::{Exporter, ExportError, HOURLY_COUNTS_FILE, MONTHLY_TOTALS_FILE, NIGHT_HIGH_BY_MONTH_FILE, TOP_CITIES_FILE};

use std::fs;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use tempfile::{tempdir, NamedTempFile};

use crate::aggregates::{Aggregator, CityTotal, SummaryTables};
use crate::models::{parse_txn_time, Transaction};
use crate::types::Amount;

fn create_tables(rows: &[(&str, &str, &str)]) -> Result<SummaryTables> {
    let mut ledger = Vec::new();

    for (amount, txn_time, city) in rows {
        ledger.push(Transaction::new(Amount::from_str(amount)?, parse_txn_time(txn_time)?, city));
    }

    Ok(Aggregator::default().aggregate(&ledger)?.tables)
}

#[test]
fn test_exporter_writes_all_four_tables_with_headers() -> Result<()> {
    let directory = tempdir()?;
    let tables = create_tables(&[
        ("100", "01-01-2024 23:30", "X"),
        ("300000", "02-01-2024 14:00", "Y"),
        ("250000", "15-01-2024 02:00", "X"),
    ])?;

    let paths = Exporter::new(directory.path()).export(&tables)?;

    assert_eq!(paths, vec![
        directory.path().join(MONTHLY_TOTALS_FILE),
        directory.path().join(HOURLY_COUNTS_FILE),
        directory.path().join(TOP_CITIES_FILE),
        directory.path().join(NIGHT_HIGH_BY_MONTH_FILE),
    ]);

    assert_eq!(fs::read_to_string(&paths[0])?, "month,total_amount\n2024-01,550100.00\n");
    assert_eq!(fs::read_to_string(&paths[2])?, "city,total_amount\nY,300000.00\nX,250100.00\n");
    assert_eq!(fs::read_to_string(&paths[3])?, "month,night_high_amount\n2024-01,250000.00\n");

    let hourly = fs::read_to_string(&paths[1])?;
    let lines: Vec<&str> = hourly.lines().collect();

    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], "hour,count");
    assert_eq!(lines[1], "0,0");
    assert_eq!(lines[3], "2,1");
    assert_eq!(lines[15], "14,1");
    assert_eq!(lines[24], "23,1");

    Ok(())
}

#[test]
fn test_exporter_writes_headers_for_empty_tables() -> Result<()> {
    let directory = tempdir()?;
    let tables = create_tables(&[])?;

    let paths = Exporter::new(directory.path()).export(&tables)?;

    assert_eq!(fs::read_to_string(&paths[0])?, "month,total_amount\n");
    assert_eq!(fs::read_to_string(&paths[2])?, "city,total_amount\n");
    assert_eq!(fs::read_to_string(&paths[3])?, "month,night_high_amount\n");

    let hourly = fs::read_to_string(&paths[1])?;

    assert_eq!(hourly.lines().count(), 25);
    assert!(hourly.lines().skip(1).all(|line| line.ends_with(",0")));

    Ok(())
}

#[test]
fn test_exporter_creates_missing_directory_and_overwrites_files() -> Result<()> {
    let directory = tempdir()?;
    let output_dir = directory.path().join("nested").join("outputs");
    let exporter = Exporter::new(&output_dir);

    fs::create_dir_all(&output_dir)?;
    fs::write(output_dir.join(MONTHLY_TOTALS_FILE), "stale content that is much longer than the new table\n")?;

    let tables = create_tables(&[("5", "01-06-2024 08:00", "A")])?;
    exporter.export(&tables)?;

    assert_eq!(fs::read_to_string(output_dir.join(MONTHLY_TOTALS_FILE))?, "month,total_amount\n2024-06,5.00\n");

    Ok(())
}

#[test]
fn test_exporter_quotes_cities_containing_the_delimiter() -> Result<()> {
    let rows = vec![CityTotal {
        city: "Washington, D.C.".to_string(),
        total_amount: Amount::from_str("12.5")?
    }];

    let content = render_table(&rows)?;

    assert_eq!(String::from_utf8(content)?, "city,total_amount\n\"Washington, D.C.\",12.50\n");

    Ok(())
}

#[test]
fn test_exporter_is_byte_identical_across_runs() -> Result<()> {
    let directory = tempdir()?;
    let exporter = Exporter::new(directory.path());
    let rows = [
        ("10.005", "01-01-2024 01:00", "B"),
        ("10.005", "01-02-2024 02:00", "A"),
        ("300000", "01-02-2024 03:00", "C"),
    ];

    let first_paths = exporter.export(&create_tables(&rows)?)?;
    let first: Vec<Vec<u8>> = first_paths.iter().map(fs::read).collect::<Result<_, _>>()?;

    let second_paths = exporter.export(&create_tables(&rows)?)?;
    let second: Vec<Vec<u8>> = second_paths.iter().map(fs::read).collect::<Result<_, _>>()?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_exporter_fails_when_output_dir_is_a_file() -> Result<()> {
    let file = NamedTempFile::new()?;
    let tables = create_tables(&[])?;

    let error = Exporter::new(file.path()).export(&tables).err().ok_or_else(|| anyhow!("Export should fail"))?;

    assert!(matches!(error, ExportError::CreateDirectory { .. }));

    Ok(())
}

#[test]
fn test_exporter_leaves_no_tables_behind_when_one_cannot_be_written() -> Result<()> {
    let directory = tempdir()?;
    fs::create_dir(directory.path().join(HOURLY_COUNTS_FILE))?;

    let tables = create_tables(&[("100", "01-01-2024 10:00", "X")])?;
    let error = Exporter::new(directory.path()).export(&tables).err().ok_or_else(|| anyhow!("Export should fail"))?;

    assert!(matches!(error, ExportError::Persist { ref path, .. } if path.ends_with(HOURLY_COUNTS_FILE)));

    let remaining: Vec<String> = fs::read_dir(directory.path())?
        .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;

    assert_eq!(remaining, vec![HOURLY_COUNTS_FILE.to_string()]);

    Ok(())
}
