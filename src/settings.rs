use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::aggregates::DEFAULT_TOP_CITIES;
use crate::validation::ValidationMode;

/// Summarizes a transaction ledger into monthly, hourly, city and night+high tables
#[derive(Parser, Debug, Clone)]
#[command(name = "ledger-report", version)]
pub struct Settings {
    /// Ledger CSV with `amount`, `txn_time` and `city` columns
    #[arg(long, default_value = "data/transactions.csv")]
    pub input: PathBuf,

    /// Directory the summary tables are written to, created if missing
    #[arg(long, default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Number of cities kept in the ranking
    #[arg(long, default_value_t = DEFAULT_TOP_CITIES as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub top_cities: u16,

    /// Fail the run when the self-check finds a mismatch
    #[arg(long)]
    pub strict: bool,

    /// Logging level: error, warn, info, debug, trace
    #[arg(long, env = "LEDGER_REPORT_LOG", default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter
}

impl Settings {
    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Report
        }
    }
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("Invalid log level '{level}', expected one of: error, warn, info, debug, trace"))
    }
}
