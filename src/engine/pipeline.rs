use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::aggregates::{Aggregator, LedgerSummary};
use crate::engine::PipelineError;
use crate::export::Exporter;
use crate::loader::load_transactions;
use crate::validation::{ValidationMode, ValidationReport, Validator};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub summary: LedgerSummary,
    pub validation: ValidationReport,
    /// Files written, in export order.
    pub outputs: Vec<PathBuf>
}

/// Load, derive, aggregate, export, validate: one pass over one ledger.
pub struct Pipeline {
    input_path: PathBuf,
    exporter: Exporter,
    aggregator: Aggregator,
    validator: Validator
}

impl Pipeline {
    /// Creates a pipeline reading `input_path` and writing its tables into `output_dir`.
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            exporter: Exporter::new(output_dir),
            aggregator: Aggregator::default(),
            validator: Validator::default()
        }
    }

    pub fn with_top_cities_limit(mut self, limit: usize) -> Self {
        self.aggregator = self.aggregator.with_top_cities_limit(limit);
        self
    }

    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validator = Validator::new(mode);
        self
    }

    pub fn output_dir(&self) -> &Path {
        self.exporter.output_dir()
    }

    /// Runs every stage in order, each over the full output of the previous one.
    ///
    /// # Errors
    /// Any load, aggregation or export failure aborts the run. Validation only fails the
    /// run in [`ValidationMode::Strict`], after the tables have been written.
    pub fn run(&self) -> Result<PipelineReport, PipelineError> {
        let transactions = load_transactions(&self.input_path)?;

        if transactions.is_empty() {
            warn!("Ledger at [{}] has no rows, median, mean and percentages are undefined", self.input_path.display());
        }

        let summary = self.aggregator.aggregate(&transactions)?;
        let outputs = self.exporter.export(&summary.tables)?;
        let validation = self.validator.validate(&transactions, &summary)?;

        info!("Wrote {} tables to [{}]", outputs.len(), self.output_dir().display());

        Ok(PipelineReport {
            summary,
            validation,
            outputs
        })
    }
}
