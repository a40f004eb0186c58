use std::fs::{create_dir_all, remove_file};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::aggregates::SummaryTables;
use crate::export::{ExportError, TableRow};

pub const MONTHLY_TOTALS_FILE: &str = "monthly_totals.csv";
pub const HOURLY_COUNTS_FILE: &str = "hourly_counts.csv";
pub const TOP_CITIES_FILE: &str = "city_totals_top5.csv";
pub const NIGHT_HIGH_BY_MONTH_FILE: &str = "night_high_by_month.csv";

/// A fully written table waiting next to its destination.
struct StagedTable {
    file: NamedTempFile,
    path: PathBuf
}

/// Writes summary tables as CSV files into a single output directory.
pub struct Exporter {
    output_dir: PathBuf
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into()
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes all four tables, replacing any previous files, and returns their paths in
    /// the order monthly totals, hourly counts, top cities, night-high by month.
    ///
    /// Every table is staged in a temporary file inside the output directory first, and
    /// only moved into place once all four were written.
    ///
    /// # Errors
    /// Returns `ExportError` on the first I/O failure. Staged files are discarded and any
    /// table already moved into place is removed again, so a failed export leaves none of
    /// the four files behind.
    pub fn export(&self, tables: &SummaryTables) -> Result<Vec<PathBuf>, ExportError> {
        create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDirectory {
            path: self.output_dir.clone(),
            source
        })?;

        let staged = vec![
            self.stage(MONTHLY_TOTALS_FILE, &tables.monthly_totals)?,
            self.stage(HOURLY_COUNTS_FILE, &tables.hourly_counts)?,
            self.stage(TOP_CITIES_FILE, &tables.top_cities)?,
            self.stage(NIGHT_HIGH_BY_MONTH_FILE, &tables.night_high_by_month)?,
        ];

        commit(staged)
    }

    fn stage<T: TableRow>(&self, file_name: &str, rows: &[T]) -> Result<StagedTable, ExportError> {
        let path = self.output_dir.join(file_name);

        let content = render_table(rows).map_err(|source| ExportError::Render {
            path: path.clone(),
            source
        })?;

        let stage_error = |source| ExportError::Stage { path: path.clone(), source };

        let mut file = NamedTempFile::new_in(&self.output_dir).map_err(stage_error)?;
        file.write_all(&content).map_err(stage_error)?;
        file.flush().map_err(stage_error)?;

        debug!("Staged {} rows for [{}] in [{}]", rows.len(), path.display(), file.path().display());

        Ok(StagedTable { file, path })
    }
}

/// Renders one table with its header line, even when it has no rows.
pub(crate) fn render_table<T: TableRow>(rows: &[T]) -> Result<Vec<u8>, csv::Error> {
    //NOTE: Headers are written by hand, serde only emits them alongside the first row
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(T::HEADER)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.into_inner().map_err(|error| csv::Error::from(error.into_error()))
}

fn commit(staged: Vec<StagedTable>) -> Result<Vec<PathBuf>, ExportError> {
    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());

    //NOTE: Returning early drops the remaining staged files, which deletes them
    for table in staged {
        if let Err(error) = table.file.persist(&table.path) {
            for path in &written {
                if let Err(cleanup_error) = remove_file(path) {
                    warn!("Unable to remove [{}] after a failed export: {cleanup_error}", path.display());
                }
            }

            return Err(ExportError::Persist {
                path: table.path,
                source: error.error
            });
        }

        written.push(table.path);
    }

    Ok(written)
}
