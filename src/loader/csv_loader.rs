use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::loader::LoadError;
use crate::models::Transaction;

pub const REQUIRED_COLUMNS: [&str; 3] = ["amount", "txn_time", "city"];

/// Loads every row of the ledger at `path`, preserving input order.
///
/// # Errors
/// Returns `LoadError` if the file cannot be opened or read, if the header lacks one of
/// [`REQUIRED_COLUMNS`], or if any row fails to parse. A single bad row aborts the load.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, LoadError> {
    info!("Loading ledger from [{}]", path.display());

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source
    })?;

    let transactions = read_transactions(BufReader::new(file))?;

    info!("Loaded {} rows from [{}]", transactions.len(), path.display());

    Ok(transactions)
}

/// Reads a ledger from any CSV source with a header row.
pub fn read_transactions<R: Read>(source: R) -> Result<Vec<Transaction>, LoadError> {
    //NOTE: Only headers are trimmed here, `city` trims itself and `txn_time` must match exactly
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn { column });
        }
    }

    let mut transactions = Vec::new();

    for result in reader.deserialize::<Transaction>() {
        let transaction = result?;
        debug!("Loaded transaction [{}] at [{}] in [{}]", transaction.amount, transaction.txn_time, transaction.city);
        transactions.push(transaction);
    }

    Ok(transactions)
}
