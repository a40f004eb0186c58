use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open ledger at [{path}]: {source}")]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("Unable to read ledger: {0}")]
    Read(csv::Error),
    #[error("Ledger header is missing required column [{column}]")]
    MissingColumn {
        column: &'static str
    },
    #[error("Malformed ledger row at line [{line}]: {message}")]
    Parse {
        line: u64,
        message: String
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return Self::Read(error);
        }

        let line = error.position().map(|position| position.line()).unwrap_or_default();
        let message = match error.kind() {
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => error.to_string()
        };

        Self::Parse { line, message }
    }
}
