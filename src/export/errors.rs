use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unable to create output directory [{path}]: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: io::Error
    },
    #[error("Unable to render table for [{path}]: {source}")]
    Render {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Unable to stage table for [{path}]: {source}")]
    Stage {
        path: PathBuf,
        source: io::Error
    },
    #[error("Unable to move table into place at [{path}]: {source}")]
    Persist {
        path: PathBuf,
        source: io::Error
    }
}
