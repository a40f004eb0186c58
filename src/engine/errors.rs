use thiserror::Error;

use crate::aggregates::AggregateError;
use crate::export::ExportError;
use crate::loader::LoadError;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Validation(#[from] ValidationError)
}
