use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Self-check failed: {0}")]
    Mismatch(String),
    #[error("Self-check failed: numeric overflow while summing raw amounts")]
    Overflow
}
