use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Numeric overflow while summing amounts for [{bucket}]")]
    Overflow {
        bucket: String
    }
}

impl AggregateError {
    pub fn overflow(bucket: impl ToString) -> Self {
        Self::Overflow { bucket: bucket.to_string() }
    }
}
