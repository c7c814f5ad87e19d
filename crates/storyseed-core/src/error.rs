use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{invalid} of {total} records failed validation")]
    InvalidRecords { invalid: usize, total: usize },
}
