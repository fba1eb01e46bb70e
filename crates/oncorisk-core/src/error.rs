use thiserror::Error;

use crate::validation::{ValidationError, join_issues};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid patient record: {}", join_issues(.0))]
    Validation(Vec<ValidationError>),
}
