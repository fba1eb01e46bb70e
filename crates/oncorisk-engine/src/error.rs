use thiserror::Error;

use oncorisk_core::validation::{ValidationError, join_issues};
use oncorisk_model::error::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid patient record: {}", join_issues(.0))]
    Validation(Vec<ValidationError>),

    #[error("{component} unavailable: {reason}")]
    CollaboratorUnavailable {
        component: &'static str,
        reason: String,
    },

    #[error("scorer failed")]
    Scoring(#[source] ModelError),

    #[error("attribution failed")]
    Attribution(#[source] ModelError),

    #[error("scorer returned {0}, expected a probability in [0, 1]")]
    InvalidProbability(f64),

    #[error("attribution has {actual} values, expected {expected}")]
    AttributionShape { expected: usize, actual: usize },
}

impl EngineError {
    pub(crate) fn from_scorer(err: ModelError) -> Self {
        match err {
            ModelError::Unavailable(reason) => EngineError::CollaboratorUnavailable {
                component: "scorer",
                reason,
            },
            other => EngineError::Scoring(other),
        }
    }

    pub(crate) fn from_attributor(err: ModelError) -> Self {
        match err {
            ModelError::Unavailable(reason) => EngineError::CollaboratorUnavailable {
                component: "attributor",
                reason,
            },
            other => EngineError::Attribution(other),
        }
    }
}
