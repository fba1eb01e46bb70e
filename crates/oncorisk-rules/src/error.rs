use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("scenario catalogue is malformed: {0}")]
    ScenarioCatalogue(#[from] serde_json::Error),
}
