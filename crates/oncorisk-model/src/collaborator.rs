use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::FeatureVector;

/// Maps a feature vector to a five-year recurrence probability.
///
/// Handles are loaded once and shared across requests, so implementations
/// must be reentrant. A vector of the wrong length is an error, never
/// silently padded or clamped.
pub trait Scorer: Send + Sync {
    /// Identifier stamped on every prediction made with this scorer.
    fn version(&self) -> &str;

    fn score(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// Signed per-feature contributions relative to a base value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub base_value: f64,
    /// One value per feature, in schema order.
    pub values: Vec<f64>,
}

/// Explains a scorer's output feature by feature. Must use the same
/// feature ordering as the scorer it explains.
pub trait Attributor: Send + Sync {
    fn attribute(&self, features: &FeatureVector) -> Result<Attribution, ModelError>;
}
