//! Reference logistic-regression scorer.
//!
//! The artifact is a small JSON document: an intercept, one coefficient per
//! schema feature, and a reference (cohort mean) vector. Because the model
//! is linear in log-odds, attribution is exact: each feature contributes
//! `w * (x - ref)` on top of a base of `b + Σ w * ref`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collaborator::{Attribution, Attributor, Scorer};
use crate::error::ModelError;
use crate::schema::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};

const BUNDLED: &str = include_str!("../assets/logistic-v1.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Artifact {
    version: String,
    feature_names: Vec<String>,
    intercept: f64,
    coefficients: Vec<f64>,
    reference: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LogisticModel {
    version: String,
    intercept: f64,
    coefficients: Vec<f64>,
    reference: Vec<f64>,
}

impl LogisticModel {
    /// The artifact compiled into this build.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ModelError::Unavailable(format!("no model artifact at {}", path.display()))
            }
            _ => ModelError::Io(e),
        })?;
        let model = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), version = %model.version, "loaded scoring model");
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: Artifact = serde_json::from_str(json)?;

        if artifact.feature_names.len() != FEATURE_COUNT
            || artifact
                .feature_names
                .iter()
                .zip(FEATURE_NAMES)
                .any(|(got, want)| got != want)
        {
            return Err(ModelError::SchemaMismatch(format!(
                "expected features [{}], got [{}]",
                FEATURE_NAMES.join(", "),
                artifact.feature_names.join(", ")
            )));
        }
        for (field, values) in [
            ("coefficients", &artifact.coefficients),
            ("reference", &artifact.reference),
        ] {
            if values.len() != FEATURE_COUNT {
                return Err(ModelError::SchemaMismatch(format!(
                    "{field} has {} values, expected {FEATURE_COUNT}",
                    values.len()
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ModelError::SchemaMismatch(format!(
                    "{field} contains a non-finite value"
                )));
            }
        }
        if !artifact.intercept.is_finite() {
            return Err(ModelError::SchemaMismatch(
                "intercept is not finite".to_string(),
            ));
        }

        Ok(Self {
            version: artifact.version,
            intercept: artifact.intercept,
            coefficients: artifact.coefficients,
            reference: artifact.reference,
        })
    }

    fn check_shape(&self, features: &FeatureVector) -> Result<(), ModelError> {
        if features.len() != FEATURE_COUNT {
            return Err(ModelError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }
        Ok(())
    }

    /// Linear predictor before the sigmoid.
    pub fn log_odds(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        self.check_shape(features)?;
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.values())
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }
}

impl Scorer for LogisticModel {
    fn version(&self) -> &str {
        &self.version
    }

    fn score(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let z = self.log_odds(features)?;
        let probability = 1.0 / (1.0 + (-z).exp());
        if !probability.is_finite() {
            return Err(ModelError::InvalidOutput(format!(
                "log-odds {z} does not map to a probability"
            )));
        }
        Ok(probability)
    }
}

impl Attributor for LogisticModel {
    fn attribute(&self, features: &FeatureVector) -> Result<Attribution, ModelError> {
        self.check_shape(features)?;
        let base_value = self.intercept
            + self
                .coefficients
                .iter()
                .zip(&self.reference)
                .map(|(w, r)| w * r)
                .sum::<f64>();
        let values = self
            .coefficients
            .iter()
            .zip(&self.reference)
            .zip(features.values())
            .map(|((w, r), x)| w * (x - r))
            .collect();
        Ok(Attribution { base_value, values })
    }
}
