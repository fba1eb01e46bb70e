#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use oncorisk_core::models::patient::PatientRecord;
use oncorisk_model::collaborator::{Attribution, Attributor, Scorer};
use oncorisk_model::error::ModelError;
use oncorisk_model::logistic::LogisticModel;
use oncorisk_model::schema::FeatureVector;
use oncorisk_rules::scenarios::get_scenario;

pub fn bundled() -> Arc<LogisticModel> {
    Arc::new(LogisticModel::bundled().unwrap())
}

pub fn scenario_patient(id: &str, index: usize) -> PatientRecord {
    get_scenario(id).unwrap().patients.remove(index)
}

pub fn silent_killer() -> PatientRecord {
    scenario_patient("silent-killer", 0)
}

/// Returns the same probability for every vector and counts calls.
pub struct FixedScorer {
    pub probability: f64,
    pub calls: AtomicUsize,
}

impl FixedScorer {
    pub fn new(probability: f64) -> Arc<Self> {
        Arc::new(Self {
            probability,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Scorer for FixedScorer {
    fn version(&self) -> &str {
        "fixed"
    }

    fn score(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.probability)
    }
}

pub struct UnloadedModel;

impl Scorer for UnloadedModel {
    fn version(&self) -> &str {
        "unloaded"
    }

    fn score(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        Err(ModelError::Unavailable("weights not loaded".to_string()))
    }
}

impl Attributor for UnloadedModel {
    fn attribute(&self, _features: &FeatureVector) -> Result<Attribution, ModelError> {
        Err(ModelError::Unavailable("weights not loaded".to_string()))
    }
}

/// Returns a canned attribution regardless of input.
pub struct FixedAttributor(pub Attribution);

impl FixedAttributor {
    pub fn new(values: Vec<f64>) -> Arc<Self> {
        Arc::new(Self(Attribution {
            base_value: -1.0,
            values,
        }))
    }
}

impl Attributor for FixedAttributor {
    fn attribute(&self, _features: &FeatureVector) -> Result<Attribution, ModelError> {
        Ok(self.0.clone())
    }
}

/// Fails every call with a non-availability error.
pub struct FailingScorer;

impl Scorer for FailingScorer {
    fn version(&self) -> &str {
        "failing"
    }

    fn score(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        Err(ModelError::InvalidOutput("log-odds overflowed".to_string()))
    }
}
