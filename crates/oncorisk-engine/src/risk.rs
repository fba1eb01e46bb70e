//! Recurrence-risk prediction.

use std::sync::Arc;

use jiff::Timestamp;
use oncorisk_core::models::patient::{FigoStage, PatientRecord};
use oncorisk_core::models::prediction::{PredictionResult, RiskCategory};
use oncorisk_model::collaborator::Scorer;
use oncorisk_model::schema::FEATURE_COUNT;
use oncorisk_rules::classifier::classify;
use oncorisk_rules::staging::{StagingInput, stage};

use crate::error::EngineError;
use crate::features::encode;

/// Five-year recurrence probability implied by anatomical stage alone.
pub const STAGE_BASED_RISK: [(FigoStage, f64); 9] = [
    (FigoStage::IA, 0.05),
    (FigoStage::IB, 0.10),
    (FigoStage::II, 0.15),
    (FigoStage::IIIA, 0.25),
    (FigoStage::IIIB, 0.30),
    (FigoStage::IIIC1, 0.40),
    (FigoStage::IIIC2, 0.50),
    (FigoStage::IVA, 0.65),
    (FigoStage::IVB, 0.75),
];

/// Baseline for a stage outside the table.
pub const DEFAULT_STAGE_RISK: f64 = 0.15;

pub fn stage_based_risk(stage: &FigoStage) -> f64 {
    STAGE_BASED_RISK
        .iter()
        .find(|(known, _)| known == stage)
        .map_or(DEFAULT_STAGE_RISK, |(_, risk)| *risk)
}

/// Classifies, encodes, scores and stages one patient at a time.
pub struct RiskEngine {
    scorer: Arc<dyn Scorer>,
}

impl RiskEngine {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    pub fn model_version(&self) -> &str {
        self.scorer.version()
    }

    pub fn predict(&self, patient: &PatientRecord) -> Result<PredictionResult, EngineError> {
        self.predict_at(patient, Timestamp::now())
    }

    /// Predict with an explicit assessment time. For a fixed time and
    /// scorer the result is fully determined by the patient record.
    pub fn predict_at(
        &self,
        patient: &PatientRecord,
        assessed_at: Timestamp,
    ) -> Result<PredictionResult, EngineError> {
        let issues = patient.validate();
        if !issues.is_empty() {
            return Err(EngineError::Validation(issues));
        }

        let molecular_classification = classify(patient);
        let features = encode(patient, molecular_classification.group);

        tracing::debug!(
            model_version = %self.scorer.version(),
            features = FEATURE_COUNT,
            "scoring patient"
        );
        let probability = self
            .scorer
            .score(&features)
            .map_err(EngineError::from_scorer)?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(EngineError::InvalidProbability(probability));
        }

        let risk_category = RiskCategory::from_probability(probability);
        let stage_based_risk = stage_based_risk(&patient.stage);
        let reclassified = risk_category != RiskCategory::from_probability(stage_based_risk);

        let integrated_stage = stage(&StagingInput::from_patient(
            patient,
            molecular_classification.group,
        ));

        Ok(PredictionResult {
            recurrence_probability: probability,
            risk_category,
            risk_percentile: (probability * 100.0).round() as u8,
            molecular_classification,
            integrated_stage,
            stage_based_risk,
            risk_difference: probability - stage_based_risk,
            reclassified,
            model_version: self.scorer.version().to_string(),
            assessed_at,
        })
    }

    /// Independent predictions, one result per patient in input order.
    pub fn predict_batch(
        &self,
        patients: &[PatientRecord],
    ) -> Vec<Result<PredictionResult, EngineError>> {
        let assessed_at = Timestamp::now();
        let results: Vec<_> = patients
            .iter()
            .map(|patient| self.predict_at(patient, assessed_at))
            .collect();
        tracing::info!(
            patients = patients.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "batch prediction complete"
        );
        results
    }
}
