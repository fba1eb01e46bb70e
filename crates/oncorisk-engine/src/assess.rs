//! Full assessment: prediction, explanation, recommendation and report.

use std::sync::Arc;

use jiff::Timestamp;
use oncorisk_core::models::explanation::Explanation;
use oncorisk_core::models::patient::PatientRecord;
use oncorisk_core::models::prediction::PredictionResult;
use oncorisk_core::models::recommendation::Recommendation;
use oncorisk_core::models::report::{ClinicalReport, DISCLAIMER};
use oncorisk_model::collaborator::{Attributor, Scorer};
use oncorisk_rules::recommendation::recommend;
use uuid::Uuid;

use crate::error::EngineError;
use crate::explain::ExplanationAssembler;
use crate::risk::RiskEngine;

pub const REPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct Assessment {
    pub prediction: PredictionResult,
    pub explanation: Explanation,
    pub recommendation: Recommendation,
    pub report: ClinicalReport,
}

/// Owns the risk engine and explanation assembler for a process. The
/// collaborator handles are injected once here and shared by every call.
pub struct Assessor {
    engine: RiskEngine,
    explainer: ExplanationAssembler,
}

impl Assessor {
    pub fn new(scorer: Arc<dyn Scorer>, attributor: Arc<dyn Attributor>) -> Self {
        Self {
            engine: RiskEngine::new(scorer),
            explainer: ExplanationAssembler::new(attributor),
        }
    }

    /// Use one model as both scorer and attributor.
    pub fn from_model<M>(model: Arc<M>) -> Self
    where
        M: Scorer + Attributor + 'static,
    {
        Self::new(model.clone(), model)
    }

    pub fn engine(&self) -> &RiskEngine {
        &self.engine
    }

    /// Predict, then explain that fresh prediction.
    pub fn explain_patient(
        &self,
        patient: &PatientRecord,
    ) -> Result<(PredictionResult, Explanation), EngineError> {
        let prediction = self.engine.predict(patient)?;
        let explanation = self.explainer.explain(patient, &prediction)?;
        Ok((prediction, explanation))
    }

    pub fn assess(&self, patient: &PatientRecord) -> Result<Assessment, EngineError> {
        self.assess_at(patient, Timestamp::now())
    }

    pub fn assess_at(
        &self,
        patient: &PatientRecord,
        assessed_at: Timestamp,
    ) -> Result<Assessment, EngineError> {
        let prediction = self.engine.predict_at(patient, assessed_at)?;
        let explanation = self.explainer.explain(patient, &prediction)?;
        let recommendation = recommend(patient, &prediction);
        let report = build_report(
            patient,
            &prediction,
            &explanation,
            &recommendation,
            report_id(assessed_at),
        );

        tracing::info!(report_id = %report.report_id, "assessment complete");

        Ok(Assessment {
            prediction,
            explanation,
            recommendation,
            report,
        })
    }
}

/// `RPT-YYYYMMDD-XXXXXXXX`, dated in UTC.
pub fn report_id(assessed_at: Timestamp) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("RPT-{}-{suffix}", assessed_at.strftime("%Y%m%d"))
}

pub fn build_report(
    patient: &PatientRecord,
    prediction: &PredictionResult,
    explanation: &Explanation,
    recommendation: &Recommendation,
    report_id: String,
) -> ClinicalReport {
    let classification = &prediction.molecular_classification;
    let group = classification.group;

    ClinicalReport {
        report_id,
        patient_id: patient
            .patient_id
            .clone()
            .unwrap_or_else(|| "Anonymous".to_string()),
        assessed_at: prediction.assessed_at,
        version: REPORT_VERSION.to_string(),
        risk_score: prediction.recurrence_probability,
        risk_category: prediction.risk_category,
        molecular_group: group,
        integrated_stage: prediction.integrated_stage.integrated_stage.clone(),
        one_line_summary: format!(
            "{}-risk patient with {group} molecular classification",
            prediction.risk_category
        ),
        clinical_summary: clinical_summary(patient),
        pathological_summary: pathological_summary(patient),
        molecular_summary: molecular_summary(patient, prediction),
        explanation_summary: explanation.summary.clone(),
        top_risk_drivers: explanation
            .top_risk_factors
            .iter()
            .map(|f| f.display_name.clone())
            .collect(),
        top_protective_factors: explanation
            .top_protective_factors
            .iter()
            .map(|f| f.display_name.clone())
            .collect(),
        molecular_explanation: classification.rationale.clone(),
        biological_significance: classification.clinical_significance.clone(),
        therapeutic_implications: recommendation.primary_action.clone(),
        recommendation: recommendation.clone(),
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn clinical_summary(patient: &PatientRecord) -> String {
    format!(
        "Age {} years, BMI {:.1}, Diabetes: {}, ECOG {}",
        patient.age,
        patient.bmi,
        if patient.diabetes { "Yes" } else { "No" },
        patient.ecog_status
    )
}

fn pathological_summary(patient: &PatientRecord) -> String {
    format!(
        "Stage {}, {} histology, Grade {}, {} myometrial invasion, {} LVSI, lymph nodes {}",
        patient.stage,
        patient.histology,
        patient.grade,
        patient.myometrial_invasion,
        patient.lvsi,
        patient.lymph_nodes
    )
}

fn molecular_summary(patient: &PatientRecord, prediction: &PredictionResult) -> String {
    format!(
        "{} molecular group: POLE {}, MMR {}, p53 {}, L1CAM {}",
        prediction.molecular_classification.group,
        patient.pole(),
        patient.mmr(),
        patient.p53(),
        patient.l1cam()
    )
}
