use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::molecular::MolecularGroup;
use super::prediction::RiskCategory;
use super::recommendation::Recommendation;

pub const DISCLAIMER: &str = "This report is for clinical decision support only and should not \
replace clinical judgment. All recommendations should be reviewed by qualified oncologists in \
the context of individual patient circumstances.";

/// Everything a clinician sees for one assessment, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalReport {
    pub report_id: String,
    pub patient_id: String,
    pub assessed_at: jiff::Timestamp,
    pub version: String,

    pub risk_score: f64,
    pub risk_category: RiskCategory,
    pub molecular_group: MolecularGroup,
    pub integrated_stage: String,
    pub one_line_summary: String,

    pub clinical_summary: String,
    pub pathological_summary: String,
    pub molecular_summary: String,

    pub explanation_summary: String,
    pub top_risk_drivers: Vec<String>,
    pub top_protective_factors: Vec<String>,

    pub molecular_explanation: String,
    pub biological_significance: String,
    pub therapeutic_implications: String,

    pub recommendation: Recommendation,
    pub disclaimer: String,
}
