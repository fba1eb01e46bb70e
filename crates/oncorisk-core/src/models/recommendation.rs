use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

/// A study or guideline backing a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceItem {
    pub source: String,
    pub finding: String,
    pub hazard_ratio: Option<f64>,
    pub p_value: Option<f64>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalTrial {
    pub name: String,
    pub intervention: String,
    pub status: String,
    pub eligibility_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub primary_action: String,
    pub rationale: String,
    pub evidence: Vec<EvidenceItem>,
    pub trial_eligibility: Vec<ClinicalTrial>,
    pub alerts: Vec<Alert>,
    pub contraindications: Vec<String>,
}
