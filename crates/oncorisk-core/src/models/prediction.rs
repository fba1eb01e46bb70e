use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::molecular::MolecularClassification;
use super::staging::IntegratedStage;

/// Probabilities below this are Low risk.
pub const LOW_RISK_CEILING: f64 = 0.15;
/// Probabilities at or above this are High risk.
pub const HIGH_RISK_FLOOR: f64 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Intermediate,
    High,
}

impl RiskCategory {
    /// Map a probability onto the fixed, non-overlapping thresholds.
    /// Each boundary belongs to the higher category.
    pub fn from_probability(probability: f64) -> Self {
        if probability < LOW_RISK_CEILING {
            RiskCategory::Low
        } else if probability < HIGH_RISK_FLOOR {
            RiskCategory::Intermediate
        } else {
            RiskCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Intermediate => "INTERMEDIATE",
            RiskCategory::High => "HIGH",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::Low => "#22c55e",
            RiskCategory::Intermediate => "#f59e0b",
            RiskCategory::High => "#ef4444",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five-year recurrence-risk estimate for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub recurrence_probability: f64,
    pub risk_category: RiskCategory,
    pub risk_percentile: u8,
    pub molecular_classification: MolecularClassification,
    pub integrated_stage: IntegratedStage,
    /// Recurrence probability implied by anatomical stage alone.
    pub stage_based_risk: f64,
    /// `recurrence_probability - stage_based_risk`.
    pub risk_difference: f64,
    pub reclassified: bool,
    pub model_version: String,
    pub assessed_at: jiff::Timestamp,
}
