use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which way a feature pushes the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    Risk,
    Protective,
}

impl Direction {
    /// Positive attribution raises risk; anything else is protective.
    pub fn of(attribution: f64) -> Self {
        if attribution > 0.0 {
            Direction::Risk
        } else {
            Direction::Protective
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Direction::Risk => "#ef4444",
            Direction::Protective => "#22c55e",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureContribution {
    /// Feature name as the scorer knows it, e.g. `p53_encoded`.
    pub name: String,
    pub display_name: String,
    /// Human-readable value for this patient, e.g. "Abnormal", "64 years".
    pub value: String,
    pub attribution: f64,
    pub direction: Direction,
    pub color: String,
    /// 1 = largest absolute attribution.
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureInteraction {
    pub first_feature: String,
    pub first_display: String,
    pub second_feature: String,
    pub second_display: String,
    pub magnitude: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Explanation {
    pub base_value: f64,
    pub prediction: f64,
    /// Contributions above the noise floor, most important first.
    pub features: Vec<FeatureContribution>,
    pub top_risk_factors: Vec<FeatureContribution>,
    pub top_protective_factors: Vec<FeatureContribution>,
    pub interactions: Vec<FeatureInteraction>,
    pub summary: String,
}
