use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[allow(clippy::upper_case_acronyms)]
pub enum StageGroup {
    I,
    II,
    III,
    IV,
}

impl StageGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageGroup::I => "I",
            StageGroup::II => "II",
            StageGroup::III => "III",
            StageGroup::IV => "IV",
        }
    }
}

impl fmt::Display for StageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Molecular modifier applied to the anatomical stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StageModifier {
    Favorable,
    Aggressive,
}

/// FIGO 2023 stage with molecular integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntegratedStage {
    pub anatomical_stage: String,
    /// Anatomical stage plus molecular suffix, e.g. "IAm1", "IC", "IIIC12".
    pub integrated_stage: String,
    pub stage_group: StageGroup,
    pub modifier: Option<StageModifier>,
    pub rationale: String,
    pub prognosis_impact: String,
    pub clinical_implications: String,
}
