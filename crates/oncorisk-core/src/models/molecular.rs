use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rule-based classification is deterministic, so confidence is fixed.
pub const CLASSIFICATION_CONFIDENCE: f64 = 1.0;

/// ProMisE/TCGA molecular group, listed in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MolecularGroup {
    #[serde(rename = "POLEmut")]
    PoleMut,
    #[serde(rename = "MMRd")]
    Mmrd,
    #[serde(rename = "NSMP")]
    Nsmp,
    #[serde(rename = "p53abn")]
    P53abn,
}

impl MolecularGroup {
    /// All groups in encoding order.
    pub const ALL: [MolecularGroup; 4] = [
        MolecularGroup::PoleMut,
        MolecularGroup::Mmrd,
        MolecularGroup::Nsmp,
        MolecularGroup::P53abn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MolecularGroup::PoleMut => "POLEmut",
            MolecularGroup::Mmrd => "MMRd",
            MolecularGroup::Nsmp => "NSMP",
            MolecularGroup::P53abn => "p53abn",
        }
    }

    /// Position in the four-way enumeration fed to the scorer.
    pub fn code(&self) -> usize {
        match self {
            MolecularGroup::PoleMut => 0,
            MolecularGroup::Mmrd => 1,
            MolecularGroup::Nsmp => 2,
            MolecularGroup::P53abn => 3,
        }
    }

    /// POLEmut and MMRd carry favorable biology for staging purposes.
    pub fn is_favorable(&self) -> bool {
        matches!(self, MolecularGroup::PoleMut | MolecularGroup::Mmrd)
    }

    pub fn is_aggressive(&self) -> bool {
        matches!(self, MolecularGroup::P53abn)
    }
}

impl fmt::Display for MolecularGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tier within the NSMP group, driven by L1CAM then CTNNB1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NsmpRisk {
    #[serde(rename = "NSMP-high-risk")]
    High,
    #[serde(rename = "NSMP-intermediate")]
    Intermediate,
    #[serde(rename = "NSMP-low-risk")]
    Low,
}

impl NsmpRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            NsmpRisk::High => "NSMP-high-risk",
            NsmpRisk::Intermediate => "NSMP-intermediate",
            NsmpRisk::Low => "NSMP-low-risk",
        }
    }

    pub fn from_subtype(subtype: &str) -> Option<Self> {
        [NsmpRisk::High, NsmpRisk::Intermediate, NsmpRisk::Low]
            .into_iter()
            .find(|tier| tier.as_str() == subtype)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MolecularClassification {
    pub group: MolecularGroup,
    /// Lost MMR protein, p53 IHC pattern, or NSMP risk tier.
    pub subtype: Option<String>,
    pub confidence: f64,
    pub rationale: String,
    pub clinical_significance: String,
}

impl MolecularClassification {
    pub fn nsmp_risk(&self) -> Option<NsmpRisk> {
        if self.group != MolecularGroup::Nsmp {
            return None;
        }
        self.subtype.as_deref().and_then(NsmpRisk::from_subtype)
    }
}
