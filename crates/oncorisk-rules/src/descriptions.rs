use serde::Serialize;

use oncorisk_core::models::molecular::MolecularGroup;

/// Fixed reference text for a molecular group, for reports and UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupDescription {
    pub name: &'static str,
    pub short_name: &'static str,
    pub frequency: &'static str,
    pub prognosis: &'static str,
    pub key_feature: &'static str,
    pub biology: &'static str,
    pub treatment_implication: &'static str,
    pub color: &'static str,
}

const POLEMUT: GroupDescription = GroupDescription {
    name: "POLE Ultramutated",
    short_name: "POLEmut",
    frequency: "~7% of endometrial cancers",
    prognosis: "Excellent (5-year RFS >95%)",
    key_feature: "POLE exonuclease domain mutation",
    biology: "Ultramutated tumors with high neoantigen load but excellent outcomes",
    treatment_implication: "Consider de-escalation regardless of stage/grade",
    color: "#10b981",
};

const MMRD: GroupDescription = GroupDescription {
    name: "Mismatch Repair Deficient",
    short_name: "MMRd",
    frequency: "~28% of endometrial cancers",
    prognosis: "Intermediate (5-year RFS ~85-90%)",
    key_feature: "Loss of MMR proteins (MLH1, MSH2, MSH6, PMS2)",
    biology: "High tumor mutational burden, immunogenic",
    treatment_implication: "Exceptional response to checkpoint inhibitors; screen for Lynch",
    color: "#3b82f6",
};

const NSMP: GroupDescription = GroupDescription {
    name: "No Specific Molecular Profile",
    short_name: "NSMP",
    frequency: "~40% of endometrial cancers",
    prognosis: "Variable (depends on L1CAM/CTNNB1)",
    key_feature: "Wild-type POLE, proficient MMR, wild-type p53",
    biology: "Heterogeneous group; L1CAM/CTNNB1 refine risk",
    treatment_implication: "Risk-adapted approach based on biomarkers",
    color: "#64748b",
};

const P53ABN: GroupDescription = GroupDescription {
    name: "p53 Abnormal",
    short_name: "p53abn",
    frequency: "~25% of endometrial cancers",
    prognosis: "Poor (5-year RFS ~50-60%)",
    key_feature: "Abnormal p53 IHC (null or missense pattern)",
    biology: "Copy number high, serous-like biology, aggressive",
    treatment_implication: "Requires aggressive multimodal therapy (CTRT)",
    color: "#ef4444",
};

pub fn describe(group: MolecularGroup) -> &'static GroupDescription {
    match group {
        MolecularGroup::PoleMut => &POLEMUT,
        MolecularGroup::Mmrd => &MMRD,
        MolecularGroup::Nsmp => &NSMP,
        MolecularGroup::P53abn => &P53ABN,
    }
}
