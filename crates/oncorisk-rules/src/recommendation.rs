//! Evidence-linked treatment recommendations.
//!
//! Dispatch is a pure function of the molecular group; NSMP is refined by
//! L1CAM positivity and then by the predicted risk category (High, then
//! Low, otherwise Intermediate). Each pathway owns a fixed bundle of
//! primary action, evidence, trial, alerts and contraindications; only the
//! rationale is parameterised by the current prediction.

use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::patient::{L1camStatus, PatientRecord};
use oncorisk_core::models::prediction::{PredictionResult, RiskCategory};
use oncorisk_core::models::recommendation::{
    Alert, AlertSeverity, ClinicalTrial, EvidenceItem, Recommendation,
};

/// Treatment pathway selected for a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreatmentPathway {
    PoleMut,
    Mmrd,
    P53abn,
    Nsmp(NsmpPathway),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsmpPathway {
    L1camPositive,
    HighRisk,
    LowRisk,
    IntermediateRisk,
}

impl TreatmentPathway {
    pub fn select(patient: &PatientRecord, prediction: &PredictionResult) -> Self {
        match prediction.molecular_classification.group {
            MolecularGroup::PoleMut => TreatmentPathway::PoleMut,
            MolecularGroup::Mmrd => TreatmentPathway::Mmrd,
            MolecularGroup::P53abn => TreatmentPathway::P53abn,
            MolecularGroup::Nsmp => {
                let tier = if patient.l1cam_status == Some(L1camStatus::Positive) {
                    NsmpPathway::L1camPositive
                } else {
                    match prediction.risk_category {
                        RiskCategory::High => NsmpPathway::HighRisk,
                        RiskCategory::Low => NsmpPathway::LowRisk,
                        RiskCategory::Intermediate => NsmpPathway::IntermediateRisk,
                    }
                };
                TreatmentPathway::Nsmp(tier)
            }
        }
    }

    fn bundle(&self) -> &'static Bundle {
        match self {
            TreatmentPathway::PoleMut => &POLEMUT,
            TreatmentPathway::Mmrd => &MMRD,
            TreatmentPathway::P53abn => &P53ABN,
            TreatmentPathway::Nsmp(NsmpPathway::L1camPositive) => &NSMP_L1CAM_POSITIVE,
            TreatmentPathway::Nsmp(NsmpPathway::HighRisk) => &NSMP_HIGH,
            TreatmentPathway::Nsmp(NsmpPathway::LowRisk) => &NSMP_LOW,
            TreatmentPathway::Nsmp(NsmpPathway::IntermediateRisk) => &NSMP_INTERMEDIATE,
        }
    }

    fn rationale(&self, patient: &PatientRecord, probability: f64) -> String {
        let pct = probability * 100.0;
        let stage = patient.stage.as_str();
        match self {
            TreatmentPathway::PoleMut => format!(
                "POLEmut molecular classification with predicted 5-year recurrence risk of \
                 {pct:.1}%. This molecular group has excellent prognosis regardless of stage \
                 ({stage}) or grade."
            ),
            TreatmentPathway::Mmrd => format!(
                "MMR-deficient molecular classification with predicted 5-year recurrence risk \
                 of {pct:.0}%. High tumor mutational burden makes these tumors exceptionally \
                 responsive to immune checkpoint inhibitors."
            ),
            TreatmentPathway::P53abn => format!(
                "p53-abnormal molecular classification with predicted 5-year recurrence risk \
                 of {pct:.0}%. This is the highest-risk molecular group with aggressive biology \
                 that transcends anatomical staging. Anatomical stage ({stage}) significantly \
                 underestimates biological risk."
            ),
            TreatmentPathway::Nsmp(NsmpPathway::L1camPositive) => format!(
                "NSMP with L1CAM positivity (predicted risk {pct:.0}%). L1CAM-positive NSMP has \
                 aggressive behavior similar to p53abn group and requires intensive treatment."
            ),
            TreatmentPathway::Nsmp(NsmpPathway::HighRisk) => format!(
                "NSMP classified as high-risk based on clinicopathological features (predicted \
                 risk {pct:.0}%). Risk-adapted approach indicated."
            ),
            TreatmentPathway::Nsmp(NsmpPathway::LowRisk) => format!(
                "Low-risk NSMP (predicted risk {pct:.0}%). Favorable molecular profile combined \
                 with early-stage disease may allow treatment de-escalation."
            ),
            TreatmentPathway::Nsmp(NsmpPathway::IntermediateRisk) => format!(
                "NSMP with intermediate risk (predicted {pct:.0}%). Treatment should be \
                 individualized based on conventional clinicopathological features."
            ),
        }
    }
}

/// Build the recommendation for a patient and its prediction.
pub fn recommend(patient: &PatientRecord, prediction: &PredictionResult) -> Recommendation {
    let pathway = TreatmentPathway::select(patient, prediction);
    let bundle = pathway.bundle();

    Recommendation {
        primary_action: bundle.primary_action.to_string(),
        rationale: pathway.rationale(patient, prediction.recurrence_probability),
        evidence: bundle.evidence.iter().map(Evidence::to_item).collect(),
        trial_eligibility: vec![bundle.trial.to_trial()],
        alerts: bundle
            .alerts
            .iter()
            .map(|(severity, message)| Alert {
                severity: *severity,
                message: message.to_string(),
            })
            .collect(),
        contraindications: bundle
            .contraindications
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

struct Bundle {
    primary_action: &'static str,
    evidence: &'static [Evidence],
    trial: Trial,
    alerts: &'static [(AlertSeverity, &'static str)],
    contraindications: &'static [&'static str],
}

struct Evidence {
    source: &'static str,
    finding: &'static str,
    hazard_ratio: Option<f64>,
    p_value: Option<f64>,
}

impl Evidence {
    const fn cite(source: &'static str, finding: &'static str) -> Self {
        Self {
            source,
            finding,
            hazard_ratio: None,
            p_value: None,
        }
    }

    fn to_item(&self) -> EvidenceItem {
        EvidenceItem {
            source: self.source.to_string(),
            finding: self.finding.to_string(),
            hazard_ratio: self.hazard_ratio,
            p_value: self.p_value,
            url: None,
        }
    }
}

struct Trial {
    name: &'static str,
    intervention: &'static str,
    eligibility_note: &'static str,
}

impl Trial {
    fn to_trial(&self) -> ClinicalTrial {
        ClinicalTrial {
            name: self.name.to_string(),
            intervention: self.intervention.to_string(),
            status: "Recruiting".to_string(),
            eligibility_note: Some(self.eligibility_note.to_string()),
        }
    }
}

const POLEMUT: Bundle = Bundle {
    primary_action: "Consider Treatment De-escalation / Observation",
    evidence: &[
        Evidence::cite(
            "PORTEC-3 POLEmut subgroup analysis",
            "100% 5-year recurrence-free survival in POLEmut patients regardless of adjuvant treatment",
        ),
        Evidence::cite(
            "Leon-Castillo et al., Lancet Oncol 2020",
            "POLEmut tumors have favorable outcomes even with high-grade histology",
        ),
    ],
    trial: Trial {
        name: "RAINBO POLEmut-BLUE",
        intervention: "Observation vs Vaginal Brachytherapy",
        eligibility_note: "Evaluating de-escalation in POLEmut patients",
    },
    alerts: &[(
        AlertSeverity::Info,
        "Excellent prognosis: POLEmut biology overrides adverse pathological features",
    )],
    contraindications: &["None specific - consider observation"],
};

const MMRD: Bundle = Bundle {
    primary_action: "Standard Adjuvant Therapy + Consider Immunotherapy",
    evidence: &[
        Evidence::cite(
            "KEYNOTE-158 (Pembrolizumab in MSI-H/dMMR)",
            "ORR 57.1% in MSI-H/dMMR endometrial cancer",
        ),
        Evidence::cite(
            "GARNET trial (Dostarlimab)",
            "ORR 42.3% in dMMR endometrial cancer",
        ),
        Evidence::cite(
            "FDA approval 2021",
            "Pembrolizumab and dostarlimab approved for dMMR solid tumors",
        ),
    ],
    trial: Trial {
        name: "RAINBO MMRd-GREEN",
        intervention: "Radiotherapy ± Durvalumab (PD-L1 inhibitor)",
        eligibility_note: "Evaluating immunotherapy benefit in MMRd patients",
    },
    alerts: &[
        (
            AlertSeverity::Warning,
            "Lynch syndrome screening recommended: Perform germline genetic testing for hereditary MMR mutations",
        ),
        (
            AlertSeverity::Info,
            "High immunogenicity: Consider checkpoint inhibitors for advanced/recurrent disease",
        ),
    ],
    contraindications: &[
        "Check autoimmune history before immunotherapy",
        "Monitor for immune-related adverse events",
    ],
};

const P53ABN: Bundle = Bundle {
    primary_action: "Aggressive Multimodal Therapy: Chemoradiotherapy",
    evidence: &[
        Evidence {
            source: "PORTEC-3 10-year follow-up (de Boer et al., 2023)",
            finding: "p53abn patients: OS 52.7% with CTRT vs 36.6% with RT alone",
            hazard_ratio: Some(0.52),
            p_value: Some(0.021),
        },
        Evidence::cite(
            "PORTEC-3 molecular analysis",
            "p53abn has worst outcomes regardless of stage; benefits most from chemotherapy",
        ),
        Evidence::cite(
            "ESGO/ESTRO/ESP 2021 guidelines",
            "p53abn endometrioid cancers should be treated similar to serous carcinomas",
        ),
    ],
    trial: Trial {
        name: "RAINBO p53abn-RED",
        intervention: "Chemoradiotherapy + Olaparib (PARP inhibitor)",
        eligibility_note: "Evaluating PARP inhibitor benefit in p53abn patients",
    },
    alerts: &[
        (
            AlertSeverity::Critical,
            "Aggressive biology: Systemic therapy is critical regardless of early anatomical stage",
        ),
        (
            AlertSeverity::Warning,
            "Stage-based risk estimate significantly underestimates actual biological risk",
        ),
    ],
    contraindications: &[
        "Assess ECOG performance status for chemotherapy tolerance",
        "Check cardiac function (anthracyclines)",
        "Renal function (cisplatin/carboplatin)",
    ],
};

const NSMP_EVIDENCE: &[Evidence] = &[
    Evidence {
        source: "Bosse et al., J Clin Oncol 2018",
        finding: "L1CAM expression is independent adverse prognostic factor in endometrioid EC",
        hazard_ratio: Some(2.5),
        p_value: Some(0.002),
    },
    Evidence::cite(
        "CTNNB1 prognostic analysis",
        "CTNNB1-mutated NSMP associated with favorable outcomes",
    ),
];

const NSMP_TRIAL: Trial = Trial {
    name: "RAINBO NSMP-ORANGE",
    intervention: "Risk-adapted approach (Observation vs RT vs CTRT)",
    eligibility_note: "Evaluating treatment stratification in NSMP patients",
};

const NSMP_CONTRAINDICATIONS: &[&str] =
    &["Individualize based on age, comorbidities, and risk factors"];

const NSMP_L1CAM_POSITIVE: Bundle = Bundle {
    primary_action: "Treat as High-Risk: Consider Chemoradiotherapy",
    evidence: NSMP_EVIDENCE,
    trial: NSMP_TRIAL,
    alerts: &[(
        AlertSeverity::Warning,
        "L1CAM positivity elevates NSMP from intermediate to high-risk biology",
    )],
    contraindications: NSMP_CONTRAINDICATIONS,
};

const NSMP_HIGH: Bundle = Bundle {
    primary_action: "Standard Adjuvant Therapy: Consider Chemotherapy + Radiotherapy",
    evidence: NSMP_EVIDENCE,
    trial: NSMP_TRIAL,
    alerts: &[(
        AlertSeverity::Info,
        "High-risk NSMP: Conventional features drive treatment intensification",
    )],
    contraindications: NSMP_CONTRAINDICATIONS,
};

const NSMP_LOW: Bundle = Bundle {
    primary_action: "Consider De-escalation: Observation or Vaginal Brachytherapy",
    evidence: NSMP_EVIDENCE,
    trial: NSMP_TRIAL,
    alerts: &[(
        AlertSeverity::Info,
        "Low-risk NSMP: Consider individualized de-escalation approach",
    )],
    contraindications: NSMP_CONTRAINDICATIONS,
};

const NSMP_INTERMEDIATE: Bundle = Bundle {
    primary_action: "Risk-Adapted Therapy: Radiotherapy ± Chemotherapy",
    evidence: NSMP_EVIDENCE,
    trial: NSMP_TRIAL,
    alerts: &[(
        AlertSeverity::Info,
        "Heterogeneous group: Integrate molecular and conventional risk factors",
    )],
    contraindications: NSMP_CONTRAINDICATIONS,
};
