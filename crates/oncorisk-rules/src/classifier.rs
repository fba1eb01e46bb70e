//! ProMisE/TCGA hierarchical molecular classification.
//!
//! Strict first-match order:
//!
//! 1. POLE pathogenic mutation → POLEmut, whatever else is found
//! 2. MMR deficiency → MMRd
//! 3. Abnormal p53 → p53abn
//! 4. Otherwise NSMP, stratified by L1CAM (high risk) then CTNNB1
//!    (intermediate), else low risk
//!
//! Every downstream component relies on this order: nothing may rank a
//! group above POLEmut or let p53 override an MMRd call.

use oncorisk_core::models::molecular::{
    CLASSIFICATION_CONFIDENCE, MolecularClassification, MolecularGroup, NsmpRisk,
};
use oncorisk_core::models::patient::{
    Ctnnb1Status, L1camStatus, MmrStatus, P53Status, PatientRecord, PoleStatus,
};

/// Classify a patient into exactly one molecular group. Total: absent or
/// "Not Tested" markers simply fail to match their step.
pub fn classify(patient: &PatientRecord) -> MolecularClassification {
    if patient.pole_status == Some(PoleStatus::Mutated) {
        return MolecularClassification {
            group: MolecularGroup::PoleMut,
            subtype: None,
            confidence: CLASSIFICATION_CONFIDENCE,
            rationale: "POLE pathogenic mutation detected. This is the ProMisE POLEmut group."
                .to_string(),
            clinical_significance: "Excellent prognosis regardless of stage or grade. \
                Ultramutated tumors with very low recurrence risk. \
                PORTEC-3 data shows 100% 5-year RFS regardless of adjuvant treatment. \
                Consider treatment de-escalation. \
                Eligible for RAINBO POLEmut-BLUE trial (observation vs RT)."
                .to_string(),
        };
    }

    if patient.mmr_status == Some(MmrStatus::Deficient) {
        let protein = patient
            .mmr_protein_lost
            .as_ref()
            .map_or("unspecified protein", |p| p.as_str());
        return MolecularClassification {
            group: MolecularGroup::Mmrd,
            subtype: Some(format!("MMRd-{protein}")),
            confidence: CLASSIFICATION_CONFIDENCE,
            rationale: format!(
                "Mismatch repair deficiency detected (loss of {protein}). \
                 This is the ProMisE MMRd group."
            ),
            clinical_significance: "Intermediate prognosis with high tumor mutational burden. \
                High neoantigen load makes these tumors exceptionally responsive to \
                immune checkpoint inhibitors (pembrolizumab, dostarlimab, durvalumab). \
                Should screen for Lynch syndrome (germline MMR mutation). \
                Eligible for RAINBO MMRd-GREEN trial (durvalumab + RT). \
                FDA-approved indications for checkpoint inhibitors in MMRd tumors."
                .to_string(),
        };
    }

    if patient.p53_status == Some(P53Status::Abnormal) {
        let pattern = patient
            .p53_pattern
            .as_ref()
            .map_or("unspecified", |p| p.as_str());
        return MolecularClassification {
            group: MolecularGroup::P53abn,
            subtype: Some(format!("p53abn-{pattern}")),
            confidence: CLASSIFICATION_CONFIDENCE,
            rationale: format!(
                "p53 abnormal pattern detected ({pattern} on IHC). \
                 This is the ProMisE p53abn group."
            ),
            clinical_significance: "Worst prognosis group with aggressive tumor biology. \
                High recurrence risk regardless of anatomical stage. \
                PORTEC-3 10-year data shows significant benefit from chemoradiotherapy \
                (OS HR 0.52, p=0.021). \
                Systemic therapy is critical - requires multimodal treatment. \
                Eligible for RAINBO p53abn-RED trial (CTRT + olaparib PARP inhibitor). \
                Anatomical staging alone underestimates biological risk."
                .to_string(),
        };
    }

    classify_nsmp(patient)
}

fn classify_nsmp(patient: &PatientRecord) -> MolecularClassification {
    let tier = nsmp_risk(patient);

    let (rationale, significance) = match tier {
        NsmpRisk::High => (
            "No POLE/MMR/p53 alterations, but L1CAM expression >10% detected. \
             This indicates high-risk NSMP.",
            "L1CAM-positive NSMP has aggressive behavior similar to p53abn group. \
             Significantly worse outcomes than L1CAM-negative NSMP. \
             L1CAM is an independent adverse prognostic factor. \
             Should be treated as high-risk disease with aggressive therapy. \
             Eligible for RAINBO NSMP-ORANGE trial (risk-adapted approach).",
        ),
        NsmpRisk::Intermediate => (
            "No POLE/MMR/p53 alterations. CTNNB1 mutation detected. \
             This indicates intermediate-risk NSMP.",
            "CTNNB1-mutated NSMP has intermediate prognosis. \
             Associated with younger age and favorable outcomes compared to p53abn. \
             Risk-adapted treatment based on conventional clinicopathological features. \
             Eligible for RAINBO NSMP-ORANGE trial.",
        ),
        NsmpRisk::Low => (
            "No POLE/MMR/p53 alterations. L1CAM negative and CTNNB1 wild-type. \
             This indicates low-risk NSMP.",
            "Heterogeneous group with variable outcomes. \
             Risk depends on conventional clinicopathological features (stage, grade, LVSI). \
             Generally favorable prognosis in early-stage disease. \
             May benefit from treatment de-escalation in selected cases. \
             Eligible for RAINBO NSMP-ORANGE trial (observation vs RT in early-stage).",
        ),
    };

    MolecularClassification {
        group: MolecularGroup::Nsmp,
        subtype: Some(tier.as_str().to_string()),
        confidence: CLASSIFICATION_CONFIDENCE,
        rationale: rationale.to_string(),
        clinical_significance: significance.to_string(),
    }
}

/// NSMP sub-stratification: L1CAM positivity wins over a CTNNB1 mutation.
pub fn nsmp_risk(patient: &PatientRecord) -> NsmpRisk {
    if patient.l1cam_status == Some(L1camStatus::Positive) {
        NsmpRisk::High
    } else if patient.ctnnb1_status == Some(Ctnnb1Status::Mutated) {
        NsmpRisk::Intermediate
    } else {
        NsmpRisk::Low
    }
}
