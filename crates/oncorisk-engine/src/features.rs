//! Patient record to feature vector.
//!
//! Prediction and explanation both go through [`encode`], so the two
//! always see the same vector for the same patient.

use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::patient::PatientRecord;
use oncorisk_model::schema::{FEATURE_COUNT, FeatureVector, NOT_TESTED_SENTINEL};

fn code(index: Option<usize>) -> f64 {
    index.map_or(NOT_TESTED_SENTINEL, |i| i as f64)
}

/// Encode in schema order. Absent, "Not Tested" and unrecognised
/// categories all encode to the sentinel.
pub(crate) fn encode(patient: &PatientRecord, group: MolecularGroup) -> FeatureVector {
    let values: [f64; FEATURE_COUNT] = [
        group.code() as f64,
        code(patient.p53().code()),
        code(patient.pole().code()),
        code(patient.lvsi.code()),
        code(patient.l1cam().code()),
        code(patient.myometrial_invasion.code()),
        code(patient.grade.code()),
        code(patient.stage.code()),
        f64::from(patient.age),
        code(patient.mmr().code()),
        code(patient.ctnnb1().code()),
        code(patient.histology.code()),
        code(patient.lymph_nodes.code()),
        patient.bmi,
        f64::from(patient.ecog_status),
        if patient.diabetes { 1.0 } else { 0.0 },
    ];

    FeatureVector::new(values.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncorisk_core::models::patient::{
        FigoStage, Grade, Histology, LymphNodeStatus, Lvsi, MyometrialInvasion, P53Status,
        PoleStatus,
    };

    fn patient() -> PatientRecord {
        PatientRecord {
            patient_id: None,
            age: 64,
            bmi: 32.5,
            diabetes: true,
            ecog_status: 1,
            stage: FigoStage::IIIC1,
            histology: Histology::Serous,
            grade: Grade::G3,
            myometrial_invasion: MyometrialInvasion::HalfOrMore,
            lvsi: Lvsi::Substantial,
            lymph_nodes: LymphNodeStatus::PelvicPositive,
            pole_status: Some(PoleStatus::WildType),
            mmr_status: None,
            mmr_protein_lost: None,
            p53_status: Some(P53Status::NotTested),
            p53_pattern: None,
            l1cam_status: None,
            ctnnb1_status: None,
            er_percent: None,
            pr_percent: None,
        }
    }

    #[test]
    fn encodes_in_schema_order() {
        let v = encode(&patient(), MolecularGroup::Nsmp);
        assert_eq!(
            v.values(),
            &[
                2.0, -1.0, 0.0, 2.0, -1.0, 1.0, 2.0, 5.0, 64.0, -1.0, -1.0, 1.0, 1.0, 32.5, 1.0,
                1.0
            ]
        );
    }

    #[test]
    fn first_category_encodes_to_zero_not_sentinel() {
        let p = PatientRecord {
            stage: FigoStage::IA,
            lvsi: Lvsi::Absent,
            ..patient()
        };
        let v = encode(&p, MolecularGroup::PoleMut);
        assert_eq!(v.get("molecular_group_encoded"), Some(0.0));
        assert_eq!(v.get("stage_encoded"), Some(0.0));
        assert_eq!(v.get("lvsi_encoded"), Some(0.0));
        assert_eq!(v.get("pole_encoded"), Some(0.0));
    }

    #[test]
    fn unrecognised_labels_encode_to_sentinel() {
        let p = PatientRecord {
            stage: FigoStage::from("IC"),
            histology: Histology::from("Undifferentiated"),
            pole_status: Some(PoleStatus::from("Pending")),
            ..patient()
        };
        let v = encode(&p, MolecularGroup::Nsmp);
        assert_eq!(v.get("stage_encoded"), Some(-1.0));
        assert_eq!(v.get("histology_encoded"), Some(-1.0));
        assert_eq!(v.get("pole_encoded"), Some(-1.0));
    }
}
