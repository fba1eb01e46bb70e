use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::validation::ValidationError;

pub use super::categorical::NOT_TESTED;

categorical! {
    /// FIGO anatomical stage.
    #[allow(clippy::upper_case_acronyms)]
    FigoStage {
        IA => "IA",
        IB => "IB",
        II => "II",
        IIIA => "IIIA",
        IIIB => "IIIB",
        IIIC1 => "IIIC1",
        IIIC2 => "IIIC2",
        IVA => "IVA",
        IVB => "IVB",
    }
}

categorical! {
    Histology {
        Endometrioid => "Endometrioid",
        Serous => "Serous",
        ClearCell => "Clear Cell",
        Carcinosarcoma => "Carcinosarcoma",
        Mixed => "Mixed",
        Other => "Other",
    }
}

categorical! {
    Grade {
        G1 => "G1",
        G2 => "G2",
        G3 => "G3",
    }
}

categorical! {
    /// Lymphovascular space invasion.
    Lvsi {
        Absent => "None",
        Focal => "Focal",
        Substantial => "Substantial",
    }
}

categorical! {
    MyometrialInvasion {
        LessThanHalf => "<50%",
        HalfOrMore => "≥50%",
    }
}

categorical! {
    LymphNodeStatus {
        Negative => "Negative",
        PelvicPositive => "Pelvic+",
        ParaAorticPositive => "Para-aortic+",
    }
}

categorical! {
    PoleStatus {
        WildType => "Wild-type",
        Mutated => "Mutated",
        NotTested => "Not Tested",
    }
}

categorical! {
    /// Mismatch-repair protein status.
    MmrStatus {
        Proficient => "Proficient",
        Deficient => "Deficient",
        NotTested => "Not Tested",
    }
}

categorical! {
    MmrProtein {
        Mlh1 => "MLH1",
        Msh2 => "MSH2",
        Msh6 => "MSH6",
        Pms2 => "PMS2",
    }
}

categorical! {
    P53Status {
        WildType => "Wild-type",
        Abnormal => "Abnormal",
        NotTested => "Not Tested",
    }
}

categorical! {
    /// Immunohistochemistry pattern of an abnormal p53.
    P53Pattern {
        Null => "Null",
        Missense => "Missense",
    }
}

categorical! {
    /// L1CAM expression at the >10% cutoff.
    L1camStatus {
        Negative => "Negative",
        Positive => "Positive",
        NotTested => "Not Tested",
    }
}

categorical! {
    Ctnnb1Status {
        WildType => "Wild-type",
        Mutated => "Mutated",
        NotTested => "Not Tested",
    }
}

pub const AGE_RANGE: (u32, u32) = (35, 90);
pub const BMI_RANGE: (f64, f64) = (15.0, 60.0);
pub const MAX_ECOG: u8 = 4;

/// Clinical, pathological and molecular snapshot of one patient.
///
/// Built once per request and only ever read afterwards. Molecular marker
/// fields are optional: an absent marker behaves exactly like "Not Tested".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    #[serde(default)]
    pub patient_id: Option<String>,

    pub age: u32,
    pub bmi: f64,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub ecog_status: u8,

    #[ts(as = "String")]
    pub stage: FigoStage,
    #[ts(as = "String")]
    pub histology: Histology,
    #[ts(as = "String")]
    pub grade: Grade,
    #[ts(as = "String")]
    pub myometrial_invasion: MyometrialInvasion,
    #[ts(as = "String")]
    pub lvsi: Lvsi,
    #[ts(as = "String")]
    pub lymph_nodes: LymphNodeStatus,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub pole_status: Option<PoleStatus>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub mmr_status: Option<MmrStatus>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub mmr_protein_lost: Option<MmrProtein>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub p53_status: Option<P53Status>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub p53_pattern: Option<P53Pattern>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub l1cam_status: Option<L1camStatus>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub ctnnb1_status: Option<Ctnnb1Status>,
    #[serde(default)]
    pub er_percent: Option<f64>,
    #[serde(default)]
    pub pr_percent: Option<f64>,
}

impl PatientRecord {
    /// Parse a record from JSON. Does not validate; see [`Self::ensure_valid`].
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn pole(&self) -> PoleStatus {
        self.pole_status.clone().unwrap_or(PoleStatus::NotTested)
    }

    pub fn mmr(&self) -> MmrStatus {
        self.mmr_status.clone().unwrap_or(MmrStatus::NotTested)
    }

    pub fn p53(&self) -> P53Status {
        self.p53_status.clone().unwrap_or(P53Status::NotTested)
    }

    pub fn l1cam(&self) -> L1camStatus {
        self.l1cam_status.clone().unwrap_or(L1camStatus::NotTested)
    }

    pub fn ctnnb1(&self) -> Ctnnb1Status {
        self.ctnnb1_status.clone().unwrap_or(Ctnnb1Status::NotTested)
    }

    /// Check ranges and conditional fields, returning every violation found.
    ///
    /// Unrecognized categorical labels are not violations: they are carried
    /// through and encoded as "not tested" further down the pipeline.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let (min_age, max_age) = AGE_RANGE;
        if !(min_age..=max_age).contains(&self.age) {
            errors.push(ValidationError::new(
                "age",
                format!("{} is outside range [{min_age}, {max_age}]", self.age),
            ));
        }

        let (min_bmi, max_bmi) = BMI_RANGE;
        if !self.bmi.is_finite() || self.bmi < min_bmi || self.bmi > max_bmi {
            errors.push(ValidationError::new(
                "bmi",
                format!("{} is outside range [{min_bmi}, {max_bmi}]", self.bmi),
            ));
        }

        if self.ecog_status > MAX_ECOG {
            errors.push(ValidationError::new(
                "ecog_status",
                format!("{} is outside range [0, {MAX_ECOG}]", self.ecog_status),
            ));
        }

        for (field, value) in [("er_percent", self.er_percent), ("pr_percent", self.pr_percent)] {
            if let Some(pct) = value
                && (!pct.is_finite() || !(0.0..=100.0).contains(&pct))
            {
                errors.push(ValidationError::new(
                    field,
                    format!("{pct} is outside range [0, 100]"),
                ));
            }
        }

        if self.mmr_status == Some(MmrStatus::Deficient) && self.mmr_protein_lost.is_none() {
            errors.push(ValidationError::new(
                "mmr_protein_lost",
                "required when mmr_status is Deficient",
            ));
        }

        if self.p53_status == Some(P53Status::Abnormal) && self.p53_pattern.is_none() {
            errors.push(ValidationError::new(
                "p53_pattern",
                "required when p53_status is Abnormal",
            ));
        }

        errors
    }

    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}
