//! FIGO 2023 staging with molecular integration.
//!
//! The anatomical stage is first reduced to its stage group, then a
//! per-group rule table decides the integrated stage string and whether a
//! favorable (`m1`/`1`) or aggressive (`2`) molecular suffix applies.
//!
//! Two signals are deliberately independent here: "aggressive molecular"
//! fires on the p53abn group *or* on a raw p53 "Abnormal" result, so an
//! MMRd tumour with coincidentally abnormal p53 still reads as aggressive
//! to the staging table even though the classifier called it MMRd.

use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::patient::{NOT_TESTED, PatientRecord};
use oncorisk_core::models::staging::{IntegratedStage, StageGroup, StageModifier};

const AGGRESSIVE_HISTOTYPES: [&str; 5] = [
    "serous",
    "clear cell",
    "carcinosarcoma",
    "undifferentiated",
    "dedifferentiated",
];

const SUBSTANTIAL_LVSI: [&str; 3] = ["substantial", "present", "extensive"];

/// Raw staging inputs as clinical strings.
///
/// Molecular markers that were never reported must be passed as
/// "Not Tested"; [`StagingInput::from_patient`] does that substitution.
#[derive(Debug, Clone, Copy)]
pub struct StagingInput<'a> {
    pub anatomical_stage: &'a str,
    pub histology: &'a str,
    pub grade: &'a str,
    pub lvsi: &'a str,
    pub molecular_group: MolecularGroup,
    pub pole_status: &'a str,
    pub mmr_status: &'a str,
    pub p53_status: &'a str,
    pub myometrial_invasion: &'a str,
    pub lymph_nodes: &'a str,
}

impl<'a> StagingInput<'a> {
    pub fn from_patient(patient: &'a PatientRecord, molecular_group: MolecularGroup) -> Self {
        Self {
            anatomical_stage: patient.stage.as_str(),
            histology: patient.histology.as_str(),
            grade: patient.grade.as_str(),
            lvsi: patient.lvsi.as_str(),
            molecular_group,
            pole_status: patient.pole_status.as_ref().map_or(NOT_TESTED, |s| s.as_str()),
            mmr_status: patient.mmr_status.as_ref().map_or(NOT_TESTED, |s| s.as_str()),
            p53_status: patient.p53_status.as_ref().map_or(NOT_TESTED, |s| s.as_str()),
            myometrial_invasion: patient.myometrial_invasion.as_str(),
            lymph_nodes: patient.lymph_nodes.as_str(),
        }
    }
}

/// The boolean facts every staging rule is written against.
#[derive(Debug, Clone, Copy)]
struct Signals {
    favorable_molecular: bool,
    aggressive_molecular: bool,
    aggressive_histotype: bool,
    substantial_lvsi: bool,
}

impl Signals {
    fn of(input: &StagingInput<'_>) -> Self {
        let histology = input.histology.to_lowercase();
        let lvsi = input.lvsi.to_lowercase();
        Self {
            favorable_molecular: input.molecular_group.is_favorable(),
            aggressive_molecular: input.molecular_group.is_aggressive()
                || input.p53_status == "Abnormal",
            aggressive_histotype: AGGRESSIVE_HISTOTYPES.iter().any(|h| histology.contains(h)),
            substantial_lvsi: SUBSTANTIAL_LVSI.contains(&lvsi.as_str()),
        }
    }
}

/// Reduce an anatomical stage string to its group.
///
/// Longest Roman prefix wins, so "IV" and "III" never fall into "I".
/// Anything unrecognised degrades to stage group I.
pub fn stage_group(anatomical_stage: &str) -> StageGroup {
    let stage = anatomical_stage.trim().to_uppercase();
    if stage.starts_with("IV") {
        StageGroup::IV
    } else if stage.starts_with("III") {
        StageGroup::III
    } else if stage.starts_with("II") {
        StageGroup::II
    } else {
        StageGroup::I
    }
}

/// Outcome of one row of the rule table.
struct StagedAs {
    integrated: String,
    modifier: Option<StageModifier>,
    rationale: Vec<String>,
}

impl StagedAs {
    fn new(integrated: impl Into<String>) -> Self {
        Self {
            integrated: integrated.into(),
            modifier: None,
            rationale: Vec::new(),
        }
    }

    fn because(mut self, reason: impl Into<String>) -> Self {
        self.rationale.push(reason.into());
        self
    }

    fn modified(mut self, modifier: StageModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    fn suffixed(mut self, suffix: &str, modifier: StageModifier) -> Self {
        self.integrated.push_str(suffix);
        self.modifier = Some(modifier);
        self
    }
}

/// Compute the molecular-integrated stage. Total over its input domain.
pub fn stage(input: &StagingInput<'_>) -> IntegratedStage {
    let anatomical = input.anatomical_stage.trim().to_uppercase();
    let group = stage_group(&anatomical);
    let signals = Signals::of(input);

    let staged = match group {
        StageGroup::I => stage_one(&anatomical, input, signals),
        StageGroup::II => stage_two(input, signals),
        StageGroup::III => stage_three(&anatomical, input, signals),
        StageGroup::IV => stage_four(&anatomical),
    };

    IntegratedStage {
        anatomical_stage: anatomical,
        integrated_stage: staged.integrated,
        stage_group: group,
        modifier: staged.modifier,
        rationale: staged.rationale.join(" "),
        prognosis_impact: prognosis_impact(input.molecular_group, signals),
        clinical_implications: clinical_implications(input, signals),
    }
}

fn stage_one(anatomical: &str, input: &StagingInput<'_>, s: Signals) -> StagedAs {
    let group = input.molecular_group;
    let histology = input.histology;

    match anatomical {
        "IA" | "1A" => {
            let base =
                StagedAs::new("IA").because("Tumor confined to uterus with <50% myometrial invasion");
            if s.favorable_molecular {
                StagedAs { integrated: "IAm1".into(), ..base }
                    .modified(StageModifier::Favorable)
                    .because(format!(
                        "Favorable molecular profile ({group}) - indicates excellent prognosis"
                    ))
            } else if s.aggressive_molecular && !s.aggressive_histotype {
                StagedAs { integrated: "IC".into(), ..base }
                    .modified(StageModifier::Aggressive)
                    .because("p53 abnormal molecular profile - upstaged to IC per FIGO 2023")
            } else if s.aggressive_histotype {
                StagedAs { integrated: "IC".into(), ..base }
                    .because(format!("Aggressive histotype ({histology}) - staged as IC"))
            } else {
                base.because("NSMP with favorable features - standard Stage IA")
            }
        }
        "IB" | "1B" => {
            let base = StagedAs::new("IB")
                .because("Tumor confined to uterus with ≥50% myometrial invasion");
            if s.favorable_molecular {
                StagedAs { integrated: "IBm1".into(), ..base }
                    .modified(StageModifier::Favorable)
                    .because(format!(
                        "Favorable molecular profile ({group}) - better prognosis than expected"
                    ))
            } else if s.aggressive_molecular {
                StagedAs { integrated: "IC".into(), ..base }
                    .modified(StageModifier::Aggressive)
                    .because("p53 abnormal - upstaged to IC per FIGO 2023")
            } else if s.aggressive_histotype {
                StagedAs { integrated: "IC".into(), ..base }
                    .because(format!("Aggressive histotype ({histology}) - staged as IC"))
            } else {
                base
            }
        }
        "IC" | "1C" => StagedAs::new("IC")
            .because("Stage IC - aggressive features (p53abn or aggressive histotype)"),
        other => StagedAs::new(other),
    }
}

fn stage_two(input: &StagingInput<'_>, s: Signals) -> StagedAs {
    let base = StagedAs::new("IIA").because("Tumor invades cervical stroma");

    // Substantial LVSI is never downgraded by favorable molecular findings.
    if s.substantial_lvsi {
        StagedAs { integrated: "IIB".into(), ..base }
            .because("Substantial LVSI present - staged as IIB")
    } else if s.favorable_molecular {
        StagedAs { integrated: "IIAm1".into(), ..base }
            .modified(StageModifier::Favorable)
            .because(format!("Favorable molecular profile ({})", input.molecular_group))
    } else if s.aggressive_molecular {
        StagedAs { integrated: "IIC".into(), ..base }
            .modified(StageModifier::Aggressive)
            .because("p53 abnormal - upstaged to IIC")
    } else {
        base
    }
}

fn stage_three(anatomical: &str, input: &StagingInput<'_>, s: Signals) -> StagedAs {
    let group = input.molecular_group;

    if anatomical.contains('C') {
        // "IIIC1ii" (micrometastasis substage) is staged with the para-aortic row.
        let nodal = if anatomical.contains("C2") || anatomical.contains("C1I") {
            StagedAs::new("IIIC2").because("Para-aortic lymph node involvement")
        } else {
            StagedAs::new("IIIC1").because("Pelvic lymph node involvement")
        };
        if s.aggressive_molecular {
            nodal
                .suffixed("2", StageModifier::Aggressive)
                .because("p53 abnormal - worst prognostic subgroup")
        } else if s.favorable_molecular {
            nodal
                .suffixed("1", StageModifier::Favorable)
                .because(format!(
                    "Favorable molecular ({group}) - better prognosis within stage"
                ))
        } else {
            nodal
        }
    } else if anatomical.contains('B') {
        let staged = StagedAs::new("IIIB").because("Vaginal and/or parametrial involvement");
        if s.aggressive_molecular {
            staged.suffixed("2", StageModifier::Aggressive)
        } else {
            staged
        }
    } else if anatomical.contains('A') {
        let staged = StagedAs::new("IIIA").because("Tumor invades serosa and/or adnexa");
        if s.aggressive_molecular {
            staged.suffixed("2", StageModifier::Aggressive)
        } else if s.favorable_molecular {
            staged.suffixed("1", StageModifier::Favorable)
        } else {
            staged
        }
    } else {
        StagedAs::new("III").because("Stage III - tumor extends beyond uterus")
    }
}

fn stage_four(anatomical: &str) -> StagedAs {
    if anatomical.contains('B') {
        StagedAs::new("IVB").because("Distant metastases including abdominal/inguinal nodes")
    } else {
        StagedAs::new("IVA").because("Tumor invades bladder and/or bowel mucosa")
    }
}

fn prognosis_impact(group: MolecularGroup, s: Signals) -> String {
    if s.favorable_molecular {
        format!(
            "FAVORABLE: {group} molecular profile significantly improves prognosis. \
             5-year survival rates are excellent (>90%) even with adverse pathological features. \
             May allow de-escalation of adjuvant therapy in appropriate cases."
        )
    } else if s.aggressive_molecular {
        "AGGRESSIVE: p53 abnormal molecular profile indicates high-risk biology. \
         Higher recurrence rates and poorer survival compared to other molecular groups. \
         Warrants intensified treatment regardless of anatomical stage."
            .to_string()
    } else {
        "INTERMEDIATE: NSMP (No Specific Molecular Profile). \
         Prognosis determined primarily by traditional clinicopathological features. \
         Further risk stratification by L1CAM and CTNNB1 may be helpful."
            .to_string()
    }
}

/// One clinical-implications paragraph and the condition that includes it.
struct ImplicationRule {
    applies: fn(&StagingInput<'_>, Signals) -> bool,
    text: fn(&StagingInput<'_>) -> String,
}

/// Evaluated top to bottom: molecular group, then LVSI, then histotype.
const IMPLICATION_RULES: &[ImplicationRule] = &[
    ImplicationRule {
        applies: |input, _| input.molecular_group == MolecularGroup::PoleMut,
        text: |_| {
            "POLEmut: Consider observation alone for Stage I-II. \
             PORTEC-4a trial suggests adjuvant therapy may be omitted."
                .to_string()
        },
    },
    ImplicationRule {
        applies: |input, _| input.molecular_group == MolecularGroup::Mmrd,
        text: |_| {
            "MMRd: Screen for Lynch syndrome. Consider immunotherapy for advanced/recurrent disease. \
             Pembrolizumab/dostarlimab are FDA-approved options."
                .to_string()
        },
    },
    ImplicationRule {
        applies: |input, _| input.molecular_group == MolecularGroup::P53abn,
        text: |_| {
            "p53abn: Recommend combined chemoradiotherapy per PORTEC-3. \
             Consider clinical trials (RAINBO p53abn-RED: CTRT + olaparib). \
             Close surveillance warranted."
                .to_string()
        },
    },
    ImplicationRule {
        applies: |input, _| input.molecular_group == MolecularGroup::Nsmp,
        text: |_| {
            "NSMP: Treatment based on clinicopathological risk factors. \
             Consider adjuvant therapy per ESGO/ESTRO/ESP guidelines based on stage and grade."
                .to_string()
        },
    },
    ImplicationRule {
        applies: |_, s| s.substantial_lvsi,
        text: |_| {
            "Substantial LVSI: Associated with increased risk of nodal involvement and recurrence."
                .to_string()
        },
    },
    ImplicationRule {
        applies: |_, s| s.aggressive_histotype,
        text: |input| {
            format!(
                "Aggressive histotype ({}): Recommend adjuvant chemotherapy ± radiation.",
                input.histology
            )
        },
    },
];

fn clinical_implications(input: &StagingInput<'_>, s: Signals) -> String {
    IMPLICATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(input, s))
        .map(|rule| (rule.text)(input))
        .collect::<Vec<_>>()
        .join(" ")
}
