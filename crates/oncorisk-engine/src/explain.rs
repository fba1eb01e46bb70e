//! Per-feature explanation of a prediction.
//!
//! The attributor is called once per explanation on the same encoded
//! vector the scorer saw. Contributions under the noise floor are dropped,
//! the rest are ranked by absolute size. Interactions come from a fixed
//! table of clinically known biomarker pairs, not from the attributions.

use std::sync::Arc;

use oncorisk_core::models::explanation::{
    Direction, Explanation, FeatureContribution, FeatureInteraction,
};
use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::patient::{
    FigoStage, Grade, L1camStatus, Lvsi, P53Status, PatientRecord,
};
use oncorisk_core::models::prediction::PredictionResult;
use oncorisk_model::collaborator::Attributor;
use oncorisk_model::schema::{FEATURE_COUNT, FEATURE_NAMES};

use crate::error::EngineError;
use crate::features::encode;

/// Attributions smaller than this in absolute value are not reported.
pub const NOISE_FLOOR: f64 = 0.001;

/// How many factors each top list holds.
pub const TOP_FACTORS: usize = 3;

const DISPLAY_NAMES: [(&str, &str); 15] = [
    ("p53", "p53 Status"),
    ("pole", "POLE Status"),
    ("lvsi", "LVSI"),
    ("l1cam", "L1CAM Status"),
    ("myometrial", "Myometrial Invasion"),
    ("grade", "Grade"),
    ("stage", "FIGO Stage"),
    ("age", "Age"),
    ("mmr", "MMR Status"),
    ("ctnnb1", "CTNNB1 Status"),
    ("histology", "Histology"),
    ("lymph_nodes", "Lymph Node Status"),
    ("bmi", "BMI"),
    ("ecog_status", "ECOG Status"),
    ("diabetes", "Diabetes"),
];

/// Human-readable name for a schema feature.
pub fn display_name(feature: &str) -> String {
    if feature.starts_with("molecular_group") {
        return "Molecular Classification".to_string();
    }
    let clean = feature
        .trim_end_matches("_encoded")
        .trim_end_matches("_int");
    DISPLAY_NAMES
        .iter()
        .find(|(key, _)| *key == clean)
        .map_or_else(|| clean.replace('_', " "), |(_, name)| name.to_string())
}

fn display_value(feature: &str, patient: &PatientRecord, group: MolecularGroup) -> String {
    match feature {
        "molecular_group_encoded" => group.to_string(),
        "p53_encoded" => patient.p53().to_string(),
        "pole_encoded" => patient.pole().to_string(),
        "lvsi_encoded" => patient.lvsi.to_string(),
        "l1cam_encoded" => patient.l1cam().to_string(),
        "myometrial_encoded" => patient.myometrial_invasion.to_string(),
        "grade_encoded" => patient.grade.to_string(),
        "stage_encoded" => patient.stage.to_string(),
        "age" => format!("{} years", patient.age),
        "mmr_encoded" => patient.mmr().to_string(),
        "ctnnb1_encoded" => patient.ctnnb1().to_string(),
        "histology_encoded" => patient.histology.to_string(),
        "lymph_nodes_encoded" => patient.lymph_nodes.to_string(),
        "bmi" => format!("{:.1}", patient.bmi),
        "ecog_status" => format!("ECOG {}", patient.ecog_status),
        "diabetes_int" => (if patient.diabetes { "Yes" } else { "No" }).to_string(),
        other => other.to_string(),
    }
}

/// A known synergy between two features, reported when both survive the
/// noise floor and the condition holds for the patient.
struct InteractionRule {
    first: &'static str,
    first_display: &'static str,
    second: &'static str,
    second_display: &'static str,
    magnitude: f64,
    interpretation: &'static str,
    applies: fn(&PatientRecord, MolecularGroup) -> bool,
}

const INTERACTION_RULES: &[InteractionRule] = &[
    InteractionRule {
        first: "p53_encoded",
        first_display: "p53 Status",
        second: "stage_encoded",
        second_display: "FIGO Stage",
        magnitude: 0.08,
        interpretation: "p53 abnormality overrides favorable early stage, indicating aggressive \
                         biology that transcends anatomical staging.",
        applies: |patient, _| {
            patient.p53_status == Some(P53Status::Abnormal)
                && matches!(patient.stage, FigoStage::IA | FigoStage::IB)
        },
    },
    InteractionRule {
        first: "l1cam_encoded",
        first_display: "L1CAM Status",
        second: "molecular_group_encoded",
        second_display: "Molecular Group",
        magnitude: 0.12,
        interpretation: "L1CAM positivity in NSMP tumors dramatically increases risk, shifting \
                         behavior toward p53abn-like biology.",
        applies: |patient, group| {
            patient.l1cam_status == Some(L1camStatus::Positive) && group == MolecularGroup::Nsmp
        },
    },
    InteractionRule {
        first: "lvsi_encoded",
        first_display: "LVSI",
        second: "grade_encoded",
        second_display: "Grade",
        magnitude: 0.05,
        interpretation: "Substantial LVSI combined with high grade indicates aggressive local \
                         invasion and high metastatic potential.",
        applies: |patient, _| patient.lvsi == Lvsi::Substantial && patient.grade == Grade::G3,
    },
];

pub struct ExplanationAssembler {
    attributor: Arc<dyn Attributor>,
}

impl ExplanationAssembler {
    pub fn new(attributor: Arc<dyn Attributor>) -> Self {
        Self { attributor }
    }

    pub fn explain(
        &self,
        patient: &PatientRecord,
        prediction: &PredictionResult,
    ) -> Result<Explanation, EngineError> {
        let group = prediction.molecular_classification.group;
        let features = encode(patient, group);
        let attribution = self
            .attributor
            .attribute(&features)
            .map_err(EngineError::from_attributor)?;
        if attribution.values.len() != FEATURE_COUNT {
            return Err(EngineError::AttributionShape {
                expected: FEATURE_COUNT,
                actual: attribution.values.len(),
            });
        }

        let mut contributions: Vec<FeatureContribution> = FEATURE_NAMES
            .iter()
            .zip(&attribution.values)
            .filter(|(_, value)| value.abs() >= NOISE_FLOOR)
            .map(|(name, &value)| {
                let direction = Direction::of(value);
                FeatureContribution {
                    name: name.to_string(),
                    display_name: display_name(name),
                    value: display_value(name, patient, group),
                    attribution: value,
                    direction,
                    color: direction.color().to_string(),
                    rank: 0,
                }
            })
            .collect();

        // Stable: equal magnitudes keep schema order.
        contributions.sort_by(|a, b| b.attribution.abs().total_cmp(&a.attribution.abs()));
        for (i, contribution) in contributions.iter_mut().enumerate() {
            contribution.rank = i + 1;
        }

        let top = |direction: Direction| -> Vec<FeatureContribution> {
            contributions
                .iter()
                .filter(|c| c.direction == direction)
                .take(TOP_FACTORS)
                .cloned()
                .collect()
        };
        let top_risk_factors = top(Direction::Risk);
        let top_protective_factors = top(Direction::Protective);

        let interactions = interactions(patient, group, &contributions);
        let summary = summarize(prediction, &top_risk_factors);

        tracing::debug!(
            contributions = contributions.len(),
            interactions = interactions.len(),
            "explanation assembled"
        );

        Ok(Explanation {
            base_value: attribution.base_value,
            prediction: prediction.recurrence_probability,
            features: contributions,
            top_risk_factors,
            top_protective_factors,
            interactions,
            summary,
        })
    }
}

fn interactions(
    patient: &PatientRecord,
    group: MolecularGroup,
    contributions: &[FeatureContribution],
) -> Vec<FeatureInteraction> {
    let survived = |feature: &str| contributions.iter().any(|c| c.name == feature);

    INTERACTION_RULES
        .iter()
        .filter(|rule| survived(rule.first) && survived(rule.second))
        .filter(|rule| (rule.applies)(patient, group))
        .map(|rule| FeatureInteraction {
            first_feature: rule.first.to_string(),
            first_display: rule.first_display.to_string(),
            second_feature: rule.second.to_string(),
            second_display: rule.second_display.to_string(),
            magnitude: rule.magnitude,
            interpretation: rule.interpretation.to_string(),
        })
        .collect()
}

fn summarize(prediction: &PredictionResult, top_risk: &[FeatureContribution]) -> String {
    let category = prediction.risk_category;
    let pct = prediction.risk_percentile;

    match top_risk {
        [] => format!("{category} risk ({pct}% recurrence) based on overall clinical profile"),
        [first] => format!(
            "{category} risk ({pct}% recurrence) driven primarily by {} ({})",
            first.display_name, first.value
        ),
        [first, second, ..] => format!(
            "{category} risk ({pct}% recurrence) driven primarily by {} ({}) and {}",
            first.display_name, first.value, second.display_name
        ),
    }
}
