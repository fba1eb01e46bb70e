mod support;

use std::sync::Arc;

use oncorisk_core::models::explanation::Direction;
use oncorisk_core::models::prediction::PredictionResult;
use oncorisk_engine::error::EngineError;
use oncorisk_engine::explain::{ExplanationAssembler, display_name};
use oncorisk_engine::risk::RiskEngine;

use support::{FixedAttributor, FixedScorer, UnloadedModel, bundled, scenario_patient, silent_killer};

fn fixed_prediction(probability: f64) -> PredictionResult {
    RiskEngine::new(FixedScorer::new(probability))
        .predict(&silent_killer())
        .unwrap()
}

fn padded(head: &[f64]) -> Vec<f64> {
    let mut values = head.to_vec();
    values.resize(16, 0.0);
    values
}

#[test]
fn drops_noise_and_ranks_by_magnitude() {
    let values = padded(&[0.5, 0.0005, -0.3, 0.2, -0.0009, 0.1, -0.2, 0.05, 0.0, -0.4]);
    let assembler = ExplanationAssembler::new(FixedAttributor::new(values));
    let explanation = assembler
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();

    let names: Vec<&str> = explanation.features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "molecular_group_encoded",
            "mmr_encoded",
            "pole_encoded",
            "lvsi_encoded",
            "grade_encoded",
            "myometrial_encoded",
            "stage_encoded",
        ]
    );
    let ranks: Vec<usize> = explanation.features.iter().map(|f| f.rank).collect();
    assert_eq!(ranks, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn noise_floor_is_inclusive() {
    let values = padded(&[0.001, -0.001, 0.000_999]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();
    assert_eq!(explanation.features.len(), 2);
}

#[test]
fn direction_and_colour_follow_sign() {
    let values = padded(&[0.5, 0.0, -0.3]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();

    for feature in &explanation.features {
        let expected = if feature.attribution > 0.0 {
            Direction::Risk
        } else {
            Direction::Protective
        };
        assert_eq!(feature.direction, expected);
        assert_eq!(feature.color, expected.color());
    }
}

#[test]
fn top_lists_are_short_and_disjoint() {
    let values = padded(&[0.5, 0.0005, -0.3, 0.2, -0.0009, 0.1, -0.2, 0.05, 0.0, -0.4]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();

    let risk: Vec<&str> = explanation
        .top_risk_factors
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    let protective: Vec<&str> = explanation
        .top_protective_factors
        .iter()
        .map(|f| f.name.as_str())
        .collect();

    assert_eq!(risk, ["molecular_group_encoded", "lvsi_encoded", "myometrial_encoded"]);
    assert_eq!(protective, ["mmr_encoded", "pole_encoded", "grade_encoded"]);
    assert!(risk.iter().all(|r| !protective.contains(r)));
}

#[test]
fn summary_names_the_two_leading_risk_factors() {
    let values = padded(&[0.5, 0.4, -0.3]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();
    assert_eq!(
        explanation.summary,
        "INTERMEDIATE risk (30% recurrence) driven primarily by Molecular Classification \
         (p53abn) and p53 Status"
    );
}

#[test]
fn summary_with_a_single_risk_factor() {
    let values = padded(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();
    assert_eq!(
        explanation.summary,
        "INTERMEDIATE risk (30% recurrence) driven primarily by Age (64 years)"
    );
}

#[test]
fn summary_without_risk_factors_falls_back_to_profile() {
    let values = padded(&[-0.5, -0.2]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.1))
        .unwrap();
    assert!(explanation.top_risk_factors.is_empty());
    assert_eq!(
        explanation.summary,
        "LOW risk (10% recurrence) based on overall clinical profile"
    );
}

#[test]
fn display_values_are_human_readable() {
    let values = padded(&[
        0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1,
    ]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap();

    let value_of = |name: &str| {
        explanation
            .features
            .iter()
            .find(|f| f.name == name)
            .map(|f| (f.display_name.as_str(), f.value.as_str()))
            .unwrap()
    };
    assert_eq!(value_of("molecular_group_encoded"), ("Molecular Classification", "p53abn"));
    assert_eq!(value_of("age"), ("Age", "64 years"));
    assert_eq!(value_of("bmi"), ("BMI", "32.5"));
    assert_eq!(value_of("ecog_status"), ("ECOG Status", "ECOG 1"));
    assert_eq!(value_of("diabetes_int"), ("Diabetes", "No"));
    assert_eq!(value_of("myometrial_encoded"), ("Myometrial Invasion", "<50%"));
    assert_eq!(value_of("l1cam_encoded"), ("L1CAM Status", "Positive"));
}

#[test]
fn display_names_strip_encoding_suffixes() {
    assert_eq!(display_name("lymph_nodes_encoded"), "Lymph Node Status");
    assert_eq!(display_name("diabetes_int"), "Diabetes");
    assert_eq!(display_name("p53_encoded"), "p53 Status");
}

#[test]
fn p53_in_early_stage_reports_interaction() {
    let model = bundled();
    let patient = silent_killer();
    let prediction = RiskEngine::new(model.clone()).predict(&patient).unwrap();
    let explanation = ExplanationAssembler::new(model)
        .explain(&patient, &prediction)
        .unwrap();

    assert_eq!(explanation.interactions.len(), 1);
    let interaction = &explanation.interactions[0];
    assert_eq!(interaction.first_feature, "p53_encoded");
    assert_eq!(interaction.second_display, "FIGO Stage");
    assert_eq!(interaction.magnitude, 0.08);

    assert_eq!(explanation.top_risk_factors[0].display_name, "L1CAM Status");
    assert_eq!(
        explanation.summary,
        format!(
            "HIGH risk ({}% recurrence) driven primarily by L1CAM Status (Positive) and p53 Status",
            prediction.risk_percentile
        )
    );
    assert_eq!(explanation.prediction, prediction.recurrence_probability);
}

#[test]
fn l1cam_positive_nsmp_reports_interaction() {
    let model = bundled();
    let patient = scenario_patient("grey-zone", 1);
    let prediction = RiskEngine::new(model.clone()).predict(&patient).unwrap();
    let explanation = ExplanationAssembler::new(model)
        .explain(&patient, &prediction)
        .unwrap();

    let pairs: Vec<(&str, &str)> = explanation
        .interactions
        .iter()
        .map(|i| (i.first_feature.as_str(), i.second_feature.as_str()))
        .collect();
    assert_eq!(pairs, [("l1cam_encoded", "molecular_group_encoded")]);
    assert_eq!(explanation.interactions[0].first_display, "L1CAM Status");
    assert_eq!(explanation.interactions[0].second_display, "Molecular Group");
}

#[test]
fn substantial_lvsi_with_grade_three_reports_interaction() {
    let model = bundled();
    let patient = scenario_patient("immunotherapy-candidate", 0);
    let prediction = RiskEngine::new(model.clone()).predict(&patient).unwrap();
    let explanation = ExplanationAssembler::new(model)
        .explain(&patient, &prediction)
        .unwrap();

    assert_eq!(explanation.interactions.len(), 1);
    assert_eq!(explanation.interactions[0].magnitude, 0.05);
}

#[test]
fn interactions_need_both_features_above_the_noise_floor() {
    // p53 and stage conditions hold, but the stage attribution is noise.
    let values = padded(&[0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0002]);
    let explanation = ExplanationAssembler::new(FixedAttributor::new(values))
        .explain(&silent_killer(), &fixed_prediction(0.8))
        .unwrap();
    assert!(explanation.interactions.is_empty());
}

#[test]
fn wrong_attribution_length_is_an_error() {
    let err = ExplanationAssembler::new(FixedAttributor::new(vec![0.1; 15]))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::AttributionShape {
            expected: 16,
            actual: 15
        }
    ));
}

#[test]
fn unavailable_attributor_is_surfaced() {
    let err = ExplanationAssembler::new(Arc::new(UnloadedModel))
        .explain(&silent_killer(), &fixed_prediction(0.3))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::CollaboratorUnavailable {
            component: "attributor",
            ..
        }
    ));
}
