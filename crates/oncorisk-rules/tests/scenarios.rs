use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::prediction::RiskCategory;
use oncorisk_rules::classifier::classify;
use oncorisk_rules::error::RulesError;
use oncorisk_rules::scenarios::{all_scenarios, get_scenario};

#[test]
fn catalogue_lists_four_scenarios_in_order() {
    let ids: Vec<String> = all_scenarios().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        [
            "silent-killer",
            "false-alarm",
            "grey-zone",
            "immunotherapy-candidate"
        ]
    );
}

#[test]
fn every_scenario_patient_is_valid_and_classifies_as_expected() {
    for scenario in all_scenarios().unwrap() {
        assert_eq!(
            scenario.patients.len(),
            scenario.expected_risk_categories.len(),
            "{}",
            scenario.id
        );
        for patient in &scenario.patients {
            assert!(patient.validate().is_empty(), "{}", scenario.id);
            assert_eq!(
                classify(patient).group,
                scenario.expected_molecular_group,
                "{}",
                scenario.id
            );
        }
    }
}

#[test]
fn grey_zone_pairs_two_nsmp_patients() {
    let scenario = get_scenario("grey-zone").unwrap();
    assert_eq!(scenario.expected_molecular_group, MolecularGroup::Nsmp);
    assert_eq!(
        scenario.expected_risk_categories,
        [RiskCategory::Intermediate, RiskCategory::High]
    );
    assert_eq!(
        scenario.patients[0].patient_id.as_deref(),
        Some("DEMO-003A")
    );
}

#[test]
fn unknown_scenario_is_an_error() {
    let err = get_scenario("does-not-exist").unwrap_err();
    assert!(matches!(err, RulesError::UnknownScenario(ref id) if id == "does-not-exist"));
}
