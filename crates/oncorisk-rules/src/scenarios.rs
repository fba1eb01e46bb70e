//! Curated demonstration cases.
//!
//! The catalogue ships inside the binary as JSON and is parsed on demand.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::patient::PatientRecord;
use oncorisk_core::models::prediction::RiskCategory;

use crate::error::RulesError;

const CATALOGUE: &str = include_str!("../assets/scenarios.json");

/// A named clinical story with one or more patients and the outcome each
/// is expected to reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub patients: Vec<PatientRecord>,
    pub expected_molecular_group: MolecularGroup,
    /// One entry per patient, in the same order.
    pub expected_risk_categories: Vec<RiskCategory>,
    pub key_insight: String,
    pub narrative_points: Vec<String>,
}

/// Every bundled scenario, in catalogue order.
pub fn all_scenarios() -> Result<Vec<Scenario>, RulesError> {
    Ok(serde_json::from_str(CATALOGUE)?)
}

pub fn get_scenario(id: &str) -> Result<Scenario, RulesError> {
    all_scenarios()?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| RulesError::UnknownScenario(id.to_string()))
}
