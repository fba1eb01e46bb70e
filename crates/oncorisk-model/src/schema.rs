//! The fixed, ordered feature schema shared by scorer and attributor.

/// Feature names in vector order. Any scorer or attributor must be trained
/// against exactly this ordering.
pub const FEATURE_NAMES: [&str; 16] = [
    "molecular_group_encoded",
    "p53_encoded",
    "pole_encoded",
    "lvsi_encoded",
    "l1cam_encoded",
    "myometrial_encoded",
    "grade_encoded",
    "stage_encoded",
    "age",
    "mmr_encoded",
    "ctnnb1_encoded",
    "histology_encoded",
    "lymph_nodes_encoded",
    "bmi",
    "ecog_status",
    "diabetes_int",
];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Encoded value for a categorical that was not tested or not recognised.
pub const NOT_TESTED_SENTINEL: f64 = -1.0;

/// Position of a feature in the vector.
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|known| *known == name)
}

/// Numeric model input in [`FEATURE_NAMES`] order.
///
/// Construction does not check the length; collaborators reject a vector of
/// the wrong shape when they are called.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named feature, if the vector is long enough to hold it.
    pub fn get(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.values.get(i).copied())
    }
}
