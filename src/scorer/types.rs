use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub effect_name: String,
    pub value: f64,
    pub matched_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemScore {
    /// Sum of contribution values.
    pub total: f64,
    pub contributions: Vec<Contribution>,
    /// Unknown effects skipped during matching.
    pub unknown_ignored: usize,
}
