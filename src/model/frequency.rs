use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    #[serde(rename = "Celltype")]
    pub celltype: String,
    #[serde(rename = "Expected")]
    pub expected: u64,
    #[serde(rename = "Predicted")]
    pub predicted: u64,
}
