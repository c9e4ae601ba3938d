use std::path::Path;

use serde::{Deserialize, Serialize};

pub const UNKNOWN_LABEL: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub filename: String,
    pub prediction: i64,
}

impl PredictionRecord {
    pub fn new(filename: impl Into<String>, prediction: i64) -> Self {
        Self {
            filename: filename.into(),
            prediction,
        }
    }

    pub fn ground_truth(&self) -> &str {
        ground_truth_label(&self.filename)
    }
}

/// Body of `GET /predict`. `predictions` is `null` or absent until at least
/// one image has been uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionsPayload {
    #[serde(default)]
    pub predictions: Option<Vec<PredictionRecord>>,
}

/// Ground-truth label encoded in an uploaded file name.
///
/// Uploads are expected to be named `LABEL_number.ext` (e.g. `MYO_0041.png`).
/// The label is the part of the final path component before its first `_`.
/// Names without an `_`, or with an empty prefix, yield [`UNKNOWN_LABEL`].
pub fn ground_truth_label(filename: &str) -> &str {
    let base = Path::new(filename)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    match base.split_once('_') {
        Some((prefix, _)) if !prefix.trim().is_empty() => prefix.trim(),
        _ => UNKNOWN_LABEL,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
