use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ScreenError};
use crate::model::PredictionRecord;

// Saved `/predict` body. Unlike the live payload the key is mandatory, so a
// mis-keyed file or a saved error body is not mistaken for "no images".
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SavedPayload {
    predictions: Option<Vec<PredictionRecord>>,
}

/// Accepts a saved `GET /predict` body or a bare array of records.
pub fn parse_predictions(raw: &str) -> Result<Option<Vec<PredictionRecord>>> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Array(_) => Ok(Some(serde_json::from_value(value)?)),
        Value::Object(ref map) if map.contains_key("predictions") => {
            let payload: SavedPayload = serde_json::from_value(value)?;
            Ok(payload.predictions)
        }
        _ => Err(ScreenError::invalid(
            "expected an array of prediction records or an object with a \"predictions\" key",
        )),
    }
}

pub fn load_predictions_file(path: &Path) -> Result<Option<Vec<PredictionRecord>>> {
    let raw = std::fs::read_to_string(path)?;
    let records = parse_predictions(&raw)?;
    tracing::info!(
        path = %path.display(),
        n = records.as_ref().map_or(0, Vec::len),
        "loaded saved predictions"
    );
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/predictions.rs"]
mod tests;
