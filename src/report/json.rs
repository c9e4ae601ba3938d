use serde::Serialize;

use crate::error::Result;
use crate::model::{FrequencyRow, ThresholdMode, Verdict};
use crate::pipeline::PredictionResult;
use crate::report::{EMPTY_STATE_MESSAGE, verdict_line};

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport<'a> {
    Empty {
        tool: &'static str,
        version: &'static str,
        message: &'static str,
    },
    Classified {
        tool: &'static str,
        version: &'static str,
        label_version: &'a str,
        n_images: usize,
        table: &'a [FrequencyRow],
        precursor_count: u64,
        verdict: Verdict,
        verdict_message: String,
        threshold_mode: ThresholdMode,
        positive_min: u64,
        unknown_predictions: &'a [i64],
    },
}

pub fn render_report_json(result: Option<&PredictionResult>) -> Result<String> {
    let tool = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let report = match result {
        None => JsonReport::Empty {
            tool,
            version,
            message: EMPTY_STATE_MESSAGE,
        },
        Some(result) => JsonReport::Classified {
            tool,
            version,
            label_version: &result.label_version,
            n_images: result.n_images,
            table: &result.rows,
            precursor_count: result.precursor_count,
            verdict: result.verdict,
            verdict_message: verdict_line(result),
            threshold_mode: result.threshold_mode,
            positive_min: result.positive_min,
            unknown_predictions: &result.unknown_predictions,
        },
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
