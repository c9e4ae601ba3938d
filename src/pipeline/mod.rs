pub mod stage1_counts;
pub mod stage2_table;
pub mod stage3_classify;
pub mod stage4_report;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Result, ScreenError};
use crate::labels::LabelSet;
use crate::model::{FrequencyRow, PredictionRecord, ThresholdMode, Verdict, VerdictThresholds};
use stage1_counts::count_predictions;
use stage2_table::build_frequency_table_from_counts;
use stage3_classify::classify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownLabelPolicy {
    /// Keep out-of-range indices as raw table keys and warn.
    #[default]
    PassThrough,
    /// Fail on the first out-of-range index.
    Reject,
}

/// Outcome of one successful classification run. Only exists after the
/// service returned at least one prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub label_version: String,
    pub n_images: usize,
    pub rows: Vec<FrequencyRow>,
    pub precursor_count: u64,
    pub verdict: Verdict,
    pub threshold_mode: ThresholdMode,
    pub positive_min: u64,
    pub unknown_predictions: Vec<i64>,
}

pub fn aggregate(
    records: &[PredictionRecord],
    labels: &LabelSet,
    thresholds: &VerdictThresholds,
    policy: UnknownLabelPolicy,
) -> Result<PredictionResult> {
    let unknown: BTreeSet<i64> = records
        .iter()
        .map(|r| r.prediction)
        .filter(|&idx| labels.code(idx).is_none())
        .collect();

    if !unknown.is_empty() {
        match policy {
            UnknownLabelPolicy::Reject => {
                // Report the offending index in record order.
                let index = records
                    .iter()
                    .map(|r| r.prediction)
                    .find(|idx| unknown.contains(idx))
                    .unwrap_or_default();
                return Err(ScreenError::UnknownLabel {
                    index,
                    n_classes: labels.n_classes(),
                });
            }
            UnknownLabelPolicy::PassThrough => {
                tracing::warn!(
                    indices = ?unknown,
                    label_version = %labels.version,
                    "predictions outside the label set kept as raw labels"
                );
            }
        }
    }

    let counts = count_predictions(records);
    let rows = build_frequency_table_from_counts(&counts, labels);
    let (precursor_count, verdict) =
        classify(&counts.predicted, &labels.precursor_indices(), thresholds);

    tracing::info!(
        n_images = records.len(),
        precursor_count,
        verdict = verdict.as_str(),
        "classification complete"
    );

    Ok(PredictionResult {
        label_version: labels.version.clone(),
        n_images: records.len(),
        rows,
        precursor_count,
        verdict,
        threshold_mode: thresholds.mode,
        positive_min: thresholds.positive_min,
        unknown_predictions: unknown.into_iter().collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
