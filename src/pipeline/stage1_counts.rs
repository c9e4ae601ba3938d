use std::collections::BTreeMap;

use crate::model::PredictionRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionCounts {
    /// Images per ground-truth label taken from the filename prefix.
    pub expected: BTreeMap<String, u64>,
    /// Images per raw class index returned by the service.
    pub predicted: BTreeMap<i64, u64>,
}

pub fn count_predictions(records: &[PredictionRecord]) -> PredictionCounts {
    let mut counts = PredictionCounts::default();
    for record in records {
        *counts
            .expected
            .entry(record.ground_truth().to_string())
            .or_insert(0) += 1;
        *counts.predicted.entry(record.prediction).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_counts.rs"]
mod tests;
