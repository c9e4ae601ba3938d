use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Verdict, VerdictThresholds};

pub fn classify(
    prediction_counts: &BTreeMap<i64, u64>,
    precursor_indices: &BTreeSet<i64>,
    thresholds: &VerdictThresholds,
) -> (u64, Verdict) {
    let precursor_count = precursor_indices
        .iter()
        .map(|idx| prediction_counts.get(idx).copied().unwrap_or(0))
        .sum();
    (precursor_count, verdict_for(precursor_count, thresholds))
}

pub fn verdict_for(precursor_count: u64, thresholds: &VerdictThresholds) -> Verdict {
    if precursor_count == 0 {
        Verdict::Negative
    } else if precursor_count >= thresholds.positive_min {
        Verdict::Positive
    } else {
        Verdict::Borderline
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
