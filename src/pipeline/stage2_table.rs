use std::collections::{BTreeMap, BTreeSet};

use crate::labels::LabelSet;
use crate::model::{FrequencyRow, PredictionRecord};
use crate::pipeline::stage1_counts::{PredictionCounts, count_predictions};

// Known labels sort by class index, ahead of unresolved keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum RowKey {
    Known(usize),
    Raw(String),
}

pub fn build_frequency_table(records: &[PredictionRecord], labels: &LabelSet) -> Vec<FrequencyRow> {
    build_frequency_table_from_counts(&count_predictions(records), labels)
}

pub fn build_frequency_table_from_counts(
    counts: &PredictionCounts,
    labels: &LabelSet,
) -> Vec<FrequencyRow> {
    // Out-of-range indices pass through as their decimal string.
    let mut predicted_by_key: BTreeMap<String, u64> = BTreeMap::new();
    for (&index, &n) in &counts.predicted {
        let key = match labels.code(index) {
            Some(code) => code.to_string(),
            None => index.to_string(),
        };
        *predicted_by_key.entry(key).or_insert(0) += n;
    }

    let keys: BTreeSet<&str> = counts
        .expected
        .keys()
        .chain(predicted_by_key.keys())
        .map(String::as_str)
        .collect();

    let mut merged: BTreeMap<RowKey, (u64, u64)> = BTreeMap::new();
    for key in keys {
        let row_key = match labels.resolve_key(key) {
            Some(idx) => RowKey::Known(idx),
            None => RowKey::Raw(key.to_string()),
        };
        let entry = merged.entry(row_key).or_insert((0, 0));
        entry.0 += counts.expected.get(key).copied().unwrap_or(0);
        entry.1 += predicted_by_key.get(key).copied().unwrap_or(0);
    }

    merged
        .into_iter()
        .filter(|(_, (expected, predicted))| *expected > 0 || *predicted > 0)
        .map(|(key, (expected, predicted))| FrequencyRow {
            celltype: match key {
                RowKey::Known(idx) => {
                    let code = labels.classes[idx].code.as_str();
                    labels.full_name(code).unwrap_or(code).to_string()
                }
                RowKey::Raw(raw) => raw,
            },
            expected,
            predicted,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_table.rs"]
mod tests;
