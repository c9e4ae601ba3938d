use super::*;
use crate::labels::{LabelVersion, builtin_label_set};

fn run(records: &[PredictionRecord], policy: UnknownLabelPolicy) -> Result<PredictionResult> {
    aggregate(
        records,
        &builtin_label_set(LabelVersion::V13),
        &VerdictThresholds::strict_v2(),
        policy,
    )
}

#[test]
fn test_aggregate_empty_is_negative() {
    let result = run(&[], UnknownLabelPolicy::PassThrough).unwrap();
    assert!(result.rows.is_empty());
    assert_eq!(result.precursor_count, 0);
    assert_eq!(result.verdict, Verdict::Negative);
    assert_eq!(result.n_images, 0);

    let strict = run(&[], UnknownLabelPolicy::Reject).unwrap();
    assert_eq!(strict.verdict, Verdict::Negative);
}

#[test]
fn test_aggregate_reference_scenario() {
    let records = vec![
        PredictionRecord::new("MYO_1.png", 8),
        PredictionRecord::new("BAS_1.png", 0),
    ];
    let result = run(&records, UnknownLabelPolicy::PassThrough).unwrap();
    assert_eq!(result.label_version, "v13");
    assert_eq!(result.precursor_count, 1);
    assert_eq!(result.verdict, Verdict::Borderline);
    assert_eq!(result.rows.len(), 2);
    assert!(result.unknown_predictions.is_empty());
}

#[test]
fn test_all_precursor_predictions_counted() {
    let precursor_idx = [5i64, 8, 11, 12];
    let records: Vec<PredictionRecord> = (0..23)
        .map(|i| PredictionRecord::new(format!("MYO_{i}.png"), precursor_idx[i % 4]))
        .collect();
    let result = run(&records, UnknownLabelPolicy::PassThrough).unwrap();
    assert_eq!(result.precursor_count, records.len() as u64);
    assert_eq!(result.verdict, Verdict::Positive);
}

#[test]
fn test_non_precursor_volume_is_negative() {
    let records: Vec<PredictionRecord> = (0..25)
        .map(|i| PredictionRecord::new(format!("NGS_{i}.png"), 10))
        .collect();
    let result = run(&records, UnknownLabelPolicy::PassThrough).unwrap();
    assert_eq!(result.precursor_count, 0);
    assert_eq!(result.verdict, Verdict::Negative);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].predicted, 25);
}

#[test]
fn test_unknown_label_pass_through() {
    let records = vec![
        PredictionRecord::new("MYO_1.png", 99),
        PredictionRecord::new("MYO_2.png", 8),
    ];
    let result = run(&records, UnknownLabelPolicy::PassThrough).unwrap();
    assert_eq!(result.unknown_predictions, vec![99]);
    assert!(result.rows.iter().any(|r| r.celltype == "99" && r.predicted == 1));
    assert_eq!(result.precursor_count, 1);
}

#[test]
fn test_unknown_label_rejected() {
    let records = vec![PredictionRecord::new("MYO_1.png", 99)];
    let err = run(&records, UnknownLabelPolicy::Reject).unwrap_err();
    assert!(matches!(
        err,
        ScreenError::UnknownLabel {
            index: 99,
            n_classes: 13
        }
    ));
}

#[test]
fn test_unknown_label_rejected_in_record_order() {
    let records = vec![
        PredictionRecord::new("MYO_1.png", 99),
        PredictionRecord::new("MYO_2.png", -1),
    ];
    let err = run(&records, UnknownLabelPolicy::Reject).unwrap_err();
    assert!(matches!(err, ScreenError::UnknownLabel { index: 99, .. }));
}

#[test]
fn test_result_records_threshold_profile() {
    let records = vec![PredictionRecord::new("MYO_1.png", 8)];
    let strict = run(&records, UnknownLabelPolicy::PassThrough).unwrap();
    assert_eq!(strict.threshold_mode, ThresholdMode::Strict);
    assert_eq!(strict.positive_min, 20);

    let legacy = aggregate(
        &records,
        &builtin_label_set(LabelVersion::V13),
        &VerdictThresholds::legacy_v1(),
        UnknownLabelPolicy::PassThrough,
    )
    .unwrap();
    assert_eq!(legacy.threshold_mode, ThresholdMode::Legacy);
    assert_eq!(legacy.positive_min, 21);
}
