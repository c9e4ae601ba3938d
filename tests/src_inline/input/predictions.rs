use super::*;
use crate::error::ScreenError;

#[test]
fn test_parse_service_payload() {
    let records = parse_predictions(
        r#"{"predictions":[{"filename":"MYO_1.png","prediction":8}]}"#,
    )
    .unwrap()
    .unwrap();
    assert_eq!(records, vec![PredictionRecord::new("MYO_1.png", 8)]);
}

#[test]
fn test_parse_null_payload() {
    assert_eq!(parse_predictions(r#"{"predictions":null}"#).unwrap(), None);
}

#[test]
fn test_parse_bare_array() {
    let records = parse_predictions(
        r#"[{"filename":"BAS_1.png","prediction":0},{"filename":"BAS_2.png","prediction":0}]"#,
    )
    .unwrap()
    .unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_parse_empty_array() {
    assert_eq!(parse_predictions("[]").unwrap(), Some(Vec::new()));
}

#[test]
fn test_parse_rejects_non_integer_prediction() {
    let err = parse_predictions(r#"[{"filename":"BAS_1.png","prediction":"zero"}]"#).unwrap_err();
    assert!(matches!(err, ScreenError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("predict.json");
    std::fs::write(&path, r#"{"predictions":[]}"#).unwrap();
    assert_eq!(load_predictions_file(&path).unwrap(), Some(Vec::new()));
}

#[test]
fn test_parse_rejects_misspelled_key() {
    let err = parse_predictions(r#"{"prediction":[{"filename":"MYO_1.png","prediction":8}]}"#)
        .unwrap_err();
    assert!(matches!(err, ScreenError::InvalidInput { .. }));
}

#[test]
fn test_parse_rejects_saved_error_body() {
    let err = parse_predictions(r#"{"detail":"Not Found"}"#).unwrap_err();
    assert!(matches!(err, ScreenError::InvalidInput { .. }));
}

#[test]
fn test_parse_rejects_extra_keys_next_to_predictions() {
    let err = parse_predictions(r#"{"predictions":null,"detail":"x"}"#).unwrap_err();
    assert!(matches!(err, ScreenError::Json(_)));
}

#[test]
fn test_parse_rejects_scalar() {
    assert!(parse_predictions("42").is_err());
}

#[test]
fn test_load_rejects_misspelled_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("predict.json");
    std::fs::write(&path, r#"{"prediction":[]}"#).unwrap();
    assert!(load_predictions_file(&path).is_err());
}
