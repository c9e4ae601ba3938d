use super::*;

#[test]
fn test_image_mime_by_extension() {
    assert_eq!(image_mime(Path::new("MYO_1.png")), Some("image/png"));
    assert_eq!(image_mime(Path::new("MYO_1.JPG")), Some("image/jpeg"));
    assert_eq!(image_mime(Path::new("a/b/MYO_1.jpeg")), Some("image/jpeg"));
    assert_eq!(image_mime(Path::new("MYO_1.tiff")), Some("image/tiff"));
    assert_eq!(image_mime(Path::new("MYO_1.tif")), Some("image/tiff"));
    assert_eq!(image_mime(Path::new("notes.txt")), None);
    assert_eq!(image_mime(Path::new("noext")), None);
}

#[test]
fn test_select_images_filters_and_caps() {
    let mut paths: Vec<PathBuf> = (0..105)
        .map(|i| PathBuf::from(format!("cells/MYO_{i}.png")))
        .collect();
    paths.insert(3, PathBuf::from("cells/readme.md"));

    let (accepted, skipped) = select_images(&paths);
    assert_eq!(accepted.len(), MAX_PATIENT_IMAGES);
    assert_eq!(accepted[0], PathBuf::from("cells/MYO_0.png"));
    assert_eq!(skipped.len(), 6);
    assert_eq!(skipped[0].file_name, "readme.md");
    assert_eq!(skipped[1].file_name, "MYO_100.png");
}

#[test]
fn test_image_upload_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BAS_1.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let image = ImageUpload::from_path(&path).unwrap();
    assert_eq!(image.file_name, "BAS_1.png");
    assert_eq!(image.mime, "image/png");
    assert_eq!(image.bytes.len(), 4);

    let bad = dir.path().join("BAS_1.bmp");
    std::fs::write(&bad, [0u8; 2]).unwrap();
    assert!(ImageUpload::from_path(&bad).is_err());
}

#[test]
fn test_summary_counts() {
    let summary = UploadSummary {
        outcomes: vec![
            UploadOutcome {
                file_name: "a.png".to_string(),
                error: None,
            },
            UploadOutcome {
                file_name: "b.png".to_string(),
                error: Some("prediction service returned 500: boom".to_string()),
            },
        ],
        skipped: Vec::new(),
    };
    assert_eq!(summary.attempted(), 2);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), 1);
}
