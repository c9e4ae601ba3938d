use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["kira-amlscreen"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_defaults() {
    let cli = parse(&["predict"]);
    assert!(matches!(cli.command, Command::Predict));
    let config = ScreenConfig::from_args(&cli.global).unwrap();
    if std::env::var_os(BASE_URL_ENV).is_none() {
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.labels.version, "v13");
    assert_eq!(config.thresholds, VerdictThresholds::strict_v2());
    assert_eq!(config.policy, UnknownLabelPolicy::PassThrough);
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.out.is_none());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "classify",
        "--input",
        "preds.json",
        "--labels",
        "v15",
        "--thresholds",
        "legacy",
        "--strict-labels",
        "--format",
        "json",
        "-vv",
    ]);
    match &cli.command {
        Command::Classify { input } => assert_eq!(input, &PathBuf::from("preds.json")),
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.global.verbose, 2);
    let config = ScreenConfig::from_args(&cli.global).unwrap();
    assert_eq!(config.labels.n_classes(), 15);
    assert_eq!(config.thresholds, VerdictThresholds::legacy_v1());
    assert_eq!(config.policy, UnknownLabelPolicy::Reject);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_upload_requires_files() {
    assert!(Cli::try_parse_from(["kira-amlscreen", "upload"]).is_err());
    let cli = parse(&["run", "a/MYO_1.png", "a/BAS_1.png"]);
    match cli.command {
        Command::Run { files } => assert_eq!(files.len(), 2),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_timeout_must_be_positive() {
    assert!(Cli::try_parse_from(["kira-amlscreen", "--timeout", "0", "predict"]).is_err());
}

#[test]
fn test_missing_labels_file_is_error() {
    let cli = parse(&["labels", "--labels-file", "/nonexistent/labels.json"]);
    assert!(ScreenConfig::from_args(&cli.global).is_err());
}
