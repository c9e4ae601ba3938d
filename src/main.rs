use std::path::PathBuf;

use clap::Parser;

use kira_amlscreen::client::PredictionClient;
use kira_amlscreen::config::{Cli, Command, ScreenConfig};
use kira_amlscreen::input::load_predictions_file;
use kira_amlscreen::logging::init_tracing;
use kira_amlscreen::model::PredictionRecord;
use kira_amlscreen::pipeline::stage4_report::{emit, write_report};
use kira_amlscreen::pipeline::{PredictionResult, aggregate};
use kira_amlscreen::report::OutputFormat;
use kira_amlscreen::report::text::{render_label_set, render_save_summary, render_upload_summary};
use kira_amlscreen::{Result, ScreenError};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ScreenConfig::from_args(&cli.global)?;
    match cli.command {
        Command::Upload { files } => {
            upload(&config, &files)?;
            Ok(())
        }
        Command::Save { files } => {
            let client = PredictionClient::new(&config.base_url, config.timeout)?;
            tracing::info!(base_url = client.base_url(), n = files.len(), "batch save");
            let saved = client.save_images(&files)?;
            eprint!("{}", render_save_summary(&saved));
            let mut rendered = serde_json::to_string_pretty(&saved.response)?;
            rendered.push('\n');
            emit(&rendered, config.out.as_deref())
        }
        Command::Predict => predict(&config),
        Command::Run { files } => {
            let uploaded = upload(&config, &files)?;
            if uploaded == 0 {
                tracing::warn!(
                    "no image was uploaded in this run; reporting what the service already holds"
                );
            }
            predict(&config)
        }
        Command::Classify { input } => {
            let records = load_predictions_file(&input)?;
            report(&config, records)
        }
        Command::Labels => {
            let rendered = match config.format {
                OutputFormat::Text => render_label_set(&config.labels),
                OutputFormat::Json => {
                    let mut s = serde_json::to_string_pretty(&config.labels)?;
                    s.push('\n');
                    s
                }
            };
            emit(&rendered, config.out.as_deref())
        }
    }
}

/// Returns the number of successful uploads. The summary goes to stderr so
/// stdout stays reserved for the report.
fn upload(config: &ScreenConfig, files: &[PathBuf]) -> Result<usize> {
    let client = PredictionClient::new(&config.base_url, config.timeout)?;
    tracing::info!(base_url = client.base_url(), n = files.len(), "uploading images");
    let summary = client.upload_images(files, |done, total, outcome| {
        if let Some(err) = &outcome.error {
            eprintln!("[{done}/{total}] {} failed: {err}", outcome.file_name);
        } else {
            eprintln!("[{done}/{total}] {} uploaded", outcome.file_name);
        }
    });
    eprint!("{}", render_upload_summary(&summary));
    if summary.attempted() == 0 {
        return Err(ScreenError::invalid("no uploadable images were given"));
    }
    Ok(summary.succeeded())
}

fn predict(config: &ScreenConfig) -> Result<()> {
    let client = PredictionClient::new(&config.base_url, config.timeout)?;
    tracing::info!(base_url = client.base_url(), "requesting predictions");
    let records = client.fetch_predictions()?;
    report(config, records)
}

fn report(config: &ScreenConfig, records: Option<Vec<PredictionRecord>>) -> Result<()> {
    let result = classify_records(config, records)?;
    write_report(result.as_ref(), config.format, config.out.as_deref())
}

fn classify_records(
    config: &ScreenConfig,
    records: Option<Vec<PredictionRecord>>,
) -> Result<Option<PredictionResult>> {
    match records {
        Some(records) if !records.is_empty() => Ok(Some(aggregate(
            &records,
            &config.labels,
            &config.thresholds,
            config.policy,
        )?)),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
