use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::Result;
use crate::labels::{LabelSet, LabelVersion, builtin_label_set, load_label_set};
use crate::model::{ThresholdMode, VerdictThresholds};
use crate::pipeline::UnknownLabelPolicy;
use crate::report::OutputFormat;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "KIRA_AMLSCREEN_URL";

#[derive(Debug, Parser)]
#[command(
    name = "kira-amlscreen",
    version,
    about = "Screen an artificial patient for AML from remote leukocyte image classifications."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Prediction service root.
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(
        long = "timeout",
        global = true,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    #[arg(long, global = true, value_enum, default_value_t = LabelVersion::V13)]
    pub labels: LabelVersion,

    /// JSON label set overriding --labels.
    #[arg(long, global = true)]
    pub labels_file: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = ThresholdMode::Strict)]
    pub thresholds: ThresholdMode,

    /// Fail on class indices outside the label set instead of reporting them raw.
    #[arg(long, global = true)]
    pub strict_labels: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upload images one by one to the prediction service.
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Store a batch of images on the service in one request.
    Save {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Fetch predictions for uploaded images and report the verdict.
    Predict,
    /// Upload images, then fetch predictions and report the verdict.
    Run {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Classify a saved `/predict` response without contacting the service.
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the active label set.
    Labels,
}

#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub labels: LabelSet,
    pub thresholds: VerdictThresholds,
    pub policy: UnknownLabelPolicy,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
}

impl ScreenConfig {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let labels = match &args.labels_file {
            Some(path) => load_label_set(path)?,
            None => builtin_label_set(args.labels),
        };
        let policy = if args.strict_labels {
            UnknownLabelPolicy::Reject
        } else {
            UnknownLabelPolicy::PassThrough
        };
        Ok(Self {
            base_url: args.base_url.clone(),
            timeout: Duration::from_secs(args.timeout_seconds),
            labels,
            thresholds: VerdictThresholds::for_mode(args.thresholds),
            policy,
            format: args.format,
            out: args.out.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
