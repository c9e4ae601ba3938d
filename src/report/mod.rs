pub mod json;
pub mod text;

use clap::ValueEnum;

use crate::error::Result;
use crate::pipeline::PredictionResult;

pub const EMPTY_STATE_MESSAGE: &str =
    "No predictions available yet. Upload images before requesting a prediction.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders the classification outcome. `None` is the neutral state shown
/// before any prediction exists.
pub fn render(result: Option<&PredictionResult>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_report_text(result)),
        OutputFormat::Json => json::render_report_json(result),
    }
}

pub fn verdict_line(result: &PredictionResult) -> String {
    result.verdict.describe(result.precursor_count)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
