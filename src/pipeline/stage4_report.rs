use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::pipeline::PredictionResult;
use crate::report::{OutputFormat, render};

/// Renders the report and writes it to `out`, or to stdout when unset.
pub fn write_report(
    result: Option<&PredictionResult>,
    format: OutputFormat,
    out: Option<&Path>,
) -> Result<()> {
    let rendered = render(result, format)?;
    emit(&rendered, out)
}

pub fn emit(rendered: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
