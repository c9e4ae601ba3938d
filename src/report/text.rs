use std::fmt::Write;

use crate::client::{SaveOutcome, UploadSummary};
use crate::labels::LabelSet;
use crate::model::FrequencyRow;
use crate::pipeline::PredictionResult;
use crate::report::{EMPTY_STATE_MESSAGE, verdict_line};

const HEADERS: [&str; 3] = ["Celltype", "Expected", "Predicted"];

pub fn render_report_text(result: Option<&PredictionResult>) -> String {
    let mut out = String::new();

    out.push_str("AML Screening Report\n");
    out.push_str("====================\n\n");

    let Some(result) = result else {
        out.push_str(EMPTY_STATE_MESSAGE);
        out.push('\n');
        return out;
    };

    let _ = writeln!(out, "Label set: {}", result.label_version);
    let _ = writeln!(out, "Images classified: {}", result.n_images);
    let _ = writeln!(
        out,
        "Thresholds: {} (AML confirmed from {} precursor cells)\n",
        result.threshold_mode.as_str(),
        result.positive_min
    );

    out.push_str(&render_table(&result.rows));
    out.push('\n');

    if !result.unknown_predictions.is_empty() {
        let indices: Vec<String> = result
            .unknown_predictions
            .iter()
            .map(|i| i.to_string())
            .collect();
        let _ = writeln!(
            out,
            "Warning: class indices outside label set {}: {}",
            result.label_version,
            indices.join(", ")
        );
    }

    let _ = writeln!(out, "Verdict: {}", result.verdict.as_str());
    let _ = writeln!(out, "{}", verdict_line(result));
    out
}

pub fn render_table(rows: &[FrequencyRow]) -> String {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        widths[0] = widths[0].max(row.celltype.chars().count());
        widths[1] = widths[1].max(row.expected.to_string().len());
        widths[2] = widths[2].max(row.predicted.to_string().len());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w0$}  {:>w1$}  {:>w2$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:>w2$}",
            row.celltype,
            row.expected,
            row.predicted,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
    }
    out
}

pub fn render_upload_summary(summary: &UploadSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Uploaded {}/{} image(s)",
        summary.succeeded(),
        summary.attempted()
    );
    for outcome in &summary.outcomes {
        match &outcome.error {
            None => {
                let _ = writeln!(out, "  ok      {}", outcome.file_name);
            }
            Some(err) => {
                let _ = writeln!(out, "  failed  {}: {}", outcome.file_name, err);
            }
        }
    }
    for skipped in &summary.skipped {
        let _ = writeln!(out, "  skipped {}: {}", skipped.file_name, skipped.reason);
    }
    out
}

pub fn render_save_summary(saved: &SaveOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Saved {} image(s) in one batch", saved.sent);
    for skipped in &saved.skipped {
        let _ = writeln!(out, "  skipped {}: {}", skipped.file_name, skipped.reason);
    }
    out
}

pub fn render_label_set(labels: &LabelSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Label set {} ({} classes)",
        labels.version,
        labels.n_classes()
    );
    for (idx, class) in labels.classes.iter().enumerate() {
        let marker = if class.precursor { "  precursor" } else { "" };
        let _ = writeln!(out, "{:>3}  {:<5} {}{}", idx, class.code, class.name, marker);
    }
    let precursors = labels.precursor_codes();
    if precursors.is_empty() {
        out.push_str("Precursors: none (every verdict will be NEGATIVE)\n");
    } else {
        let _ = writeln!(out, "Precursors: {}", precursors.join(", "));
    }
    out
}
