use std::path::{Path, PathBuf};

/// One artificial patient is a 10x10 grid of cell images.
pub const MAX_PATIENT_IMAGES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let mime = image_mime(path).ok_or_else(|| {
            crate::ScreenError::invalid(format!("unsupported image type: {}", path.display()))
        })?;
        let bytes = std::fs::read(path)?;
        Ok(Self {
            file_name: display_name(path),
            mime,
            bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub file_name: String,
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub outcomes: Vec<UploadOutcome>,
    pub skipped: Vec<SkippedFile>,
}

impl UploadSummary {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }
}

/// Answer of a batch save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// Service reply, passed through untouched.
    pub response: serde_json::Value,
    pub sent: usize,
    pub skipped: Vec<SkippedFile>,
}

pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Splits candidate paths into accepted images (in input order, at most
/// [`MAX_PATIENT_IMAGES`]) and skipped files.
pub fn select_images(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<SkippedFile>) {
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();
    for path in paths {
        if image_mime(path).is_none() {
            skipped.push(SkippedFile {
                file_name: display_name(path),
                reason: "not a jpg, jpeg, png or tiff image".to_string(),
            });
        } else if accepted.len() >= MAX_PATIENT_IMAGES {
            skipped.push(SkippedFile {
                file_name: display_name(path),
                reason: format!("patient already has {MAX_PATIENT_IMAGES} images"),
            });
        } else {
            accepted.push(path.clone());
        }
    }
    for skip in &skipped {
        tracing::warn!(file = %skip.file_name, reason = %skip.reason, "skipping file");
    }
    (accepted, skipped)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/client/upload.rs"]
mod tests;
