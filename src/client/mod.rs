pub mod upload;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};

use crate::error::{Result, ScreenError};
use crate::model::{PredictionRecord, PredictionsPayload};

pub use upload::{
    ImageUpload, MAX_PATIENT_IMAGES, SaveOutcome, SkippedFile, UploadOutcome, UploadSummary,
    image_mime, select_images,
};

/// Blocking client for the remote leukocyte classification service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ScreenError::invalid(format!(
                "base url must start with http:// or https://: {base_url}"
            )));
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5).min(timeout))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `Ok(None)` when the service has no uploaded images yet.
    pub fn fetch_predictions(&self) -> Result<Option<Vec<PredictionRecord>>> {
        let url = self.endpoint("/predict");
        tracing::debug!(%url, "requesting predictions");
        let response = check_status(self.client.get(&url).send()?)?;
        let body = response.text()?;
        let payload: PredictionsPayload = serde_json::from_str(&body)?;
        match &payload.predictions {
            Some(records) => tracing::info!(n = records.len(), "received predictions"),
            None => tracing::info!("service has no uploaded images"),
        }
        Ok(payload.predictions)
    }

    pub fn upload_image(&self, image: &ImageUpload) -> Result<()> {
        let url = self.endpoint("/uploadfile/");
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime)?;
        let form = Form::new().part("file", part);
        tracing::debug!(
            %url,
            file = %image.file_name,
            bytes = image.bytes.len(),
            "uploading image"
        );
        check_status(self.client.post(&url).multipart(form).send()?)?;
        Ok(())
    }

    /// Uploads images one by one. Each upload succeeds or fails on its own;
    /// failures are recorded and the loop moves on without retrying.
    pub fn upload_images<F>(&self, paths: &[PathBuf], mut on_progress: F) -> UploadSummary
    where
        F: FnMut(usize, usize, &UploadOutcome),
    {
        let (accepted, skipped) = select_images(paths);
        let total = accepted.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, path) in accepted.iter().enumerate() {
            let result = ImageUpload::from_path(path).and_then(|image| {
                self.upload_image(&image)?;
                Ok(image.file_name)
            });
            let outcome = match result {
                Ok(file_name) => UploadOutcome {
                    file_name,
                    error: None,
                },
                Err(err) => {
                    let file_name = upload::display_name(path);
                    tracing::warn!(file = %file_name, error = %err, "upload failed");
                    UploadOutcome {
                        file_name,
                        error: Some(err.to_string()),
                    }
                }
            };
            tracing::info!(
                done = i + 1,
                total,
                file = %outcome.file_name,
                ok = outcome.is_ok(),
                "upload progress"
            );
            on_progress(i + 1, total, &outcome);
            outcomes.push(outcome);
        }

        UploadSummary { outcomes, skipped }
    }

    /// Batch save through `/save_images/`. The same patient cap as the
    /// per-image upload applies; dropped files come back in `skipped`.
    pub fn save_images(&self, paths: &[PathBuf]) -> Result<SaveOutcome> {
        let (accepted, skipped) = select_images(paths);
        if accepted.is_empty() {
            return Err(ScreenError::invalid("no images to save"));
        }

        let mut form = Form::new();
        for path in &accepted {
            let image = ImageUpload::from_path(path)?;
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(image.mime)?;
            form = form.part("images", part);
        }

        let url = self.endpoint("/save_images/");
        tracing::info!(%url, n = accepted.len(), "saving images");
        let response = check_status(self.client.post(&url).multipart(form).send()?)?;
        Ok(SaveOutcome {
            response: response.json()?,
            sent: accepted.len(),
            skipped,
        })
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let body = match response.text() {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(status = status.as_u16(), error = %err, "could not read error body");
            format!("<unreadable body: {err}>")
        }
    };
    Err(ScreenError::Service {
        status: status.as_u16(),
        body,
    })
}
