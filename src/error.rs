use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScreenError>;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prediction service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("prediction index {index} is outside the {n_classes}-class label set")]
    UnknownLabel { index: i64, n_classes: usize },

    #[error("invalid label set: {message}")]
    LabelConfig { message: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl ScreenError {
    #[must_use]
    pub fn label_config(message: impl Into<String>) -> Self {
        Self::LabelConfig {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Service { .. })
    }

    /// Process exit status: 2 when the prediction service could not be
    /// reached or refused the request, 1 for every local failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_network() { 2 } else { 1 }
    }
}
