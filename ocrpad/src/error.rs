use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrPadError {
    #[error("Not an image: {0}")]
    InvalidFileType(String),

    #[error("OCR request failed{}: {}", status_suffix(.status), .detail.as_deref().unwrap_or("no detail"))]
    OcrRequestFailed {
        status: Option<u16>,
        detail: Option<String>,
    },

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl OcrPadError {
    /// Text shown to the user for this failure, if it carries any.
    pub fn user_message(&self) -> Option<String> {
        match self {
            OcrPadError::OcrRequestFailed { detail, .. } => detail
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            OcrPadError::ClipboardWriteFailed(_) => Some("Failed to copy text".to_string()),
            OcrPadError::InvalidFileType(_) => None,
            other => Some(other.to_string()),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, OcrPadError>;
