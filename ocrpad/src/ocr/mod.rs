//! OCR service client
//!
//! `OcrService` is the seam between an upload session and whatever performs
//! recognition. `OcrClient` is the production implementation: one multipart
//! `POST {base}/ocr` per call, no retries.
//!
//! ```rust,ignore
//! let client = OcrClient::new(&config.ocr)?;
//! let text = client.recognize(&image, Language::Amh).await?;
//! ```

mod api;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ImageFile, Language};

pub use api::OcrClient;

#[async_trait]
pub trait OcrService: Send + Sync {
    /// Recognizes the text in `image`. Resolves exactly once, with the text or
    /// an `OcrRequestFailed` error.
    async fn recognize(&self, image: &ImageFile, language: Language) -> Result<String>;
}
