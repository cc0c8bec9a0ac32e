use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use super::OcrService;
use crate::config::OcrConfig;
use crate::error::{OcrPadError, Result};
use crate::models::{ImageFile, Language};

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    text: Option<String>,
}

/// FastAPI puts a string in `detail` for `HTTPException` and a list of
/// objects for request validation errors.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

#[derive(Clone, Debug)]
pub struct OcrClient {
    client: Client,
    endpoint: Url,
}

impl OcrClient {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OcrPadError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(image: &ImageFile, language: Language) -> Result<multipart::Form> {
        let file_name = if image.name().is_empty() {
            "image".to_string()
        } else {
            image.name().to_string()
        };

        let image_part = multipart::Part::bytes(image.bytes().to_vec())
            .file_name(file_name)
            .mime_str(image.media_type())
            .map_err(|e| OcrPadError::OcrRequestFailed {
                status: None,
                detail: Some(format!("Invalid image media type: {e}")),
            })?;

        Ok(multipart::Form::new()
            .part("image", image_part)
            .text("lang", language.code()))
    }

    async fn failure_detail(response: reqwest::Response) -> Option<String> {
        let body: ErrorResponse = response.json().await.ok()?;
        match body.detail? {
            serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[async_trait]
impl OcrService for OcrClient {
    async fn recognize(&self, image: &ImageFile, language: Language) -> Result<String> {
        let form = Self::build_form(image, language)?;

        debug!(
            endpoint = %self.endpoint,
            file = image.name(),
            bytes = image.len(),
            lang = %language,
            "Sending OCR request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let detail = if e.is_timeout() {
                    "Request timed out".to_string()
                } else {
                    format!("Request failed: {e}")
                };
                OcrPadError::OcrRequestFailed {
                    status: None,
                    detail: Some(detail),
                }
            })?;

        let status = response.status();
        debug!("OCR response status: {}", status);

        if !status.is_success() {
            let detail = Self::failure_detail(response).await;
            warn!(
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or(""),
                "OCR service rejected request"
            );
            return Err(OcrPadError::OcrRequestFailed {
                status: Some(status.as_u16()),
                detail,
            });
        }

        let body: OcrResponse = response
            .json()
            .await
            .map_err(|e| OcrPadError::OcrRequestFailed {
                status: Some(status.as_u16()),
                detail: Some(format!("Failed to parse OCR response: {e}")),
            })?;

        let text = match body.text {
            Some(text) => text,
            None => {
                warn!("OCR response has no text field, treating as empty");
                String::new()
            }
        };

        info!(chars = text.chars().count(), "OCR request succeeded");
        Ok(text)
    }
}
