use std::env;

use url::Url;

use crate::error::{OcrPadError, Result};
use crate::models::Language;

/// Local FastAPI default, used when `OCRPAD_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ocr: OcrConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Base URL of the OCR service; `/ocr` is appended per request.
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub default_language: Language,
}

impl OcrConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 60,
        }
    }

    /// Resolves the `/ocr` endpoint against the configured base URL.
    pub fn endpoint(&self) -> Result<Url> {
        let mut base = Url::parse(self.base_url.trim())?;
        if base.cannot_be_a_base() {
            return Err(OcrPadError::Config(format!(
                "OCR base URL cannot carry a path: {}",
                self.base_url
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("ocr")?)
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr: OcrConfig {
                base_url: env::var("OCRPAD_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
                timeout_secs: parse_env_or("OCRPAD_TIMEOUT", 60),
            },
            session: SessionConfig {
                default_language: parse_env_or("OCRPAD_LANG", Language::default()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
