use serde::{Deserialize, Serialize};

use crate::error::OcrPadError;

/// Recognition language sent to the OCR service as its Tesseract code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Eng,
    Amh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eng => "eng",
            Self::Amh => "amh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Eng => "English",
            Self::Amh => "አማርኛ",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = OcrPadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eng" => Ok(Self::Eng),
            "amh" => Ok(Self::Amh),
            _ => Err(OcrPadError::UnsupportedLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("eng".parse::<Language>().unwrap(), Language::Eng);
        assert_eq!(" AMH ".parse::<Language>().unwrap(), Language::Amh);
        assert!(matches!(
            "fra".parse::<Language>(),
            Err(OcrPadError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(Language::default(), Language::Eng);
        assert_eq!(Language::Amh.to_string(), "amh");
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Amh).unwrap();
        assert_eq!(json, "\"amh\"");
    }
}
