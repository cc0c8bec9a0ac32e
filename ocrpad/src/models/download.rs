use crate::error::{OcrPadError, Result};

pub const DOWNLOAD_FILE_NAME: &str = "extracted-text.txt";
pub const DOWNLOAD_MIME: &str = "text/plain;charset=utf-8";

/// A text-file download of recognized text, percent-encoded for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDownload {
    pub file_name: String,
    pub mime: String,
    pub encoded: String,
}

impl TextDownload {
    pub fn from_text(text: &str) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME.to_string(),
            mime: DOWNLOAD_MIME.to_string(),
            encoded: urlencoding::encode(text).into_owned(),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{},{}", self.mime, self.encoded)
    }

    pub fn decode(&self) -> Result<String> {
        urlencoding::decode(&self.encoded)
            .map(|text| text.into_owned())
            .map_err(|e| OcrPadError::Download(format!("Invalid encoded text: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_reserved_and_unicode() {
        let download = TextDownload::from_text("a b&c\nሰላም");
        assert_eq!(
            download.encoded,
            "a%20b%26c%0A%E1%88%B0%E1%88%8B%E1%88%9D"
        );
        assert_eq!(download.file_name, "extracted-text.txt");
        assert_eq!(
            download.data_url(),
            "data:text/plain;charset=utf-8,a%20b%26c%0A%E1%88%B0%E1%88%8B%E1%88%9D"
        );
    }

    #[test]
    fn test_decode_restores_text() {
        let text = "Line 1\r\n100% done? yes/no";
        assert_eq!(TextDownload::from_text(text).decode().unwrap(), text);
    }

    #[test]
    fn test_sub_delims_are_escaped_and_restored() {
        let download = TextDownload::from_text("(ok)!");
        assert_eq!(download.encoded, "%28ok%29%21");
        assert_eq!(download.decode().unwrap(), "(ok)!");
    }
}
