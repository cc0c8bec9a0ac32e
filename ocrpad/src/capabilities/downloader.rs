use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{OcrPadError, Result};
use crate::models::TextDownload;

pub trait FileDownloader: Send {
    /// Delivers the download and returns where it landed.
    fn save(&self, download: &TextDownload) -> Result<PathBuf>;
}

/// Writes downloads to disk. A directory target receives the download's own
/// file name; any other path is written as-is.
#[derive(Debug, Clone)]
pub struct DiskDownloader {
    target: PathBuf,
}

impl DiskDownloader {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    fn resolve(&self, download: &TextDownload) -> PathBuf {
        if self.target.is_dir() {
            self.target.join(&download.file_name)
        } else {
            self.target.clone()
        }
    }
}

impl FileDownloader for DiskDownloader {
    fn save(&self, download: &TextDownload) -> Result<PathBuf> {
        let path = self.resolve(download);
        let text = download.decode()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                return Err(OcrPadError::Download(format!(
                    "Directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        fs::write(&path, text.as_bytes())?;
        info!(path = %path.display(), "Saved extracted text");
        Ok(path)
    }
}
