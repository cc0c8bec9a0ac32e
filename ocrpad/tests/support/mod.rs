// Shared fakes and helpers for session integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex, Once};

use ocrpad::capabilities::{Clipboard, FileDownloader, FilePicker};
use ocrpad::error::{OcrPadError, Result};
use ocrpad::models::{ImageFile, TextDownload};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn png(name: &str) -> ImageFile {
    ImageFile::new(name, "image/png", b"fake-png-bytes".to_vec())
}

#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(OcrPadError::ClipboardWriteFailed(
            "clipboard permission denied".to_string(),
        ))
    }
}

#[derive(Clone, Default)]
pub struct MemoryDownloader {
    pub saved: Arc<Mutex<Vec<TextDownload>>>,
}

impl FileDownloader for MemoryDownloader {
    fn save(&self, download: &TextDownload) -> Result<PathBuf> {
        self.saved.lock().unwrap().push(download.clone());
        Ok(PathBuf::from(&download.file_name))
    }
}

/// Hands out the queued candidates one pick at a time.
#[derive(Clone, Default)]
pub struct QueuedPicker {
    pub queue: Arc<Mutex<Vec<ImageFile>>>,
}

impl QueuedPicker {
    pub fn with(files: Vec<ImageFile>) -> Self {
        let mut files = files;
        files.reverse();
        Self {
            queue: Arc::new(Mutex::new(files)),
        }
    }
}

impl FilePicker for QueuedPicker {
    fn pick(&self) -> Result<Option<ImageFile>> {
        Ok(self.queue.lock().unwrap().pop())
    }
}
