use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::ImageFile;

pub trait FilePicker: Send {
    /// Returns the chosen file, or `None` when the user picked nothing.
    fn pick(&self) -> Result<Option<ImageFile>>;
}

/// Picks a fixed path, the way a CLI argument or a drop target hands over a
/// file.
#[derive(Debug, Clone)]
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FilePicker for PathPicker {
    fn pick(&self) -> Result<Option<ImageFile>> {
        load_image(&self.path).map(Some)
    }
}

/// Reads a file and declares its media type, sniffing the content first and
/// falling back to the extension.
pub fn load_image(path: &Path) -> Result<ImageFile> {
    let bytes = fs::read(path)?;

    let media_type = match infer::get(&bytes) {
        Some(kind) => kind.mime_type().to_string(),
        None => mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(file = %name, media_type = %media_type, bytes = bytes.len(), "Loaded file");
    Ok(ImageFile::new(name, media_type, bytes))
}
