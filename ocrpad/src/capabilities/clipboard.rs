use crate::error::Result;

pub trait Clipboard: Send {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via copypasta. Windows and macOS always have a backend.
/// Other Unix desktops need the `x11-clipboard` feature (on by default); a
/// build without it has no backend and every write fails with
/// `ClipboardWriteFailed`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Whether this build can reach a real clipboard.
    pub const fn has_backend() -> bool {
        backend::AVAILABLE
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        backend::write(text)
    }
}

#[cfg(any(
    windows,
    target_os = "macos",
    all(
        unix,
        not(any(target_os = "android", target_os = "ios", target_os = "emscripten")),
        feature = "x11-clipboard"
    )
))]
mod backend {
    use copypasta::{ClipboardContext, ClipboardProvider};

    use crate::error::{OcrPadError, Result};

    pub(super) const AVAILABLE: bool = true;

    pub(super) fn write(text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new()
            .map_err(|e| OcrPadError::ClipboardWriteFailed(e.to_string()))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| OcrPadError::ClipboardWriteFailed(e.to_string()))
    }
}

// copypasta only offers a no-op context here, which would report success for
// text that never reached a clipboard.
#[cfg(not(any(
    windows,
    target_os = "macos",
    all(
        unix,
        not(any(target_os = "android", target_os = "ios", target_os = "emscripten")),
        feature = "x11-clipboard"
    )
)))]
mod backend {
    use tracing::debug;

    use crate::error::{OcrPadError, Result};

    pub(super) const AVAILABLE: bool = false;

    pub(super) fn write(text: &str) -> Result<()> {
        debug!(chars = text.chars().count(), "No clipboard backend compiled in");
        Err(OcrPadError::ClipboardWriteFailed(
            "no clipboard backend in this build (enable the x11-clipboard feature)".to_string(),
        ))
    }
}
