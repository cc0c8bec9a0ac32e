//! Environment capabilities an upload session depends on.
//!
//! The session never touches the clipboard, the filesystem or a file dialog
//! directly; it goes through these traits so front ends supply real
//! implementations and tests supply fakes.

mod clipboard;
mod downloader;
mod picker;

pub use clipboard::{Clipboard, SystemClipboard};
pub use downloader::{DiskDownloader, FileDownloader};
pub use picker::{load_image, FilePicker, PathPicker};
