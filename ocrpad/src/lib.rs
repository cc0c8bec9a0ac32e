//! Image-to-text client.
//!
//! An [`UploadSession`](session::UploadSession) coordinates file selection,
//! preview, submission to a remote OCR service through
//! [`OcrClient`](ocr::OcrClient), and copy/download of the recognized text.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod models;
pub mod ocr;
pub mod session;
