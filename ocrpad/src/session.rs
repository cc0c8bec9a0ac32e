//! Upload → submit → result lifecycle for one user interaction session.
//!
//! All mutation happens through `&mut self`, so a session lives on one logical
//! thread. The OCR call is the only suspension point; it is split into
//! [`UploadSession::begin_submission`] and [`UploadSession::complete_submission`]
//! so an event loop can keep dispatching other actions (language changes, new
//! selections) while a request is outstanding. [`UploadSession::submit`] runs
//! both halves back to back.
//!
//! A [`Submission`] is the only thing that keeps the session in `Loading`.
//! Dropping it without completing it (a cancelled `submit` future, a timeout
//! around it, an event loop that gives up) releases the session back to `Idle`.

use std::path::PathBuf;
use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::capabilities::{Clipboard, FileDownloader, FilePicker};
use crate::error::{OcrPadError, Result};
use crate::models::{ImageFile, Language, PreviewHandle, SessionStatus, TextDownload};
use crate::ocr::OcrService;

pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);
pub const PROCESSING_FAILED_MESSAGE: &str = "Processing failed. Please try again.";

/// An outstanding OCR request. Handed out by `begin_submission` and consumed
/// by `complete_submission`. Dropping it un-completed abandons the request.
#[derive(Debug)]
pub struct Submission {
    id: u64,
    generation: u64,
    image: ImageFile,
    language: Language,
    ticket: Arc<()>,
}

impl Submission {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn image(&self) -> &ImageFile {
        &self.image
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    ticket: Weak<()>,
}

impl InFlight {
    fn is_abandoned(&self) -> bool {
        self.ticket.strong_count() == 0
    }

    fn owns(&self, submission: &Submission) -> bool {
        std::ptr::eq(self.ticket.as_ptr(), Arc::as_ptr(&submission.ticket))
    }
}

/// Render-ready view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub language: Language,
    pub file_name: Option<String>,
    pub preview_url: Option<String>,
    pub recognized_text: String,
    pub error_message: Option<String>,
    pub copy_feedback_active: bool,
    pub can_submit: bool,
}

pub struct UploadSession {
    selected_image: Option<ImageFile>,
    preview: Option<PreviewHandle>,
    recognized_text: String,
    language: Language,
    status: SessionStatus,
    error_message: Option<String>,
    copy_feedback_until: Option<Instant>,
    // Bumped on every accepted selection; results for an older generation are stale.
    generation: u64,
    in_flight: Option<InFlight>,
    next_submission_id: u64,
    ocr: Box<dyn OcrService>,
    clipboard: Box<dyn Clipboard>,
    downloader: Box<dyn FileDownloader>,
    picker: Box<dyn FilePicker>,
}

impl UploadSession {
    pub fn new(
        ocr: Box<dyn OcrService>,
        clipboard: Box<dyn Clipboard>,
        downloader: Box<dyn FileDownloader>,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        Self {
            selected_image: None,
            preview: None,
            recognized_text: String::new(),
            language: Language::default(),
            status: SessionStatus::Idle,
            error_message: None,
            copy_feedback_until: None,
            generation: 0,
            in_flight: None,
            next_submission_id: 0,
            ocr,
            clipboard,
            downloader,
            picker,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn status(&self) -> SessionStatus {
        if self.status == SessionStatus::Loading && self.submission_abandoned() {
            return SessionStatus::Idle;
        }
        self.status
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selected_image(&self) -> Option<&ImageFile> {
        self.selected_image.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn recognized_text(&self) -> &str {
        &self.recognized_text
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status() == SessionStatus::Loading
    }

    fn submission_abandoned(&self) -> bool {
        self.in_flight.as_ref().map_or(true, InFlight::is_abandoned)
    }

    /// Leaves `Loading` if the outstanding submission was dropped.
    fn release_abandoned(&mut self) {
        if self.status != SessionStatus::Loading || !self.submission_abandoned() {
            return;
        }
        if let Some(in_flight) = self.in_flight.take() {
            warn!(submission = in_flight.id, "Submission abandoned before completion");
        }
        self.status = SessionStatus::Idle;
    }

    pub fn can_submit(&self) -> bool {
        self.selected_image.is_some() && !self.is_loading()
    }

    /// True for `COPY_FEEDBACK_WINDOW` after the most recent successful copy.
    pub fn copy_feedback_active(&self) -> bool {
        self.copy_feedback_until
            .is_some_and(|deadline| Instant::now() < deadline)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status(),
            language: self.language,
            file_name: self.selected_image.as_ref().map(|i| i.name().to_string()),
            preview_url: self.preview.as_ref().map(|p| p.url().to_string()),
            recognized_text: self.recognized_text.clone(),
            error_message: self.error_message.clone(),
            copy_feedback_active: self.copy_feedback_active(),
            can_submit: self.can_submit(),
        }
    }

    /// Selects `candidate` if it is an image. Anything else is ignored without
    /// touching state. Returns whether the file was accepted.
    pub fn select_file(&mut self, candidate: ImageFile) -> bool {
        match self.accept_file(candidate) {
            Ok(()) => true,
            Err(e) => {
                debug!("Ignoring selection: {}", e);
                false
            }
        }
    }

    fn accept_file(&mut self, candidate: ImageFile) -> Result<()> {
        if !candidate.is_image() {
            return Err(OcrPadError::InvalidFileType(
                candidate.media_type().to_string(),
            ));
        }

        self.release_abandoned();
        info!(
            file = candidate.name(),
            media_type = candidate.media_type(),
            bytes = candidate.len(),
            "Image selected"
        );

        self.preview = Some(PreviewHandle::for_image(&candidate));
        self.selected_image = Some(candidate);
        self.generation += 1;
        self.recognized_text.clear();
        self.error_message = None;
        self.copy_feedback_until = None;

        if !self.is_loading() {
            self.status = SessionStatus::Idle;
        }
        Ok(())
    }

    /// Asks the picker for a file and selects it. Returns whether a file was
    /// accepted; a cancelled pick is not an error.
    pub fn pick_file(&mut self) -> Result<bool> {
        match self.picker.pick()? {
            Some(candidate) => Ok(self.select_file(candidate)),
            None => Ok(false),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!(from = %self.language, to = %language, "Language changed");
        }
        self.language = language;
    }

    /// Starts a submission if one is allowed: an image is selected and no
    /// request is outstanding. Returns `None` (and changes nothing) otherwise.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        self.release_abandoned();
        if self.is_loading() {
            debug!("Submission already in flight, ignoring submit");
            return None;
        }
        let image = self.selected_image.clone()?;

        self.next_submission_id += 1;
        let submission = Submission {
            id: self.next_submission_id,
            generation: self.generation,
            image,
            language: self.language,
            ticket: Arc::new(()),
        };

        self.status = SessionStatus::Loading;
        self.error_message = None;
        self.copy_feedback_until = None;
        self.in_flight = Some(InFlight {
            id: submission.id,
            ticket: Arc::downgrade(&submission.ticket),
        });

        info!(
            submission = submission.id,
            file = submission.image.name(),
            lang = %submission.language,
            "Submitting image for OCR"
        );
        Some(submission)
    }

    /// Resumes after the OCR call resolved. Leaves `Loading` unless the
    /// submission belongs to a different session, in which case it is ignored.
    pub fn complete_submission(&mut self, submission: Submission, outcome: Result<String>) {
        // Only this session's live ticket can be in flight here; a foreign ticket
        // says nothing about our own request, which still holds `Loading`.
        if !self.in_flight.as_ref().is_some_and(|f| f.owns(&submission)) {
            warn!(
                submission = submission.id,
                "Completion for a submission that is not in flight, ignoring"
            );
            self.release_abandoned();
            return;
        }
        self.in_flight = None;

        if submission.generation != self.generation {
            warn!(
                submission = submission.id,
                file = submission.image.name(),
                "Discarding OCR result for a replaced selection"
            );
            self.status = SessionStatus::Idle;
            return;
        }

        match outcome {
            Ok(text) => {
                info!(submission = submission.id, "OCR succeeded");
                self.recognized_text = text;
                self.status = SessionStatus::Success;
            }
            Err(e) => {
                warn!(submission = submission.id, "OCR failed: {}", e);
                self.error_message = Some(
                    e.user_message()
                        .unwrap_or_else(|| PROCESSING_FAILED_MESSAGE.to_string()),
                );
                self.status = SessionStatus::Error;
            }
        }
    }

    /// Submits the selected image and waits for the result. A no-op without a
    /// selection or while a submission is outstanding. Cancel-safe: dropping
    /// the future returns the session to `Idle`.
    pub async fn submit(&mut self) {
        let Some(submission) = self.begin_submission() else {
            return;
        };
        let outcome = self
            .ocr
            .recognize(&submission.image, submission.language)
            .await;
        self.complete_submission(submission, outcome);
    }

    /// Copies the recognized text. Failures land in `error_message`; the text
    /// and status are left alone.
    pub fn copy_result(&mut self) {
        if self.recognized_text.is_empty() {
            return;
        }

        match self.clipboard.write_text(&self.recognized_text) {
            Ok(()) => {
                debug!("Copied recognized text to clipboard");
                self.copy_feedback_until = Some(Instant::now() + COPY_FEEDBACK_WINDOW);
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.error_message = Some(
                    e.user_message()
                        .unwrap_or_else(|| "Failed to copy text".to_string()),
                );
            }
        }
    }

    /// The recognized text as a percent-encoded text-file download, or `None`
    /// when there is nothing to download.
    pub fn download_result(&self) -> Option<TextDownload> {
        if self.recognized_text.is_empty() {
            return None;
        }
        Some(TextDownload::from_text(&self.recognized_text))
    }

    /// Hands the download to the configured downloader.
    pub fn save_result(&self) -> Result<Option<PathBuf>> {
        match self.download_result() {
            Some(download) => self.downloader.save(&download).map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for UploadSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadSession")
            .field("selected_image", &self.selected_image)
            .field("status", &self.status())
            .field("language", &self.language)
            .field("recognized_text", &self.recognized_text)
            .field("error_message", &self.error_message)
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
