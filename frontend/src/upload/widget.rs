//! Upload widget state: accepted files, their previews and the submit guard.
//!
//! ```text
//!   accept ──▶ validate ──▶ batch + preview      remove ──▶ confirm ──▶ batch - preview
//!
//!   Idle ──begin_submit──▶ Submitting ──finish_submit──┬─▶ Idle       (failure, batch kept)
//!                                                      └─▶ Reloading  (success, page reload)
//! ```
//!
//! The widget never touches the DOM. Notifications, confirmations and the
//! reload go through [`PageHost`]; preview URLs through [`PreviewUrls`].

use thiserror::Error;

use super::{format_file_size, FileHandle, FileId, UploadBatch, ValidationPolicy};
use crate::types::{AppResult, UploadResponse};

/// Message shown when an upload completes.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Upload successful!";

/// Message shown when the upload request itself failed.
pub const UPLOAD_ERROR_MESSAGE: &str = "An error occurred while uploading!";

/// The page the widget lives in.
pub trait PageHost {
    /// Show a blocking, user-visible message.
    fn notify(&self, message: &str);
    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;
    /// Reload the whole page.
    fn reload(&self);
}

/// Source of temporary URLs for preview media.
pub trait PreviewUrls<F> {
    fn create(&self, file: &F) -> Option<String>;
    fn release(&self, url: &str);
}

/// How a preview entry shows its file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Image { url: String },
    Video { url: String },
    /// Name and size only.
    Metadata,
}

impl PreviewKind {
    pub fn url(&self) -> Option<&str> {
        match self {
            PreviewKind::Image { url } | PreviewKind::Video { url } => Some(url),
            PreviewKind::Metadata => None,
        }
    }
}

/// One rendered preview card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    pub id: FileId,
    pub name: String,
    pub size_label: String,
    pub mime_type: String,
    pub kind: PreviewKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// Success was reported and the page is going away.
    Reloading,
}

/// Why `begin_submit` refused to start a request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please select a file to upload!")]
    EmptyBatch,

    #[error("An upload is already in progress")]
    InFlight,

    #[error("The page is reloading")]
    Reloading,
}

/// Result of a complete submit round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was made.
    Rejected(SubmitError),
    /// The server accepted the batch; the reload has been triggered.
    Reloading,
    /// The request failed; the batch is unchanged. Carries the user message.
    Failed(String),
}

/// One multipart part: the file name and its content handle.
#[derive(Clone, Debug)]
pub struct UploadPart<F> {
    pub name: String,
    pub handle: F,
}

/// Upload widget core.
pub struct UploadWidget<F> {
    policy: ValidationPolicy,
    batch: UploadBatch<F>,
    previews: Vec<PreviewEntry>,
    state: SubmitState,
}

impl<F: FileHandle> Default for UploadWidget<F> {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

impl<F: FileHandle> UploadWidget<F> {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            batch: UploadBatch::new(),
            previews: Vec::new(),
            state: SubmitState::Idle,
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn batch(&self) -> &UploadBatch<F> {
        &self.batch
    }

    /// Preview entries in acceptance order.
    pub fn previews(&self) -> &[PreviewEntry] {
        &self.previews
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Check one file, notifying the user when it is refused.
    pub fn validate(&self, file: &F, host: &impl PageHost) -> bool {
        match self.policy.check(file) {
            Ok(()) => true,
            Err(rejection) => {
                log::warn!("Rejected file: {}", rejection);
                host.notify(&rejection.to_string());
                false
            }
        }
    }

    /// Validate each file and append the valid ones, each with a preview.
    ///
    /// A refused file does not stop the rest of the selection.
    pub fn accept<I>(
        &mut self,
        files: I,
        host: &impl PageHost,
        urls: &impl PreviewUrls<F>,
    ) -> Vec<FileId>
    where
        I: IntoIterator<Item = F>,
    {
        if self.state == SubmitState::Reloading {
            return Vec::new();
        }

        let mut accepted = Vec::new();
        for file in files {
            if !self.validate(&file, host) {
                continue;
            }

            let name = file.name();
            let size = file.size();
            let mime_type = file.mime_type();
            let kind = preview_kind(&file, &mime_type, urls);

            let id = self.batch.push(file);
            self.previews.push(PreviewEntry {
                id,
                name,
                size_label: format_file_size(size),
                mime_type,
                kind,
            });
            accepted.push(id);
        }

        if !accepted.is_empty() {
            log::debug!(
                "Accepted {} file(s), batch now holds {}",
                accepted.len(),
                self.batch.len()
            );
        }
        accepted
    }

    /// Remove a file and its preview after the user confirms.
    ///
    /// Returns `false` when the id is unknown or the user declined.
    pub fn remove(
        &mut self,
        id: FileId,
        host: &impl PageHost,
        urls: &impl PreviewUrls<F>,
    ) -> bool {
        if self.state == SubmitState::Reloading {
            return false;
        }
        let Some(index) = self.previews.iter().position(|entry| entry.id == id) else {
            return false;
        };

        let prompt = format!("Remove \"{}\"?", self.previews[index].name);
        if !host.confirm(&prompt) {
            return false;
        }

        let entry = self.previews.remove(index);
        self.batch.remove(id);
        if let Some(url) = entry.kind.url() {
            urls.release(url);
        }
        log::debug!("Removed {} ({})", entry.name, id);
        true
    }

    /// Enter `Submitting` and hand out the parts to send.
    ///
    /// An empty batch is reported to the user; a second call while a
    /// request is outstanding is refused silently.
    pub fn begin_submit(
        &mut self,
        host: &impl PageHost,
    ) -> Result<Vec<UploadPart<F>>, SubmitError> {
        match self.state {
            SubmitState::Submitting => {
                log::warn!("Upload already in progress, ignoring submit");
                return Err(SubmitError::InFlight);
            }
            SubmitState::Reloading => return Err(SubmitError::Reloading),
            SubmitState::Idle => {}
        }

        if self.batch.is_empty() {
            let err = SubmitError::EmptyBatch;
            host.notify(&err.to_string());
            return Err(err);
        }

        self.state = SubmitState::Submitting;
        log::info!(
            "📤 Uploading {} file(s), {}",
            self.batch.len(),
            format_file_size(self.batch.total_size())
        );

        Ok(self
            .batch
            .iter()
            .map(|file| UploadPart {
                name: file.name.clone(),
                handle: file.handle.clone(),
            })
            .collect())
    }

    /// Settle an outstanding submission with the transport's result.
    pub fn finish_submit(
        &mut self,
        result: AppResult<UploadResponse>,
        host: &impl PageHost,
    ) -> SubmitOutcome {
        match result {
            Ok(response) if response.success => {
                log::info!("✅ Upload complete");
                self.state = SubmitState::Reloading;
                host.notify(UPLOAD_SUCCESS_MESSAGE);
                host.reload();
                SubmitOutcome::Reloading
            }
            Ok(response) => {
                self.state = SubmitState::Idle;
                let reason = response
                    .error
                    .or(response.message)
                    .unwrap_or_else(|| "unknown error".to_string());
                let message = format!("Upload failed: {}", reason);
                log::warn!("❌ {}", message);
                host.notify(&message);
                SubmitOutcome::Failed(message)
            }
            Err(err) => {
                self.state = SubmitState::Idle;
                log::error!("❌ Upload error: {}", err);
                host.notify(UPLOAD_ERROR_MESSAGE);
                SubmitOutcome::Failed(UPLOAD_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// Drop every pending file and release every preview URL.
    ///
    /// Called when the widget goes away; batch and previews are emptied
    /// together.
    pub fn teardown(&mut self, urls: &impl PreviewUrls<F>) {
        for entry in self.previews.drain(..) {
            if let Some(url) = entry.kind.url() {
                urls.release(url);
            }
        }
        self.batch.clear();
    }
}

fn preview_kind<F>(file: &F, mime_type: &str, urls: &impl PreviewUrls<F>) -> PreviewKind {
    if mime_type.starts_with("image/") {
        urls.create(file)
            .map_or(PreviewKind::Metadata, |url| PreviewKind::Image { url })
    } else if mime_type.starts_with("video/") {
        urls.create(file)
            .map_or(PreviewKind::Metadata, |url| PreviewKind::Video { url })
    } else {
        PreviewKind::Metadata
    }
}
