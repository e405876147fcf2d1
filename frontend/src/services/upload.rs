//! Multipart upload of the widget's batch to the media endpoint.

use std::cell::RefCell;

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{BACKEND_URL, UPLOAD_ENDPOINT, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, UploadResponse};
use crate::upload::{FileHandle, PageHost, SubmitOutcome, UploadPart, UploadWidget};

/// Sends a batch of parts as one request.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    async fn send(&self, parts: &[UploadPart<F>]) -> AppResult<UploadResponse>;
}

/// `POST` of a `FormData` body with one repeated field per file.
#[derive(Clone, Debug)]
pub struct MultipartUpload {
    url: String,
    field: String,
}

impl Default for MultipartUpload {
    fn default() -> Self {
        Self::new(format!("{}{}", BACKEND_URL, UPLOAD_ENDPOINT), UPLOAD_FIELD)
    }
}

impl MultipartUpload {
    pub fn new(url: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            field: field.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UploadTransport<File> for MultipartUpload {
    async fn send(&self, parts: &[UploadPart<File>]) -> AppResult<UploadResponse> {
        let form_data = FormData::new().map_err(|e| AppError::from_js(&e))?;
        for part in parts {
            form_data
                .append_with_blob_and_filename(&self.field, &part.handle, &part.name)
                .map_err(|e| AppError::from_js(&e))?;
        }

        let request = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        decode_upload_response(status, &body)
    }
}

/// Decode the endpoint's JSON answer.
///
/// Rejections come back as JSON with a 4xx status, so the body is tried
/// first and the status only matters when the body is not JSON.
pub fn decode_upload_response(status: u16, body: &str) -> AppResult<UploadResponse> {
    match serde_json::from_str::<UploadResponse>(body) {
        Ok(response) => Ok(response),
        Err(_) if !(200..300).contains(&status) => Err(AppError::Server {
            status,
            body: body.chars().take(200).collect(),
        }),
        Err(e) => Err(AppError::Decode(e.to_string())),
    }
}

/// Submit everything in the widget's batch.
///
/// The widget is borrowed only around the synchronous steps, never across
/// the network round trip, so event handlers keep working while the
/// request is in flight.
pub async fn submit<F, T, H>(
    widget: &RefCell<UploadWidget<F>>,
    transport: &T,
    host: &H,
) -> SubmitOutcome
where
    F: FileHandle,
    T: UploadTransport<F>,
    H: PageHost,
{
    submit_with(widget, transport, host, || {}).await
}

/// [`submit`] with a hook that runs once the request is about to go out.
///
/// `on_started` is not called when the submit is rejected (empty batch,
/// upload already in flight, page reloading).
pub async fn submit_with<F, T, H>(
    widget: &RefCell<UploadWidget<F>>,
    transport: &T,
    host: &H,
    on_started: impl FnOnce(),
) -> SubmitOutcome
where
    F: FileHandle,
    T: UploadTransport<F>,
    H: PageHost,
{
    let started = widget.borrow_mut().begin_submit(host);
    let parts = match started {
        Ok(parts) => parts,
        Err(err) => return SubmitOutcome::Rejected(err),
    };
    on_started();

    let result = transport.send(&parts).await;
    widget.borrow_mut().finish_submit(result, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::testing::{FakeFile, FakeUrls, RecordingHost};
    use crate::upload::{SubmitError, SubmitState, UPLOAD_ERROR_MESSAGE};
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Answers with a fixed result and inspects the widget mid-flight.
    struct ScriptedTransport<'a> {
        widget: &'a RefCell<UploadWidget<FakeFile>>,
        answer: AppResult<UploadResponse>,
        calls: Cell<u32>,
        sent: RefCell<Vec<String>>,
        state_seen: Cell<Option<SubmitState>>,
        second_submit: RefCell<Option<SubmitError>>,
    }

    impl<'a> ScriptedTransport<'a> {
        fn new(
            widget: &'a RefCell<UploadWidget<FakeFile>>,
            answer: AppResult<UploadResponse>,
        ) -> Self {
            Self {
                widget,
                answer,
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                state_seen: Cell::new(None),
                second_submit: RefCell::new(None),
            }
        }
    }

    impl UploadTransport<FakeFile> for ScriptedTransport<'_> {
        async fn send(&self, parts: &[UploadPart<FakeFile>]) -> AppResult<UploadResponse> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().extend(parts.iter().map(|p| p.name.clone()));

            // The widget must not be borrowed while the request is out.
            let mut widget = self.widget.borrow_mut();
            self.state_seen.set(Some(widget.state()));
            let again = widget.begin_submit(&RecordingHost::default());
            *self.second_submit.borrow_mut() = again.err();

            self.answer.clone()
        }
    }

    fn accepted() -> AppResult<UploadResponse> {
        Ok(UploadResponse {
            success: true,
            ..Default::default()
        })
    }

    fn loaded_widget(names: &[&str]) -> RefCell<UploadWidget<FakeFile>> {
        let mut widget = UploadWidget::default();
        let files = names.iter().map(|n| FakeFile::new(n, 4096, "image/png"));
        widget.accept(files, &RecordingHost::default(), &FakeUrls::default());
        RefCell::new(widget)
    }

    #[test]
    fn test_submit_success() {
        let widget = loaded_widget(&["front.png", "pool.png"]);
        let host = RecordingHost::default();
        let transport = ScriptedTransport::new(&widget, accepted());

        let outcome = block_on(submit(&widget, &transport, &host));

        assert_eq!(outcome, SubmitOutcome::Reloading);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(transport.sent.borrow().as_slice(), ["front.png", "pool.png"]);
        assert_eq!(transport.state_seen.get(), Some(SubmitState::Submitting));
        assert_eq!(*transport.second_submit.borrow(), Some(SubmitError::InFlight));
        assert_eq!(host.reloads.get(), 1);
    }

    #[test]
    fn test_submit_empty_batch_makes_no_request() {
        let widget = RefCell::new(UploadWidget::<FakeFile>::default());
        let host = RecordingHost::default();
        let transport = ScriptedTransport::new(&widget, Ok(UploadResponse::default()));

        let outcome = block_on(submit(&widget, &transport, &host));

        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitError::EmptyBatch));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(host.notices(), vec!["Please select a file to upload!".to_string()]);
    }

    #[test]
    fn test_submit_transport_error_allows_retry() {
        let widget = loaded_widget(&["bar.png"]);
        let host = RecordingHost::default();
        let offline = Err(AppError::Network("offline".into()));
        let failing = ScriptedTransport::new(&widget, offline);

        let outcome = block_on(submit(&widget, &failing, &host));
        assert_eq!(outcome, SubmitOutcome::Failed(UPLOAD_ERROR_MESSAGE.into()));
        assert_eq!(widget.borrow().batch().len(), 1);
        assert_eq!(host.reloads.get(), 0);

        let working = ScriptedTransport::new(&widget, accepted());
        let outcome = block_on(submit(&widget, &working, &host));
        assert_eq!(outcome, SubmitOutcome::Reloading);
        assert_eq!(working.sent.borrow().as_slice(), ["bar.png"]);
    }

    #[test]
    fn test_started_hook_runs_once_before_send() {
        let widget = loaded_widget(&["spa.png"]);
        let host = RecordingHost::default();
        let transport = ScriptedTransport::new(&widget, accepted());
        let started = Cell::new(0);

        let outcome = block_on(submit_with(&widget, &transport, &host, || {
            assert_eq!(transport.calls.get(), 0);
            started.set(started.get() + 1);
        }));

        assert_eq!(outcome, SubmitOutcome::Reloading);
        assert_eq!(started.get(), 1);
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_started_hook_skipped_when_rejected() {
        let widget = RefCell::new(UploadWidget::<FakeFile>::default());
        let host = RecordingHost::default();
        let transport = ScriptedTransport::new(&widget, accepted());
        let started = Cell::new(false);

        let outcome = block_on(submit_with(&widget, &transport, &host, || started.set(true)));

        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitError::EmptyBatch));
        assert!(!started.get());
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_decode_rejection_with_error_status() {
        let response = decode_upload_response(400, r#"{"error": "No file"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("No file"));
    }

    #[test]
    fn test_decode_non_json_bodies() {
        let body = "<html>Request Entity Too Large</html>";
        let err = decode_upload_response(413, body).unwrap_err();
        assert!(matches!(err, AppError::Server { status: 413, .. }));

        let err = decode_upload_response(200, "not json").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(MultipartUpload::default().url(), "/media/upload");
    }
}
