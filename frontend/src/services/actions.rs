//! Fire-and-reload moderation actions.
//!
//! Each action asks for confirmation, sends an empty `POST` and reloads the
//! page when the server answers `{"success": true}`.

use gloo_net::http::Request;

use crate::config::{
    APPROVE_COMMENT_PATH, BACKEND_URL, DELETE_MEDIA_PATH, PUBLISH_POST_PATH, REJECT_COMMENT_PATH,
};
use crate::types::{ActionResponse, AppError, AppResult};
use crate::upload::PageHost;

/// Message shown when an action request could not be completed.
pub const ACTION_ERROR_MESSAGE: &str = "Something went wrong. Please try again!";

/// A state-changing action on a server resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    ApproveComment(u32),
    RejectComment(u32),
    PublishPost(u32),
    DeleteMedia(u32),
}

impl PageAction {
    pub fn path(&self) -> String {
        match self {
            PageAction::ApproveComment(id) => format!("{}/{}", APPROVE_COMMENT_PATH, id),
            PageAction::RejectComment(id) => format!("{}/{}", REJECT_COMMENT_PATH, id),
            PageAction::PublishPost(id) => format!("{}/{}", PUBLISH_POST_PATH, id),
            PageAction::DeleteMedia(id) => format!("{}/{}", DELETE_MEDIA_PATH, id),
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            PageAction::ApproveComment(_) => "Approve this comment?",
            PageAction::RejectComment(_) => "Reject this comment?",
            PageAction::PublishPost(_) => "Publish this post?",
            PageAction::DeleteMedia(_) => "Delete this media file? This cannot be undone.",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            PageAction::ApproveComment(_) => "Comment approved!",
            PageAction::RejectComment(_) => "Comment rejected!",
            PageAction::PublishPost(_) => "Post published!",
            PageAction::DeleteMedia(_) => "Media deleted!",
        }
    }
}

/// Confirmation text for deleting a named item.
pub fn confirm_delete_message(item_name: &str) -> String {
    format!("Are you sure you want to delete \"{}\"? This cannot be undone.", item_name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// Success; the reload has been triggered.
    Reloading,
    /// The server answered `success: false`.
    Refused,
    /// The request failed.
    Failed,
}

/// Sends an action request.
#[allow(async_fn_in_trait)]
pub trait ActionTransport {
    async fn post(&self, path: &str) -> AppResult<ActionResponse>;
}

/// JSON `POST` with no body against the backend.
#[derive(Clone, Debug)]
pub struct HttpActions {
    base_url: String,
}

impl Default for HttpActions {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl HttpActions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ActionTransport for HttpActions {
    async fn post(&self, path: &str) -> AppResult<ActionResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        response
            .json::<ActionResponse>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Confirm, send and reload.
pub async fn run_action<T, H>(action: PageAction, transport: &T, host: &H) -> ActionOutcome
where
    T: ActionTransport,
    H: PageHost,
{
    if !host.confirm(action.prompt()) {
        return ActionOutcome::Cancelled;
    }

    let path = action.path();
    match transport.post(&path).await {
        Ok(response) if response.success => {
            log::info!("✅ {:?} done", action);
            host.notify(action.success_message());
            host.reload();
            ActionOutcome::Reloading
        }
        Ok(response) => {
            log::warn!("Server refused {}: {:?}", path, response);
            if let Some(reason) = response.error.or(response.message) {
                host.notify(&reason);
            }
            ActionOutcome::Refused
        }
        Err(err) => {
            log::error!("❌ {} failed: {}", path, err);
            host.notify(ACTION_ERROR_MESSAGE);
            ActionOutcome::Failed
        }
    }
}
