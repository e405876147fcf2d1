//! Functions callable from server-rendered templates.
//!
//! Templates wire buttons as `onclick="approveComment(12)"`; each call
//! confirms, posts and reloads through [`run_action`].

use leptos::spawn_local;
use wasm_bindgen::prelude::*;

use crate::services::{confirm_delete_message, run_action, BrowserHost, HttpActions, PageAction};
use crate::upload::PageHost;

fn dispatch(action: PageAction) {
    spawn_local(async move {
        let outcome = run_action(action, &HttpActions::default(), &BrowserHost).await;
        log::debug!("{:?} -> {:?}", action, outcome);
    });
}

#[wasm_bindgen(js_name = approveComment)]
pub fn approve_comment(id: u32) {
    dispatch(PageAction::ApproveComment(id));
}

#[wasm_bindgen(js_name = rejectComment)]
pub fn reject_comment(id: u32) {
    dispatch(PageAction::RejectComment(id));
}

#[wasm_bindgen(js_name = publishPost)]
pub fn publish_post(id: u32) {
    dispatch(PageAction::PublishPost(id));
}

#[wasm_bindgen(js_name = deleteMedia)]
pub fn delete_media(id: u32) {
    dispatch(PageAction::DeleteMedia(id));
}

/// Guard for delete links: `onsubmit="return confirmDelete('Suite 12')"`.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(item_name: &str) -> bool {
    BrowserHost.confirm(&confirm_delete_message(item_name))
}
