//! Media upload section with drag & drop support.
//!
//! Wires DOM events to the [`UploadWidget`] core and mirrors its preview
//! list into a signal for rendering.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_dom::helpers::window_event_listener;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use super::{PreviewGrid, UploadProgress};
use crate::config::FILE_INPUT_ACCEPT;
use crate::services::{submit_with, BrowserHost, MultipartUpload, ObjectUrls};
use crate::upload::{
    DragKind, DragResponse, DragSurface, DropZone, FileId, PreviewEntry, SubmitOutcome,
    UploadWidget, ValidationPolicy,
};

fn files_of(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn apply_drag_response(ev: &DragEvent, response: DragResponse) {
    if response.prevent_default {
        ev.prevent_default();
    }
    if response.stop_propagation {
        ev.stop_propagation();
    }
}

/// Keeps the browser from opening files dropped outside the target.
fn suppress_page_drag(ev: DragEvent) {
    if let Some(kind) = DragKind::from_event_type(&ev.type_()) {
        apply_drag_response(&ev, DropZone::new().handle(kind, DragSurface::Page));
    }
}

#[component]
pub fn UploadSection(
    /// Validation rules; the configured image/video policy when omitted.
    #[prop(optional)]
    policy: Option<ValidationPolicy>,
) -> impl IntoView {
    let shared = Rc::new(RefCell::new(UploadWidget::<File>::new(policy.unwrap_or_default())));
    let limit = shared.borrow().policy().limit_label();

    let (previews, set_previews) = create_signal(Vec::<PreviewEntry>::new());
    let (is_uploading, set_is_uploading) = create_signal(false);
    let zone = create_rw_signal(DropZone::new());
    let file_input = create_node_ref::<html::Input>();

    let teardown_handle = Rc::clone(&shared);
    let widget = store_value(shared);

    let page_listeners = [
        window_event_listener(ev::dragenter, suppress_page_drag),
        window_event_listener(ev::dragover, suppress_page_drag),
        window_event_listener(ev::dragleave, suppress_page_drag),
        window_event_listener(ev::drop, suppress_page_drag),
    ];
    on_cleanup(move || {
        for listener in page_listeners {
            listener.remove();
        }
        teardown_handle.borrow_mut().teardown(&ObjectUrls);
    });

    let accept = move |files: Vec<File>| {
        if files.is_empty() {
            return;
        }
        let shared = widget.get_value();
        shared.borrow_mut().accept(files, &BrowserHost, &ObjectUrls);
        set_previews.set(shared.borrow().previews().to_vec());
    };

    let on_target_drag = move |ev: DragEvent| {
        let Some(kind) = DragKind::from_event_type(&ev.type_()) else {
            return;
        };
        let Some(response) = zone.try_update(|z| z.handle(kind, DragSurface::Target)) else {
            return;
        };
        apply_drag_response(&ev, response);
        if response.deliver_files {
            accept(files_of(ev.data_transfer().and_then(|dt| dt.files())));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        accept(files_of(input.files()));
        // Allow picking the same file again.
        input.set_value("");
    };

    let open_chooser = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_remove = Callback::new(move |id: FileId| {
        let shared = widget.get_value();
        let removed = shared.borrow_mut().remove(id, &BrowserHost, &ObjectUrls);
        if removed {
            set_previews.set(shared.borrow().previews().to_vec());
        }
    });

    let on_submit = move |_| {
        let shared = widget.get_value();
        spawn_local(async move {
            let transport = MultipartUpload::default();
            let outcome = submit_with(&*shared, &transport, &BrowserHost, || {
                set_is_uploading.set(true)
            })
            .await;
            // The page is going away on success; leave it untouched.
            if outcome != SubmitOutcome::Reloading {
                set_is_uploading.set(false);
            }
        });
    };

    view! {
        <div class="upload-widget">
            <div
                class="upload-dropzone"
                id="upload-dropzone"
                class:highlight=move || zone.with(|z| z.is_highlighted())
                on:click=open_chooser
                on:dragenter=on_target_drag
                on:dragover=on_target_drag
                on:dragleave=on_target_drag
                on:drop=on_target_drag
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drop images or videos here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint">
                    "JPG, PNG, GIF, WEBP, MP4, AVI, MOV • max " {limit}
                </div>
            </div>

            <Show
                when=move || is_uploading.get()
                fallback=|| view! { }
            >
                <UploadProgress/>
            </Show>

            <input
                type="file"
                id="file-input"
                multiple=true
                accept=FILE_INPUT_ACCEPT
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <PreviewGrid entries=previews on_remove=on_remove/>

            <div class="upload-actions">
                <span class="upload-count">
                    {move || match previews.get().len() {
                        0 => "No files selected".to_string(),
                        1 => "1 file ready".to_string(),
                        n => format!("{} files ready", n),
                    }}
                </span>
                <button
                    class="btn btn-primary"
                    on:click=on_submit
                    disabled=move || is_uploading.get()
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </div>
    }
}
