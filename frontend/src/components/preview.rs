//! Preview cards for files waiting to be uploaded.

use leptos::*;

use crate::upload::{FileId, PreviewEntry, PreviewKind};

#[component]
pub fn PreviewGrid(
    entries: ReadSignal<Vec<PreviewEntry>>,
    on_remove: Callback<FileId>,
) -> impl IntoView {
    view! {
        <div class="file-preview" id="file-preview">
            <For
                each=move || entries.get()
                key=|entry| entry.id
                children=move |entry| view! { <PreviewCard entry=entry on_remove=on_remove/> }
            />
        </div>
    }
}

/// One file: thumbnail or player, name, size and a delete button.
#[component]
pub fn PreviewCard(entry: PreviewEntry, on_remove: Callback<FileId>) -> impl IntoView {
    let id = entry.id;
    let media = match entry.kind {
        PreviewKind::Image { url } => view! {
            <img src=url alt=entry.name.clone() class="file-preview-image"/>
        }
        .into_view(),
        PreviewKind::Video { url } => view! {
            <video src=url class="file-preview-video" controls=true></video>
        }
        .into_view(),
        PreviewKind::Metadata => view! {
            <div class="file-preview-icon">"📄"</div>
        }
        .into_view(),
    };

    view! {
        <div class="file-preview-item" data-mime=entry.mime_type>
            {media}
            <div class="file-preview-info">
                // Truncated by CSS; the title keeps the full name.
                <div class="file-preview-name" title=entry.name.clone()>{entry.name}</div>
                <div class="file-preview-size">{entry.size_label}</div>
                <div class="file-preview-actions">
                    <button class="file-delete-btn" on:click=move |_| on_remove.call(id)>
                        "🗑 Remove"
                    </button>
                </div>
            </div>
        </div>
    }
}
