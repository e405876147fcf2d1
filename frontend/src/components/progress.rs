use leptos::*;

/// Indeterminate progress shown while the upload request is in flight.
#[component]
pub fn UploadProgress() -> impl IntoView {
    view! {
        <div class="upload-progress" id="upload-progress">
            <div class="progress-text">"Uploading..."</div>
            <div class="progress-bar">
                <div class="progress-fill indeterminate"></div>
            </div>
        </div>
    }
}
