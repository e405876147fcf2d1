//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Media Library - Upload"</h1>
            <p class="subtitle">
                "Add photos and videos of rooms, amenities and events. "
                "Files are checked in the browser before anything is sent."
            </p>
        </div>
    }
}
