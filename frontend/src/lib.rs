//! Hotel Media - Frontend Rust/Leptos Application
//!
//! A WebAssembly front end for the hotel media back office: a media
//! upload page plus the confirm-and-reload helpers the server-rendered
//! pages call.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MediaPage                                                   │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection                                          │
//! │      ├── drop zone + hidden file input                      │
//! │      ├── UploadProgress (while submitting)                  │
//! │      └── PreviewGrid                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`upload`] - Browser-independent widget core (validation, batch, submit guard)
//! - [`types`] - API responses and errors
//! - [`components`] - UI components
//! - [`services`] - Upload transport, moderation actions, browser host
//! - [`bindings`] - Functions exported to page scripts

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod bindings;
pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod upload;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ActionResponse, AppError, AppResult, UploadResponse};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Hotel Media - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MediaPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MediaPage() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadSection/>
        </div>

        <Footer/>
    }
}
