//! Footer component

use leptos::*;

use super::ServerLink;
use crate::{APP_NAME, FOOTER_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "Copyright © 2025 " {APP_NAME} " • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                {FOOTER_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! { <ServerLink href=href class="footer-link" label=label/> }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
