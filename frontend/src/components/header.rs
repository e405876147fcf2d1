use leptos::*;

use crate::{APP_NAME, NAV_LINKS};

/// Anchor to a page rendered by the back office server.
///
/// `rel="external"` keeps the router from handling the click, so the
/// browser does a full page load.
#[component]
pub fn ServerLink(href: &'static str, class: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class=class rel="external">{label}</a>
    }
}

/// Top bar with the back office navigation.
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header>
            <div class="header-left">
                <ServerLink href="/" class="logo" label=APP_NAME/>
                <span class="badge">"Back office"</span>
            </div>
            <button
                class="menu-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="header-right" class:show=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! { <ServerLink href=href class="nav-link" label=label/> }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
