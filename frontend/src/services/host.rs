//! Browser implementations of the widget's page and preview interfaces.

use web_sys::{File, Url};

use crate::upload::{PageHost, PreviewUrls};

/// The real page: `alert`, `confirm` and `location.reload`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl PageHost for BrowserHost {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to show: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }
}

/// `blob:` object URLs for preview images and videos.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrls;

impl PreviewUrls<File> for ObjectUrls {
    fn create(&self, file: &File) -> Option<String> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Could not create preview URL for {}: {:?}", file.name(), e);
                None
            }
        }
    }

    fn release(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Could not revoke {}: {:?}", url, e);
        }
    }
}
