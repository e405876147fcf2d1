//! In-memory doubles for the widget's injected browser surface.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::{FileHandle, PageHost, PreviewUrls};

#[derive(Clone, Debug, PartialEq)]
pub struct FakeFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FakeFile {
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }
}

impl FileHandle for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// Records notifications and reloads; answers confirmations from a queue
/// (defaulting to yes).
#[derive(Default)]
pub struct RecordingHost {
    pub notices: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub answers: RefCell<VecDeque<bool>>,
    pub reloads: Cell<u32>,
}

impl RecordingHost {
    pub fn declining() -> Self {
        let host = Self::default();
        host.answers.borrow_mut().push_back(false);
        host
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl PageHost for RecordingHost {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(true)
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// Hands out `blob:test/<n>` URLs and remembers what was revoked.
#[derive(Default)]
pub struct FakeUrls {
    pub created: RefCell<Vec<String>>,
    pub released: RefCell<Vec<String>>,
}

impl FakeUrls {
    pub fn live(&self) -> usize {
        self.created.borrow().len() - self.released.borrow().len()
    }
}

impl PreviewUrls<FakeFile> for FakeUrls {
    fn create(&self, file: &FakeFile) -> Option<String> {
        let url = format!("blob:test/{}", file.name);
        self.created.borrow_mut().push(url.clone());
        Some(url)
    }

    fn release(&self, url: &str) {
        self.released.borrow_mut().push(url.to_string());
    }
}
