//! Pending files and the ordered upload batch.

use std::fmt;

/// Read access to a user-selected blob.
///
/// Implemented for [`web_sys::File`]; tests use an in-memory fake.
pub trait FileHandle: Clone {
    /// File name as chosen by the user.
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// MIME type reported by the browser (may be empty).
    fn mime_type(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        // Blob sizes are exact integers carried in an f64.
        web_sys::Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Stable identifier assigned to a file when it is accepted.
///
/// Never reused within one widget, so two files sharing a name stay
/// distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// A validated file waiting to be submitted.
#[derive(Clone, Debug)]
pub struct PendingFile<F> {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub handle: F,
}

/// Files accepted in the current session, in submission order.
#[derive(Clone, Debug)]
pub struct UploadBatch<F> {
    files: Vec<PendingFile<F>>,
    next_id: u64,
}

impl<F> Default for UploadBatch<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            next_id: 0,
        }
    }
}

impl<F: FileHandle> UploadBatch<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file and return its freshly assigned identifier.
    pub fn push(&mut self, handle: F) -> FileId {
        let id = FileId(self.next_id);
        self.next_id += 1;
        self.files.push(PendingFile {
            id,
            name: handle.name(),
            size: handle.size(),
            mime_type: handle.mime_type(),
            handle,
        });
        id
    }
}

impl<F> UploadBatch<F> {
    /// Remove the file with the given identifier, keeping the order of the rest.
    pub fn remove(&mut self, id: FileId) -> Option<PendingFile<F>> {
        let index = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(index))
    }

    pub fn get(&self, id: FileId) -> Option<&PendingFile<F>> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingFile<F>> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Drop every file. Identifiers keep counting up.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Total payload size in bytes.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}
