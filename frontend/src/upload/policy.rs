//! Size and type rules a file must satisfy to join the batch.

use thiserror::Error;

use super::{format_file_size, FileHandle};
use crate::config::{ALLOWED_MIME_TYPES, MAX_FILE_SIZE};

const MIB: u64 = 1024 * 1024;

/// Why a file was refused. The `Display` text is what the user sees.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{name} too large; max {limit}")]
    TooLarge {
        name: String,
        size: u64,
        limit: String,
    },

    #[error("{name} unsupported")]
    Unsupported { name: String, mime_type: String },
}

/// Upload validation policy, fixed for the lifetime of a widget.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationPolicy {
    max_bytes: u64,
    allowed_mime_types: Vec<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(MAX_FILE_SIZE, ALLOWED_MIME_TYPES.iter().copied())
    }
}

impl ValidationPolicy {
    pub fn new<I, S>(max_bytes: u64, allowed_mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            max_bytes,
            allowed_mime_types: allowed_mime_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn allowed_mime_types(&self) -> &[String] {
        &self.allowed_mime_types
    }

    /// Limit as shown in rejection messages, e.g. `16MB`.
    pub fn limit_label(&self) -> String {
        if self.max_bytes >= MIB && self.max_bytes % MIB == 0 {
            format!("{}MB", self.max_bytes / MIB)
        } else {
            format_file_size(self.max_bytes)
        }
    }

    /// Check a file against the policy. Size is checked before type.
    pub fn check<F: FileHandle>(&self, file: &F) -> Result<(), Rejection> {
        let name = file.name();
        let size = file.size();
        if size > self.max_bytes {
            return Err(Rejection::TooLarge {
                name,
                size,
                limit: self.limit_label(),
            });
        }

        let mime_type = file.mime_type();
        if !self.allowed_mime_types.iter().any(|t| *t == mime_type) {
            return Err(Rejection::Unsupported { name, mime_type });
        }

        Ok(())
    }

    /// Pure predicate form of [`check`](Self::check).
    pub fn allows<F: FileHandle>(&self, file: &F) -> bool {
        self.check(file).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::testing::FakeFile;

    #[test]
    fn test_default_policy() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.max_bytes(), 16 * MIB);
        assert_eq!(policy.allowed_mime_types().len(), 7);
        assert_eq!(policy.limit_label(), "16MB");
    }

    #[test]
    fn test_size_boundary() {
        let policy = ValidationPolicy::default();
        assert!(policy.allows(&FakeFile::new("suite.mp4", 16 * MIB, "video/mp4")));

        let err = policy
            .check(&FakeFile::new("suite.mp4", 16 * MIB + 1, "video/mp4"))
            .unwrap_err();
        assert_eq!(err.to_string(), "suite.mp4 too large; max 16MB");
    }

    #[test]
    fn test_unsupported_type() {
        let policy = ValidationPolicy::default();
        let err = policy
            .check(&FakeFile::new("menu.pdf", 100, "application/pdf"))
            .unwrap_err();
        assert_eq!(err.to_string(), "menu.pdf unsupported");

        // Browsers report an empty type for unknown extensions.
        assert!(!policy.allows(&FakeFile::new("raw.heic", 100, "")));
    }

    #[test]
    fn test_size_checked_before_type() {
        let policy = ValidationPolicy::default();
        let err = policy
            .check(&FakeFile::new("huge.pdf", 20 * MIB, "application/pdf"))
            .unwrap_err();
        assert!(matches!(err, Rejection::TooLarge { .. }));
    }

    #[test]
    fn test_custom_policy_label() {
        let policy = ValidationPolicy::new(1536, ["image/png"]);
        assert_eq!(policy.limit_label(), "1.50 KB");
        assert!(policy.allows(&FakeFile::new("a.png", 1536, "image/png")));
        assert!(!policy.allows(&FakeFile::new("a.jpg", 10, "image/jpeg")));
    }
}
