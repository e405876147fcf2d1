//! Application configuration.
//!
//! Centralized configuration for the hotel media front end. The values
//! mirror what the back office server expects; they are compiled in
//! because the bundle is served by that same server.

/// Backend base URL.
///
/// Empty means same origin as the page that loaded the bundle.
pub const BACKEND_URL: &str = "";

/// Path of the multipart upload endpoint.
pub const UPLOAD_ENDPOINT: &str = "/media/upload";

/// Multipart field name, repeated once per file.
pub const UPLOAD_FIELD: &str = "files[]";

/// Maximum file size accepted by the upload widget (in bytes).
///
/// 16 MB limit.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// MIME types accepted by the upload widget.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/avi",
    "video/mov",
];

/// `accept` attribute for the hidden file input.
pub const FILE_INPUT_ACCEPT: &str = "image/*,video/*";

/// Comment approval path prefix (`/<id>` appended).
pub const APPROVE_COMMENT_PATH: &str = "/binhluan/duyet";

/// Comment rejection path prefix.
pub const REJECT_COMMENT_PATH: &str = "/binhluan/tu-choi";

/// Post publication path prefix.
pub const PUBLISH_POST_PATH: &str = "/baiviet/xuat-ban";

/// Media deletion path prefix.
pub const DELETE_MEDIA_PATH: &str = "/media/delete";

/// Application name shown in the header and document title.
pub const APP_NAME: &str = "Hotel Media";

/// Back office pages linked from the header, as `(path, label)`.
///
/// Served by the back office server, never by the app router.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/media/anh", "Images"),
    ("/media/video", "Videos"),
    ("/binhluan/cho-duyet", "Pending comments"),
    ("/quanly/baiviet", "Posts"),
];

/// Back office pages linked from the footer.
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("/media", "Media"),
    ("/binhluan/cho-duyet", "Comments"),
    ("/quanly/baiviet", "Posts"),
];
