//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the media upload endpoint.
///
/// The server answers `{"error": "..."}` with a 400 status when it rejects
/// the request, so a missing `success` decodes as `false`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    /// Whether the server stored the files
    #[serde(default)]
    pub success: bool,
    /// Server-provided failure reason
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable status message
    #[serde(default)]
    pub message: Option<String>,
    /// Identifier of the created media record
    #[serde(default)]
    pub media_id: Option<i64>,
    /// Public URL of the stored media
    #[serde(default)]
    pub url: Option<String>,
}

/// Response from the fire-and-reload action endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all network and browser operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request could not be built or sent.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status and no usable body.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// A browser API call failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// Build a [`AppError::Browser`] from a thrown JS value.
    pub fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        let message = js_sys::Reflect::get(value, &"message".into())
            .ok()
            .and_then(|v| v.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| "Unknown JS error".to_string());
        AppError::Browser(message)
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
