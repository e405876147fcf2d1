//! Browser and backend services.
//!
//! # Services
//!
//! - [`upload`] - Multipart submission of the upload batch
//! - [`actions`] - Confirm-and-reload moderation actions
//! - [`host`] - Browser implementations of the widget's page interfaces

pub mod actions;
pub mod host;
pub mod upload;

pub use actions::*;
pub use host::*;
pub use upload::*;
