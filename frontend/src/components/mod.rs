//! UI Components for the hotel media front end.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Page title and description
//! - [`Footer`] - Page footer
//! - [`ServerLink`] - Anchor to a server-rendered page
//!
//! # Feature Components
//! - [`UploadSection`] - Drop zone, file picker and submit button
//! - [`PreviewGrid`] - Preview cards of the pending files
//! - [`UploadProgress`] - In-flight upload indicator

mod footer;
mod header;
mod hero;
mod preview;
mod progress;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use preview::*;
pub use progress::*;
pub use upload::*;
