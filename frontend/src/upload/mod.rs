//! Upload widget core.
//!
//! Everything here is independent of the DOM: the browser surface is
//! reached only through the [`PageHost`] and [`PreviewUrls`] traits, so
//! the widget logic runs under plain `cargo test`.
//!
//! # Modules
//!
//! - [`policy`] - Size and MIME type validation
//! - [`batch`] - Pending files with stable identifiers
//! - [`widget`] - Accept / remove / submit state machine
//! - [`drag`] - Drag-and-drop event routing
//! - [`format`] - Human readable sizes

pub mod batch;
pub mod drag;
pub mod format;
pub mod policy;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::*;
pub use drag::*;
pub use format::*;
pub use policy::*;
pub use widget::*;
