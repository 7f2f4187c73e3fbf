//! Core domain entities.
//!
//! - [`Link`] - A short identifier mapped to its original URL, with click history
//! - [`ClickEvent`] - One visit (IP + timestamp)
//! - [`ClickLogEntry`] - One row of the flat click log
//!
//! Creation input uses a separate struct ([`NewLink`]) so store-assigned
//! fields (`id`, `created_at`) never appear in requests.

pub mod click;
pub mod link;

pub use click::{ClickEvent, ClickLogEntry};
pub use link::{Link, NewLink};
