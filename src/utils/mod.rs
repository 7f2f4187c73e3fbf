//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short identifier generation
//! - [`client_ip`] - Caller IP extraction for click tracking
//! - [`location`] - Redirect `Location` header encoding

pub mod client_ip;
pub mod code_generator;
pub mod location;
