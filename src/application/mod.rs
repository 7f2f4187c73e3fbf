//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and business rules, and provide a
//! small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup
//! - [`services::click_service::ClickService`] - Click recording across sinks

pub mod services;
