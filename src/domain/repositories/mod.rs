//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link records and their embedded click statistics
//! - [`ClickLogRepository`] - Flat click log

pub mod click_log_repository;
pub mod link_repository;

pub use click_log_repository::ClickLogRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_log_repository::MockClickLogRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
