//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link records in PostgreSQL
//! - [`PgClickLogRepository`] - Flat click log in PostgreSQL
//! - [`MemoryLinkRepository`], [`MemoryClickLogRepository`] - In-process
//!   equivalents used by the handler tests

pub mod memory_repository;
pub mod pg_click_log_repository;
pub mod pg_link_repository;

pub use memory_repository::{MemoryClickLogRepository, MemoryLinkRepository};
pub use pg_click_log_repository::PgClickLogRepository;
pub use pg_link_repository::PgLinkRepository;
