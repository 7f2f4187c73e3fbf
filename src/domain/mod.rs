//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_sink`] - Click recording destinations
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository and sink traits are implemented elsewhere.
//!
//! # Click Processing Flow
//!
//! 1. Redirect handler resolves the short URL
//! 2. [`crate::application::services::ClickService`] builds a [`entities::ClickEvent`]
//! 3. Every configured [`click_sink::ClickSink`] records it, awaited in order
//! 4. Handler issues the redirect

pub mod click_sink;
pub mod entities;
pub mod repositories;
