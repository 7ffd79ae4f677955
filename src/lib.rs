//! urgelog - private journal for gambling urges
//!
//! Stores structured self-observation entries in a synced key-value store
//! (with a local fallback) and derives a title, emoji and tags for each entry
//! from its free text.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::UrgelogError;
