//! Core domain types
//!
//! Entities returned by the dashboard API and shared between the client,
//! the refresh watcher, and the CLI display layer.

pub mod share;
pub mod status;
