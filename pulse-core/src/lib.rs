//! Pulse Core
//!
//! Shared types for the pulse toolkit.
//!
//! This crate contains:
//! - Domain types: refresh status and sharing settings entities
//! - DTOs: request bodies sent to the dashboard API

pub mod domain;
pub mod dto;
