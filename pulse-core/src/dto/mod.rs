//! Data Transfer Objects
//!
//! Request bodies sent to the dashboard API. These are lightweight
//! representations optimized for the wire, separate from the domain types
//! the API returns.

pub mod share;
