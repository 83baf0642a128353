//! Data models
//!
//! Read-only catalog definitions supplied to the ordering engine.

pub mod catalog;

// Re-exports
pub use catalog::*;
