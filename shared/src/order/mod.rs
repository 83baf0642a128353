//! Ordering session types
//!
//! - Types: dining mode, reservation kind, cart lines, rejection codes
//! - Snapshot: the immutable order record produced on submission

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{OrderStatus, SubmittedOrder};
pub use types::*;
