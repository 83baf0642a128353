//! Shared types for the order kiosk
//!
//! Serializable domain types used by the engine and by whatever renders it:
//! catalog models, cart lines, dining modes and the submitted order record.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Catalog, CatalogItem, ComboOption, ComboPricing, ItemList};
pub use order::{CartLine, DiningMode, OrderStatus, RejectionCode, ReservationKind, SubmittedOrder};
