//! Ordering engine
//!
//! - **context**: the customer's mode-screen selections and completeness rule
//! - **cart**: cart aggregation engine
//! - **combo**: build-your-own combo synthesis
//! - **flow**: step / menu-cursor state machine
//! - **submission**: freezes context + cart into a `SubmittedOrder`
//! - **session**: owns all of the above for one customer
//!
//! # Data Flow
//!
//! ```text
//! UI action → Session ──▶ OrderContext ──(complete?)──▶ FlowState
//!                 │
//!                 ├──▶ ComboBuilder ──commit──▶ Cart
//!                 └──▶ Cart
//!
//! submit → submission::submit(context, cart) → SubmittedOrder → OrderIntake
//! ```

pub mod cart;
pub mod combo;
pub mod context;
pub mod error;
pub mod flow;
pub mod session;
pub mod submission;

// Re-exports
pub use cart::Cart;
pub use combo::ComboBuilder;
pub use context::{ContextRules, DEFAULT_PARTY_SIZE, OrderContext};
pub use error::{FlowResult, Rejection};
pub use flow::{FlowState, MainSub, MenuCursor, MenuSection};
pub use session::Session;

// Re-export shared types for convenience
pub use shared::order::{
    CartLine, DiningMode, OrderStatus, RejectionCode, ReservationKind, SubmittedOrder,
};
