//! Input validation helpers
//!
//! Limits follow the kiosk form fields: a customer name must fit on one line
//! of the kitchen ticket.

use crate::orders::{FlowResult, Rejection};

/// Customer name limit (chars)
pub const MAX_NAME_LEN: usize = 50;

/// Whether a text field counts as filled in (non-empty after trimming).
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate a customer name as typed. Emptiness is allowed here; it only
/// matters to the completeness check.
pub fn validate_customer_name(value: &str) -> FlowResult {
    let len = value.chars().count();
    if len > MAX_NAME_LEN {
        return Err(Rejection::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}
