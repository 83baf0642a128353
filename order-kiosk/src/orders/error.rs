use shared::order::{DiningMode, RejectionCode};
use thiserror::Error;

/// Soft rejection of a session operation
///
/// A rejected operation leaves every piece of session state untouched. The
/// caller (a guarded UI) is expected to prevent these, so they are reported
/// as values and never treated as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Order context incomplete for mode {0:?}")]
    IncompleteContext(Option<DiningMode>),

    #[error("Combo selection incomplete")]
    IncompleteCombo,

    #[error("Cart line not found: {0}")]
    UnknownLine(String),

    #[error("Combo option not found: {0}")]
    UnknownOption(String),

    #[error("Catalog item not found: {0}")]
    UnknownItem(String),

    #[error("Catalog item unavailable: {0}")]
    ItemUnavailable(String),

    #[error("Table not found: {0}")]
    UnknownTable(String),

    #[error("Invalid reservation time: {0}")]
    InvalidReservationTime(String),

    #[error("Invalid party size: {0}")]
    InvalidPartySize(u8),

    #[error("Customer name is too long ({len} chars, max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Operation not allowed while {0}")]
    WrongStep(&'static str),
}

impl Rejection {
    /// Serializable code (前端负责本地化)
    pub fn code(&self) -> RejectionCode {
        match self {
            Rejection::IncompleteContext(_) => RejectionCode::IncompleteContext,
            Rejection::IncompleteCombo => RejectionCode::IncompleteCombo,
            Rejection::UnknownLine(_) => RejectionCode::UnknownLine,
            Rejection::UnknownOption(_) => RejectionCode::UnknownOption,
            Rejection::UnknownItem(_) => RejectionCode::UnknownItem,
            Rejection::ItemUnavailable(_) => RejectionCode::ItemUnavailable,
            Rejection::UnknownTable(_) => RejectionCode::UnknownTable,
            Rejection::InvalidReservationTime(_) => RejectionCode::InvalidReservationTime,
            Rejection::InvalidPartySize(_) => RejectionCode::InvalidPartySize,
            Rejection::NameTooLong { .. } => RejectionCode::NameTooLong,
            Rejection::WrongStep(_) => RejectionCode::WrongStep,
        }
    }
}

pub type FlowResult<T = ()> = Result<T, Rejection>;
