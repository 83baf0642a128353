//! Order intake - where submitted orders go
//!
//! The flow engine never persists or transmits anything itself. A
//! [`crate::Kiosk`] hands each confirmed [`SubmittedOrder`] to an
//! [`OrderIntake`], which decides what "sending to the kitchen" means:
//!
//! - [`MemoryIntake`]: keeps orders in memory (tests, demos)
//! - [`BroadcastIntake`]: fans orders out over a tokio broadcast channel
//! - [`JsonLinesIntake`]: appends one JSON object per line to a file

mod broadcast;
mod jsonl;
mod memory;

pub use broadcast::BroadcastIntake;
pub use jsonl::{JsonLinesIntake, read_orders};
pub use memory::MemoryIntake;

use shared::order::SubmittedOrder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Order {0} has no items")]
    EmptyOrder(String),

    #[error("No kitchen feed is listening")]
    NoSubscribers,
}

pub type IntakeResult<T> = Result<T, IntakeError>;

/// Receives submitted orders
pub trait OrderIntake: Send + Sync {
    fn accept(&self, order: SubmittedOrder) -> IntakeResult<()>;
}

/// The session lets an empty cart through; intakes do not
pub(crate) fn ensure_not_empty(order: &SubmittedOrder) -> IntakeResult<()> {
    if order.items.is_empty() {
        return Err(IntakeError::EmptyOrder(order.order_id.clone()));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::DateTime;
    use shared::order::{CartLine, DiningMode, OrderStatus, SubmittedOrder};

    pub fn sample_order(items: Vec<CartLine>) -> SubmittedOrder {
        let total = items.iter().map(CartLine::line_total).sum();
        let total_items = items.iter().map(|l| u64::from(l.qty)).sum();
        SubmittedOrder {
            order_id: shared::util::new_order_id(),
            mode: Some(DiningMode::Takeout),
            reservation_kind: None,
            table: None,
            customer_name: Some("王".to_string()),
            reservation_time: None,
            party_size: None,
            items,
            total,
            total_items,
            status: OrderStatus::Pending,
            submitted_at: DateTime::parse_from_rfc3339("2026-10-18T12:00:00+08:00").unwrap(),
        }
    }

    pub fn noodle_line(qty: u32) -> CartLine {
        CartLine::new("combo_original_thin", "原味細麵", 90)
            .with_detail("招牌湯麵")
            .with_qty(qty)
    }
}
