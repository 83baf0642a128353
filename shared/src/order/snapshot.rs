//! Submitted order - immutable record handed to order intake

use super::types::{CartLine, DiningMode, ReservationKind};
use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};

/// Order status at intake
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Waiting for the kitchen
    #[default]
    Pending,
}

/// Snapshot of one confirmed order
///
/// Fields irrelevant to the active mode are `None`: reservation fields outside
/// reservation mode, `table` outside dine-in, `party_size` unless the
/// reservation is for dining in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmittedOrder {
    /// Order ID (UUID v4)
    pub order_id: String,
    pub mode: Option<DiningMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_kind: Option<ReservationKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u8>,
    /// Cart copy at submission time
    pub items: Vec<CartLine>,
    /// Σ price × qty
    pub total: u64,
    /// Σ qty
    pub total_items: u64,
    #[serde(default)]
    pub status: OrderStatus,
    /// Business-local submission time
    pub submitted_at: DateTime<FixedOffset>,
}

impl SubmittedOrder {
    /// Number of distinct lines (共 N 項)
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}
