//! Submission gate - freezes context and cart into a [`SubmittedOrder`]
//!
//! The gate itself enforces nothing: an empty cart still produces an order
//! with no items and a zero total. Blocking that is up to the UI and intake.

use chrono::{DateTime, FixedOffset};
use shared::order::{DiningMode, OrderStatus, ReservationKind, SubmittedOrder};
use shared::util::new_order_id;

use super::{Cart, OrderContext};
use crate::utils::is_filled;

/// Build the immutable order record at `submitted_at`.
///
/// Only fields relevant to the active mode are copied; the cart is copied by
/// value so later cart changes never reach the record.
pub fn submit(
    context: &OrderContext,
    cart: &Cart,
    submitted_at: DateTime<FixedOffset>,
) -> SubmittedOrder {
    let mode = context.mode();
    let is_reservation = mode == Some(DiningMode::Reservation);

    let reservation_kind = context.reservation_kind().filter(|_| is_reservation);
    let party_size = (reservation_kind == Some(ReservationKind::DineIn))
        .then(|| context.party_size());

    SubmittedOrder {
        order_id: new_order_id(),
        mode,
        reservation_kind,
        table: context
            .table()
            .filter(|_| mode == Some(DiningMode::DineIn))
            .map(str::to_string),
        customer_name: Some(context.customer_name().trim())
            .filter(|name| is_filled(name))
            .map(str::to_string),
        reservation_time: context.reservation_time().filter(|_| is_reservation),
        party_size,
        items: cart.lines().to_vec(),
        total: cart.total_price(),
        total_items: cart.total_items(),
        status: OrderStatus::Pending,
        submitted_at,
    }
}
