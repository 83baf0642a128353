/// Generate a new order ID (UUID v4).
///
/// Used as the document key once an intake persists the order.
pub fn new_order_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
