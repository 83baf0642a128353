use shared::order::SubmittedOrder;
use tokio::sync::broadcast;

use super::{IntakeError, IntakeResult, OrderIntake, ensure_not_empty};

/// Default channel capacity for the kitchen feed
pub const KITCHEN_FEED_CAPACITY: usize = 64;

/// Kitchen feed: every accepted order is sent to all current subscribers.
///
/// A subscriber that falls more than `capacity` orders behind sees
/// `RecvError::Lagged` and must resynchronize.
pub struct BroadcastIntake {
    tx: broadcast::Sender<SubmittedOrder>,
}

impl std::fmt::Debug for BroadcastIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastIntake")
            .field("tx", &"<broadcast::Sender>")
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}

impl Default for BroadcastIntake {
    fn default() -> Self {
        Self::new(KITCHEN_FEED_CAPACITY)
    }
}

impl BroadcastIntake {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SubmittedOrder> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl OrderIntake for BroadcastIntake {
    fn accept(&self, order: SubmittedOrder) -> IntakeResult<()> {
        ensure_not_empty(&order)?;
        let order_id = order.order_id.clone();
        match self.tx.send(order) {
            Ok(receivers) => {
                tracing::debug!(order_id = %order_id, receivers, "Order broadcast to kitchen");
                Ok(())
            }
            Err(_) => {
                tracing::warn!(order_id = %order_id, "No kitchen feed subscribed, order dropped");
                Err(IntakeError::NoSubscribers)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::test_support::{noodle_line, sample_order};

    #[tokio::test]
    async fn test_subscribers_receive_order() {
        let intake = BroadcastIntake::new(4);
        let mut kitchen = intake.subscribe();
        let mut counter = intake.subscribe();
        let order = sample_order(vec![noodle_line(2)]);

        intake.accept(order.clone()).unwrap();

        assert_eq!(kitchen.recv().await.unwrap(), order);
        assert_eq!(counter.recv().await.unwrap(), order);
    }

    #[test]
    fn test_no_subscribers_is_an_error() {
        let intake = BroadcastIntake::default();
        let result = intake.accept(sample_order(vec![noodle_line(1)]));
        assert!(matches!(result, Err(IntakeError::NoSubscribers)));
    }

    #[test]
    fn test_empty_order_not_broadcast() {
        let intake = BroadcastIntake::default();
        let mut rx = intake.subscribe();

        let result = intake.accept(sample_order(vec![]));
        assert!(matches!(result, Err(IntakeError::EmptyOrder(_))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_slow_subscriber_lags() {
        let intake = BroadcastIntake::new(2);
        let mut rx = intake.subscribe();
        for qty in 1..=3 {
            intake.accept(sample_order(vec![noodle_line(qty)])).unwrap();
        }

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
        assert_eq!(rx.recv().await.unwrap().items[0].qty, 2);
    }
}
