use parking_lot::Mutex;
use shared::order::SubmittedOrder;

use super::{IntakeResult, OrderIntake, ensure_not_empty};

/// In-memory order store
#[derive(Debug, Default)]
pub struct MemoryIntake {
    orders: Mutex<Vec<SubmittedOrder>>,
}

impl MemoryIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every accepted order, oldest first
    pub fn orders(&self) -> Vec<SubmittedOrder> {
        self.orders.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}

impl OrderIntake for MemoryIntake {
    fn accept(&self, order: SubmittedOrder) -> IntakeResult<()> {
        ensure_not_empty(&order)?;
        tracing::debug!(order_id = %order.order_id, "Order stored in memory");
        self.orders.lock().push(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::IntakeError;
    use crate::intake::test_support::{noodle_line, sample_order};

    #[test]
    fn test_accepts_in_order() {
        let intake = MemoryIntake::new();
        let first = sample_order(vec![noodle_line(1)]);
        let second = sample_order(vec![noodle_line(3)]);

        intake.accept(first.clone()).unwrap();
        intake.accept(second.clone()).unwrap();

        assert_eq!(intake.orders(), vec![first, second]);
    }

    #[test]
    fn test_empty_order_rejected() {
        let intake = MemoryIntake::new();
        let order = sample_order(vec![]);

        let err = intake.accept(order.clone()).unwrap_err();
        assert!(matches!(err, IntakeError::EmptyOrder(id) if id == order.order_id));
        assert!(intake.is_empty());
    }
}
