//! Kiosk - a session wired to an order intake
//!
//! `confirm` is the "送出訂單" button: the session freezes the order and the
//! intake receives it. If the intake fails the session still shows the
//! submitted order, so staff can retry or take it by hand.

use shared::order::SubmittedOrder;
use std::sync::Arc;
use thiserror::Error;

use crate::intake::{IntakeError, OrderIntake};
use crate::orders::{Rejection, Session};

#[derive(Debug, Error)]
pub enum KioskError {
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Order intake failed: {0}")]
    Intake(#[from] IntakeError),
}

pub struct Kiosk {
    session: Session,
    intake: Arc<dyn OrderIntake>,
    /// Id of the last order the intake accepted
    delivered: Option<String>,
}

impl std::fmt::Debug for Kiosk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kiosk")
            .field("session", &self.session)
            .field("intake", &"<OrderIntake>")
            .field("delivered", &self.delivered)
            .finish()
    }
}

impl Kiosk {
    pub fn new(session: Session, intake: Arc<dyn OrderIntake>) -> Self {
        Self {
            session,
            intake,
            delivered: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Submit the session's order and hand it to the intake
    pub fn confirm(&mut self) -> Result<SubmittedOrder, KioskError> {
        let order = self.session.submit()?;
        self.deliver(order)
    }

    /// Retry delivery of an order the intake previously refused.
    ///
    /// An order the intake already accepted is never sent again.
    pub fn resend(&mut self) -> Result<SubmittedOrder, KioskError> {
        let order = self
            .session
            .submitted_order()
            .cloned()
            .ok_or(Rejection::WrongStep(self.session.state().name()))?;
        if self.is_delivered(&order.order_id) {
            return Err(Rejection::WrongStep("delivered").into());
        }
        self.deliver(order)
    }

    /// Whether the intake has accepted `order_id`
    pub fn is_delivered(&self, order_id: &str) -> bool {
        self.delivered.as_deref() == Some(order_id)
    }

    /// Start over for the next customer
    pub fn start_new_order(&mut self) {
        self.delivered = None;
        self.session.reset();
    }

    fn deliver(&mut self, order: SubmittedOrder) -> Result<SubmittedOrder, KioskError> {
        if let Err(e) = self.intake.accept(order.clone()) {
            tracing::error!(
                session_id = %self.session.session_id(),
                order_id = %order.order_id,
                error = %e,
                "Order intake failed"
            );
            return Err(e.into());
        }
        self.delivered = Some(order.order_id.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::intake::{BroadcastIntake, MemoryIntake};
    use crate::orders::{ContextRules, DiningMode};
    use shared::models::ItemList;

    fn kiosk_with(intake: Arc<dyn OrderIntake>) -> Kiosk {
        let session = Session::new(
            Arc::new(StaticCatalog::house_menu()),
            Arc::new(ContextRules::default()),
            chrono_tz::Asia::Taipei,
        );
        Kiosk::new(session, intake)
    }

    fn to_menu(kiosk: &mut Kiosk) {
        let session = kiosk.session_mut();
        session.select_mode(DiningMode::DineIn).unwrap();
        session.select_table("5").unwrap();
        session.proceed_to_menu().unwrap();
    }

    #[test]
    fn test_confirm_delivers_order() {
        let intake = Arc::new(MemoryIntake::new());
        let mut kiosk = kiosk_with(intake.clone());
        to_menu(&mut kiosk);
        kiosk.session_mut().add_item(ItemList::Sides, "s1").unwrap();

        let order = kiosk.confirm().unwrap();

        assert_eq!(intake.orders(), vec![order.clone()]);
        assert_eq!(kiosk.session().submitted_order(), Some(&order));
    }

    #[test]
    fn test_confirm_before_menu_is_rejected() {
        let intake = Arc::new(MemoryIntake::new());
        let mut kiosk = kiosk_with(intake.clone());

        let err = kiosk.confirm().unwrap_err();
        assert!(matches!(err, KioskError::Rejected(Rejection::WrongStep(_))));
        assert!(intake.is_empty());
    }

    #[test]
    fn test_empty_order_stays_submitted_when_intake_refuses() {
        let intake = Arc::new(MemoryIntake::new());
        let mut kiosk = kiosk_with(intake.clone());
        to_menu(&mut kiosk);

        let err = kiosk.confirm().unwrap_err();
        assert!(matches!(err, KioskError::Intake(IntakeError::EmptyOrder(_))));
        assert!(kiosk.session().submitted_order().is_some());
        assert!(intake.is_empty());
    }

    #[test]
    fn test_resend_after_kitchen_comes_online() {
        let intake = Arc::new(BroadcastIntake::new(8));
        let mut kiosk = kiosk_with(intake.clone());
        to_menu(&mut kiosk);
        kiosk.session_mut().add_item(ItemList::Hidden, "h1").unwrap();

        assert!(matches!(
            kiosk.confirm(),
            Err(KioskError::Intake(IntakeError::NoSubscribers))
        ));

        let mut rx = intake.subscribe();
        let order = kiosk.resend().unwrap();
        assert_eq!(rx.try_recv().unwrap(), order);
    }

    #[test]
    fn test_resend_after_successful_confirm_rejected() {
        let intake = Arc::new(MemoryIntake::new());
        let mut kiosk = kiosk_with(intake.clone());
        to_menu(&mut kiosk);
        kiosk.session_mut().add_item(ItemList::Sides, "s1").unwrap();

        let order = kiosk.confirm().unwrap();
        assert!(kiosk.is_delivered(&order.order_id));

        assert!(matches!(
            kiosk.resend(),
            Err(KioskError::Rejected(Rejection::WrongStep("delivered")))
        ));
        assert_eq!(intake.len(), 1);
    }

    #[test]
    fn test_resend_delivers_only_once() {
        let intake = Arc::new(BroadcastIntake::new(8));
        let mut kiosk = kiosk_with(intake.clone());
        to_menu(&mut kiosk);
        kiosk.session_mut().add_item(ItemList::Sides, "s3").unwrap();
        assert!(kiosk.confirm().is_err());

        let mut rx = intake.subscribe();
        kiosk.resend().unwrap();
        assert!(kiosk.resend().is_err());

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_start_new_order_resets_session() {
        let intake = Arc::new(MemoryIntake::new());
        let mut kiosk = kiosk_with(intake);
        to_menu(&mut kiosk);
        kiosk.session_mut().add_item(ItemList::Sides, "s2").unwrap();
        kiosk.confirm().unwrap();

        kiosk.start_new_order();

        assert!(kiosk.session().state().is_selecting_mode());
        assert!(kiosk.session().cart().is_empty());
        assert!(matches!(kiosk.resend(), Err(KioskError::Rejected(_))));
    }
}
