//! Order context - the customer's selections on the mode screen
//!
//! Which fields are required depends only on the dining mode; the whole rule
//! lives in [`OrderContext::is_complete`].

use chrono::NaiveTime;
use serde::Serialize;
use shared::order::{DiningMode, ReservationKind};

use super::{FlowResult, Rejection};
use crate::utils::time::{self, format_slot, parse_slot};
use crate::utils::{is_filled, validation};

/// Default party size for a dine-in reservation
pub const DEFAULT_PARTY_SIZE: u8 = 2;

/// Floor and booking limits a context is validated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRules {
    /// Selectable table ids
    pub tables: Vec<String>,
    /// Bookable reservation times
    pub reservation_slots: Vec<NaiveTime>,
    pub max_party_size: u8,
}

impl ContextRules {
    /// Tables `"1"..="count"`
    pub fn numbered_tables(count: u16) -> Vec<String> {
        (1..=count).map(|n| n.to_string()).collect()
    }

    pub fn has_table(&self, id: &str) -> bool {
        self.tables.iter().any(|t| t == id)
    }
}

impl Default for ContextRules {
    /// 12 tables, bookings 10:00–21:00 every 5 minutes, up to 10 guests
    fn default() -> Self {
        let open = NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default();
        let close = NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default();
        Self {
            tables: Self::numbered_tables(12),
            reservation_slots: time::reservation_slots(open, close, 5),
            max_party_size: 10,
        }
    }
}

/// Evolving selections of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderContext {
    mode: Option<DiningMode>,
    reservation_kind: Option<ReservationKind>,
    table: Option<String>,
    /// Stored as typed; trimmed only when validated or frozen
    customer_name: String,
    reservation_time: Option<NaiveTime>,
    party_size: u8,
}

impl Default for OrderContext {
    fn default() -> Self {
        Self {
            mode: None,
            reservation_kind: None,
            table: None,
            customer_name: String::new(),
            reservation_time: None,
            party_size: DEFAULT_PARTY_SIZE,
        }
    }
}

impl OrderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<DiningMode> {
        self.mode
    }

    pub fn reservation_kind(&self) -> Option<ReservationKind> {
        self.reservation_kind
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn reservation_time(&self) -> Option<NaiveTime> {
        self.reservation_time
    }

    pub fn party_size(&self) -> u8 {
        self.party_size
    }

    /// Choose a dining mode.
    ///
    /// Clears the reservation kind and the customer name; the table survives
    /// only when the new mode is dine-in.
    pub fn select_mode(&mut self, mode: DiningMode) {
        self.mode = Some(mode);
        self.reservation_kind = None;
        if mode != DiningMode::DineIn {
            self.table = None;
        }
        self.customer_name.clear();
    }

    pub fn select_table(&mut self, rules: &ContextRules, table: &str) -> FlowResult {
        if !rules.has_table(table) {
            return Err(Rejection::UnknownTable(table.to_string()));
        }
        self.table = Some(table.to_string());
        Ok(())
    }

    pub fn set_customer_name(&mut self, name: &str) -> FlowResult {
        validation::validate_customer_name(name)?;
        self.customer_name = name.to_string();
        Ok(())
    }

    pub fn select_reservation_kind(&mut self, kind: ReservationKind) {
        self.reservation_kind = Some(kind);
    }

    /// Set the reservation time from `HH:MM`; an empty string clears it.
    pub fn set_reservation_time(&mut self, rules: &ContextRules, value: &str) -> FlowResult {
        if value.trim().is_empty() {
            self.reservation_time = None;
            return Ok(());
        }
        let slot = parse_slot(value)
            .filter(|slot| rules.reservation_slots.contains(slot))
            .ok_or_else(|| Rejection::InvalidReservationTime(value.to_string()))?;
        self.reservation_time = Some(slot);
        Ok(())
    }

    pub fn set_party_size(&mut self, rules: &ContextRules, size: u8) -> FlowResult {
        if size == 0 || size > rules.max_party_size {
            return Err(Rejection::InvalidPartySize(size));
        }
        self.party_size = size;
        Ok(())
    }

    /// Completeness predicate gating `SelectingMode → BuildingOrder`
    pub fn is_complete(&self) -> bool {
        match self.mode {
            None => false,
            Some(DiningMode::DineIn) => self.table.is_some(),
            Some(DiningMode::Takeout) => is_filled(&self.customer_name),
            Some(DiningMode::Reservation) => {
                self.reservation_kind.is_some()
                    && self.reservation_time.is_some()
                    && is_filled(&self.customer_name)
            }
        }
    }

    /// Header label for the menu screen (mode plus table, name or time)
    pub fn mode_label(&self) -> String {
        match self.mode {
            None => String::new(),
            Some(DiningMode::DineIn) => {
                format!("{} — 桌號 {}", DiningMode::DineIn.label(), self.table().unwrap_or(""))
            }
            Some(DiningMode::Takeout) => {
                format!("{} — {}", DiningMode::Takeout.label(), self.customer_name.trim())
            }
            Some(DiningMode::Reservation) => {
                let kind = self
                    .reservation_kind
                    .map(ReservationKind::label)
                    .unwrap_or(DiningMode::Reservation.label());
                let time = self.reservation_time.map(format_slot).unwrap_or_default();
                format!("{kind} — {time}")
            }
        }
    }
}
