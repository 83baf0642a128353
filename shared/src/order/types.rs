//! Shared types for the ordering session

use serde::{Deserialize, Serialize};

// ============================================================================
// Dining Mode
// ============================================================================

/// 用餐方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiningMode {
    /// 内用
    DineIn,
    /// 外带
    Takeout,
    /// 预约
    Reservation,
}

impl DiningMode {
    pub fn label(self) -> &'static str {
        match self {
            DiningMode::DineIn => "內用",
            DiningMode::Takeout => "外帶",
            DiningMode::Reservation => "預約",
        }
    }
}

/// 预约类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationKind {
    /// 预约内用
    DineIn,
    /// 预约外带
    Takeout,
}

impl ReservationKind {
    pub fn label(self) -> &'static str {
        match self {
            ReservationKind::DineIn => "預約內用",
            ReservationKind::Takeout => "預約外帶",
        }
    }
}

// ============================================================================
// Cart Line
// ============================================================================

/// Combo line id prefix
pub const COMBO_ID_PREFIX: &str = "combo_";

/// One distinct purchasable entry in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Catalog id, or `combo_{base}_{modifier}` for synthesized combos
    pub id: String,
    pub name: String,
    pub price: u32,
    /// Always >= 1 while the line is in a cart
    pub qty: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CartLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            qty: 1,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = qty;
        self
    }

    /// price × qty
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.qty)
    }

    /// Deterministic combo line id: the same pair always yields the same id
    pub fn combo_id(base_id: &str, modifier_id: &str) -> String {
        format!("{COMBO_ID_PREFIX}{base_id}_{modifier_id}")
    }

    pub fn is_combo(&self) -> bool {
        self.id.starts_with(COMBO_ID_PREFIX)
    }
}

// ============================================================================
// Rejection Codes
// ============================================================================

/// Soft rejection codes (前端负责本地化)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionCode {
    IncompleteContext,
    IncompleteCombo,
    UnknownLine,
    UnknownOption,
    UnknownItem,
    ItemUnavailable,
    UnknownTable,
    InvalidReservationTime,
    InvalidPartySize,
    NameTooLong,
    WrongStep,
}
