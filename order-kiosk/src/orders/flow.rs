//! Flow state machine
//!
//! ```text
//! SelectingMode ──proceed (context complete)──▶ BuildingOrder { cursor }
//!       ▲  ◀──────────────back──────────────────────┘      │
//!       │                                               submit
//!       └─────────────────reset──────────────── Submitted { order }
//! ```
//!
//! The menu cursor only picks which catalog view is shown; it never affects
//! which global transitions are legal.

use serde::Serialize;
use shared::order::SubmittedOrder;

use super::{FlowResult, OrderContext, Rejection};

/// Top-level menu tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuSection {
    /// 主餐
    Main,
    /// 小菜
    Sides,
}

/// Sub-view under the main tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MainSub {
    /// 招牌汤面 combo builder
    Combo,
    /// 隐藏菜单
    Hidden,
}

/// Which catalog view is visible while building an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCursor {
    Main { sub: Option<MainSub> },
    Sides,
}

impl Default for MenuCursor {
    fn default() -> Self {
        MenuCursor::Main { sub: None }
    }
}

impl MenuCursor {
    pub fn section(self) -> MenuSection {
        match self {
            MenuCursor::Main { .. } => MenuSection::Main,
            MenuCursor::Sides => MenuSection::Sides,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "step", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowState {
    #[default]
    SelectingMode,
    BuildingOrder {
        cursor: MenuCursor,
    },
    Submitted {
        order: Box<SubmittedOrder>,
    },
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::SelectingMode => "selecting mode",
            FlowState::BuildingOrder { .. } => "building order",
            FlowState::Submitted { .. } => "submitted",
        }
    }

    pub fn is_selecting_mode(&self) -> bool {
        matches!(self, FlowState::SelectingMode)
    }

    pub fn is_building_order(&self) -> bool {
        matches!(self, FlowState::BuildingOrder { .. })
    }

    pub fn cursor(&self) -> Option<MenuCursor> {
        match self {
            FlowState::BuildingOrder { cursor } => Some(*cursor),
            _ => None,
        }
    }

    pub fn submitted_order(&self) -> Option<&SubmittedOrder> {
        match self {
            FlowState::Submitted { order } => Some(order.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn require_selecting_mode(&self) -> FlowResult {
        if self.is_selecting_mode() {
            Ok(())
        } else {
            Err(Rejection::WrongStep(self.name()))
        }
    }

    pub(crate) fn require_building_order(&self) -> FlowResult {
        if self.is_building_order() {
            Ok(())
        } else {
            Err(Rejection::WrongStep(self.name()))
        }
    }

    /// `SelectingMode → BuildingOrder`, gated on context completeness
    pub fn proceed_to_menu(&mut self, context: &OrderContext) -> FlowResult {
        self.require_selecting_mode()?;
        if !context.is_complete() {
            return Err(Rejection::IncompleteContext(context.mode()));
        }
        *self = FlowState::BuildingOrder {
            cursor: MenuCursor::default(),
        };
        Ok(())
    }

    /// `BuildingOrder → SelectingMode` (返回); the cursor is dropped
    pub fn back_to_mode_selection(&mut self) -> FlowResult {
        self.require_building_order()?;
        *self = FlowState::SelectingMode;
        Ok(())
    }

    /// `BuildingOrder → Submitted`
    pub fn mark_submitted(&mut self, order: SubmittedOrder) -> FlowResult {
        self.require_building_order()?;
        *self = FlowState::Submitted {
            order: Box::new(order),
        };
        Ok(())
    }

    /// Switch menu tab; going back to the main tab shows its overview
    pub fn open_section(&mut self, section: MenuSection) -> FlowResult {
        let cursor = self.cursor_mut()?;
        *cursor = match section {
            MenuSection::Main => MenuCursor::Main { sub: None },
            MenuSection::Sides => MenuCursor::Sides,
        };
        Ok(())
    }

    /// Open a main-tab sub-view (only from the main tab)
    pub fn open_main_sub(&mut self, sub: MainSub) -> FlowResult {
        let cursor = self.cursor_mut()?;
        match cursor {
            MenuCursor::Main { sub: current } => {
                *current = Some(sub);
                Ok(())
            }
            MenuCursor::Sides => Err(Rejection::WrongStep("on the sides tab")),
        }
    }

    /// Back to the main-tab overview (回主餐选单)
    pub fn close_main_sub(&mut self) -> FlowResult {
        let cursor = self.cursor_mut()?;
        match cursor {
            MenuCursor::Main { sub } => {
                *sub = None;
                Ok(())
            }
            MenuCursor::Sides => Err(Rejection::WrongStep("on the sides tab")),
        }
    }

    fn cursor_mut(&mut self) -> FlowResult<&mut MenuCursor> {
        match self {
            FlowState::BuildingOrder { cursor } => Ok(cursor),
            other => Err(Rejection::WrongStep(other.name())),
        }
    }
}
